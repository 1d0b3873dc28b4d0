use fib_growth::{
    cli, Demo, Growth, InputSizes, JsonReport, Measurements, OutputFormat, PlottingBackend,
    Report, Result, TableReport, Viewer,
};
use serde_json::Value;
use std::cell::RefCell;
use std::path::{Path, PathBuf};
use std::rc::Rc;
use tempfile::{tempdir, TempDir};

/*
 * None of these tests open a chart window: every demo either disables plots or drops the
 * viewer.
 */
fn temp_dir() -> TempDir {
    tempdir().unwrap()
}

fn quiet_demo(dir: &TempDir, sizes: Vec<u64>) -> Demo {
    Demo::default()
        .input_sizes(InputSizes::list(sizes))
        .output_directory(dir.path())
        .without_viewer()
        .text_coloring(false)
}

fn run_table(demo: &mut Demo) -> (Measurements, String) {
    let mut report = TableReport::new(Vec::new(), false);
    let measurements = demo.run_with_report(&mut report).unwrap();
    let output = String::from_utf8(report.into_inner()).unwrap();
    (measurements, output)
}

fn table_rows(output: &str) -> Vec<Vec<String>> {
    output
        .lines()
        .skip_while(|line| !line.starts_with("---"))
        .skip(1)
        .take_while(|line| !line.is_empty())
        .map(|line| line.split('|').map(|cell| cell.trim().to_owned()).collect())
        .collect()
}

fn verify_svg(path: &Path) {
    assert!(
        path.is_file(),
        "File {:?} does not exist or is not a file",
        path
    );
    let contents = std::fs::read_to_string(path).unwrap();
    assert!(contents.contains("<svg"));
}

fn svg_elements<'a>(svg: &'a str, tag: &'a str) -> impl Iterator<Item = &'a str> + 'a {
    svg.split('<').filter(move |el| {
        el.starts_with(tag) && el[tag.len()..].starts_with(char::is_whitespace)
    })
}

#[derive(Clone, Default)]
struct Recorder {
    events: Rc<RefCell<Vec<String>>>,
}
impl Report for Recorder {
    fn run_start(&mut self, sizes: &[u64]) -> Result<()> {
        self.events.borrow_mut().push(format!("start {:?}", sizes));
        Ok(())
    }
    fn measurement_complete(&mut self, n: u64, result: u64, _: f64) -> Result<()> {
        self.events
            .borrow_mut()
            .push(format!("row {} {}", n, result));
        Ok(())
    }
    fn final_summary(&mut self, m: &Measurements, _: Option<&Growth>) -> Result<()> {
        self.events.borrow_mut().push(format!("summary {}", m.len()));
        Ok(())
    }
    fn chart_ready(&mut self, path: &Path) -> Result<()> {
        self.events.borrow_mut().push(format!(
            "chart {}",
            path.file_name().unwrap().to_string_lossy()
        ));
        Ok(())
    }
}

#[test]
fn three_sizes_print_three_rows_in_order() {
    let dir = temp_dir();
    let mut demo = quiet_demo(&dir, vec![10, 12, 14]).without_plots();
    let (measurements, output) = run_table(&mut demo);

    let rows = table_rows(&output);
    assert_eq!(rows.len(), 3);
    let sizes: Vec<&str> = rows.iter().map(|row| row[0].as_str()).collect();
    assert_eq!(sizes, vec!["10", "12", "14"]);
    let results: Vec<&str> = rows.iter().map(|row| row[1].as_str()).collect();
    assert_eq!(results, vec!["55", "144", "377"]);
    for row in &rows {
        let seconds: f64 = row[2].parse().unwrap();
        assert!(seconds >= 0.0);
        assert_eq!(row[2].split('.').nth(1).unwrap().len(), 6);
    }

    assert_eq!(measurements.results(), &[55, 144, 377]);
    assert_eq!(measurements.seconds().len(), measurements.sizes().len());
}

#[test]
fn output_starts_with_banner_and_header() {
    let dir = temp_dir();
    let mut demo = quiet_demo(&dir, vec![1]).without_plots();
    let (_, output) = run_table(&mut demo);
    let lines: Vec<_> = output.lines().collect();

    assert_eq!(lines[0], "Running O(2^n) Exponential Complexity Demo...");
    assert_eq!(lines[1], "");
    assert_eq!(
        lines[2],
        "n          | Result          | Time (seconds)      "
    );
    assert_eq!(lines[3], "-".repeat(50));
}

#[test]
fn default_run_covers_ten_to_thirty() {
    let dir = temp_dir();
    let mut demo = Demo::default()
        .output_directory(dir.path())
        .without_plots()
        .without_viewer();
    let (measurements, _) = run_table(&mut demo);

    assert_eq!(measurements.sizes(), InputSizes::default().as_slice());
    assert_eq!(measurements.results().first(), Some(&55));
    assert_eq!(measurements.results().last(), Some(&832_040));
}

#[test]
fn larger_inputs_take_longer() {
    let dir = temp_dir();
    let mut slower = 0;
    for _ in 0..5 {
        let mut demo = quiet_demo(&dir, vec![10, 30]).without_plots();
        let (measurements, _) = run_table(&mut demo);
        if measurements.seconds()[1] > measurements.seconds()[0] {
            slower += 1;
        }
    }
    assert!(
        slower >= 4,
        "time(30) exceeded time(10) in only {} of 5 runs",
        slower
    );
}

#[test]
fn growth_factor_is_near_the_golden_ratio() {
    let dir = temp_dir();
    let mut demo = quiet_demo(&dir, vec![20, 22, 24, 26, 28]).without_plots();
    let (measurements, output) = run_table(&mut demo);

    let growth = Growth::fit(&measurements).unwrap();
    assert!(
        growth.factor > 1.2 && growth.factor < 2.2,
        "unexpected growth factor {}",
        growth.factor
    );
    assert!(output.contains("fibonacci(28) made 1,028,457 recursive calls"));
}

#[test]
fn plotters_backend_writes_the_chart() {
    let dir = temp_dir();
    let mut demo =
        quiet_demo(&dir, vec![10, 12, 14, 16]).plotting_backend(PlottingBackend::Plotters);
    let (_, output) = run_table(&mut demo);

    let chart = dir.path().join("exponential.svg");
    assert_eq!(demo.chart_path(), chart);
    verify_svg(&chart);
    let svg = std::fs::read_to_string(&chart).unwrap();
    assert!(svg.contains("Visualization of O(2^n) - Exponential Time Complexity"));
    assert!(svg.contains("Input Size (n)"));
    assert!(svg.contains("Execution Time (seconds)"));

    let red_markers = svg_elements(&svg, "circle")
        .filter(|el| el.contains(r##"fill="#E31A1C""##))
        .count();
    assert_eq!(red_markers, 4);
    // A dashed line is drawn as many short segments, far more than the 3 between the points.
    let red_dashes = svg_elements(&svg, "polyline")
        .filter(|el| el.contains(r##"stroke="#E31A1C""##))
        .count();
    assert!(red_dashes > 3, "only {} red line segments", red_dashes);
    assert!(output.contains("[INFO] The chart shows how time increases exponentially."));
    assert!(output
        .contains("[INFO] Try increasing the range to 40, and you'll see a massive slowdown!"));
}

#[test]
fn gnuplot_backend_writes_the_chart() {
    if criterion_plot::version().is_err() {
        return;
    }
    let dir = temp_dir();
    let mut demo =
        quiet_demo(&dir, vec![10, 12, 14, 16]).plotting_backend(PlottingBackend::Gnuplot);
    run_table(&mut demo);

    verify_svg(&dir.path().join("exponential.svg"));
}

#[test]
fn no_plots_means_no_chart() {
    let dir = temp_dir();
    let mut demo = quiet_demo(&dir, vec![10, 12]).without_plots();
    let (_, output) = run_table(&mut demo);

    assert!(!dir.path().join("exponential.svg").exists());
    assert!(!output.contains("[INFO]"));
}

#[test]
fn report_sees_events_in_order() {
    let dir = temp_dir();
    let recorder = Recorder::default();
    let mut demo = quiet_demo(&dir, vec![10, 12]).plotting_backend(PlottingBackend::Plotters);
    demo.run_with_report(&mut recorder.clone()).unwrap();

    assert_eq!(
        *recorder.events.borrow(),
        vec![
            "start [10, 12]",
            "row 10 55",
            "row 12 144",
            "summary 2",
            "chart exponential.svg",
        ]
    );
}

#[cfg(unix)]
#[test]
fn viewer_receives_the_chart_path() {
    let dir = temp_dir();
    let mut demo = quiet_demo(&dir, vec![10, 12])
        .plotting_backend(PlottingBackend::Plotters)
        .with_viewer(Viewer::new("test").arg("-f"));
    run_table(&mut demo);

    let mut demo = quiet_demo(&dir, vec![10, 12])
        .plotting_backend(PlottingBackend::Plotters)
        .with_viewer(Viewer::new("false"));
    let mut report = TableReport::new(Vec::new(), false);
    let err = demo.run_with_report(&mut report).unwrap_err();
    assert!(err.to_string().contains("Chart viewer `false`"));
}

#[test]
fn json_report_emits_parsable_lines() {
    let dir = temp_dir();
    let mut demo = quiet_demo(&dir, vec![10, 12, 14])
        .without_plots()
        .output_format(OutputFormat::Json);
    let mut report = JsonReport::new(Vec::new());
    demo.run_with_report(&mut report).unwrap();
    let output = String::from_utf8(report.into_inner()).unwrap();

    let messages: Vec<Value> = output
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect();
    assert_eq!(messages.len(), 5);
    assert_eq!(messages[0]["reason"], "run-start");
    let results: Vec<u64> = messages[1..4]
        .iter()
        .map(|m| m["result"].as_u64().unwrap())
        .collect();
    assert_eq!(results, vec![55, 144, 377]);
    assert_eq!(messages[4]["reason"], "summary");
    assert_eq!(
        messages[4]["measurements"]["sizes"],
        serde_json::json!([10, 12, 14])
    );
}

#[test]
fn args_override_defaults() {
    let dir = temp_dir();
    let args = cli::Args {
        start: Some(4),
        end: Some(8),
        no_plot: true,
        output_dir: Some(PathBuf::from(dir.path())),
        ..cli::Args::default()
    };
    let mut demo = Demo::default().without_viewer().apply_args(args).unwrap();
    let (measurements, _) = run_table(&mut demo);
    assert_eq!(measurements.sizes(), &[4, 6, 8]);
    assert_eq!(measurements.results(), &[3, 8, 21]);
}

#[test]
fn args_reject_reversed_range() {
    let args = cli::Args {
        start: Some(30),
        end: Some(10),
        ..cli::Args::default()
    };
    assert!(Demo::default().apply_args(args).is_err());
}
