//! A small demonstration of exponential time complexity.
//!
//! `fib-growth` times the textbook recursive Fibonacci function for a range of input sizes,
//! prints the results as a table and charts execution time against `n`. Every unit increase of
//! `n` multiplies the running time by roughly the golden ratio, which is what the chart makes
//! visible.
//!
//! ```no_run
//! use fib_growth::{Demo, InputSizes};
//!
//! Demo::default()
//!     .input_sizes(InputSizes::new(10, 30, 2).unwrap())
//!     .run()
//!     .unwrap();
//! ```

#![warn(bare_trait_objects)]

#[macro_use]
extern crate lazy_static;
#[macro_use]
extern crate serde_derive;

// Needs to be declared before other modules
// in order to be usable there.
#[macro_use]
mod macros_private;

mod analysis;
mod benchmark;
pub mod cli;
mod error;
mod fibonacci;
mod format;
mod fs;
pub mod measurement;
mod plot;
mod report;
mod routine;
mod viewer;

use std::env;
use std::io::{stdout, Write};
use std::path::{Path, PathBuf};

use criterion_plot::{Version, VersionError};

pub use crate::analysis::Growth;
pub use crate::benchmark::{BenchmarkConfig, InputSizes, Measurements};
pub use crate::error::{Error, Result};
pub use crate::fibonacci::{call_count, fibonacci};
pub use crate::plot::PlottingBackend;
pub use crate::report::{JsonReport, OutputFormat, Report, TableReport};
pub use crate::viewer::Viewer;

use crate::cli::Args;
use crate::measurement::{Measurement, WallTime};

lazy_static! {
    static ref DEBUG_ENABLED: bool = env::var_os("FIB_GROWTH_DEBUG").is_some();
    static ref GNUPLOT_VERSION: std::result::Result<Version, VersionError> =
        criterion_plot::version();
    static ref DEFAULT_PLOTTING_BACKEND: PlottingBackend = {
        match &*GNUPLOT_VERSION {
            Ok(_) => PlottingBackend::Gnuplot,
            Err(e) => {
                info!("Gnuplot not found or not usable, using plotters backend: {}", e);
                PlottingBackend::Plotters
            }
        }
    };
    static ref DEFAULT_OUTPUT_DIRECTORY: PathBuf = {
        // Set the output directory to (in descending order of preference):
        // - $FIB_GROWTH_HOME
        // - $CARGO_TARGET_DIR/fib-growth
        // - ./target/fib-growth
        if let Some(value) = env::var_os("FIB_GROWTH_HOME") {
            PathBuf::from(value)
        } else if let Some(value) = env::var_os("CARGO_TARGET_DIR") {
            PathBuf::from(value).join("fib-growth")
        } else {
            PathBuf::from("target/fib-growth")
        }
    };
}

fn debug_enabled() -> bool {
    *DEBUG_ENABLED
}

/// A function that is opaque to the optimizer, used to prevent the compiler from
/// optimizing away computations in a benchmark.
///
/// This variant is stable-compatible, but it may cause some performance overhead
/// or fail to prevent code from being eliminated.
pub fn black_box<T>(dummy: T) -> T {
    unsafe {
        let ret = std::ptr::read_volatile(&dummy);
        std::mem::forget(dummy);
        ret
    }
}

/// The demo driver.
///
/// Measures `fibonacci(n)` for every configured input size, reports each row as it is measured,
/// then renders the chart and hands it to the viewer. `Demo::default().run()` is the whole
/// program when no command-line options are given.
pub struct Demo<M: Measurement = WallTime> {
    config: BenchmarkConfig,
    plotting_backend: PlottingBackend,
    plotting_enabled: bool,
    output_directory: PathBuf,
    output_format: OutputFormat,
    enable_text_coloring: bool,
    viewer: Option<Viewer>,
    measurement: M,
}

impl Default for Demo {
    /// Creates a demo with the default configuration:
    ///
    /// - Input sizes: 10, 12, ..., 30
    /// - Sample size: 1
    /// - Plotting: enabled, using gnuplot if available or plotters if not
    /// - Viewer: `$FIB_GROWTH_VIEWER` or the desktop's opener
    /// - Output: a colored table when stdout is a terminal
    fn default() -> Demo {
        Demo {
            config: BenchmarkConfig::default(),
            plotting_backend: *DEFAULT_PLOTTING_BACKEND,
            plotting_enabled: true,
            output_directory: DEFAULT_OUTPUT_DIRECTORY.clone(),
            output_format: OutputFormat::Table,
            enable_text_coloring: atty::is(atty::Stream::Stdout),
            viewer: Some(Viewer::default()),
            measurement: WallTime,
        }
    }
}

impl<M: Measurement> Demo<M> {
    /// Changes the measurement used to time the workload.
    pub fn with_measurement<M2: Measurement>(self, m: M2) -> Demo<M2> {
        Demo {
            config: self.config,
            plotting_backend: self.plotting_backend,
            plotting_enabled: self.plotting_enabled,
            output_directory: self.output_directory,
            output_format: self.output_format,
            enable_text_coloring: self.enable_text_coloring,
            viewer: self.viewer,
            measurement: m,
        }
    }

    /// Changes the input sizes to measure.
    pub fn input_sizes(mut self, sizes: InputSizes) -> Demo<M> {
        self.config.input_sizes = sizes;
        self
    }

    /// Changes how many times each input size is run. The reported duration is the mean.
    ///
    /// # Panics
    ///
    /// Panics if `n` is zero.
    pub fn sample_size(mut self, n: usize) -> Demo<M> {
        assert!(n >= 1);

        self.config.sample_size = n;
        self
    }

    /// Set the plotting backend. By default, the demo will use gnuplot if available, or plotters
    /// if not.
    pub fn plotting_backend(mut self, backend: PlottingBackend) -> Demo<M> {
        self.plotting_backend = backend;
        self
    }

    /// Enables rendering the chart.
    pub fn with_plots(mut self) -> Demo<M> {
        self.plotting_enabled = true;
        self
    }

    /// Disables rendering and displaying the chart.
    pub fn without_plots(mut self) -> Demo<M> {
        self.plotting_enabled = false;
        self
    }

    /// Changes the directory the chart is written to.
    pub fn output_directory(mut self, path: &Path) -> Demo<M> {
        self.output_directory = path.to_owned();
        self
    }

    /// Changes what is printed to stdout.
    pub fn output_format(mut self, format: OutputFormat) -> Demo<M> {
        self.output_format = format;
        self
    }

    /// Enables or disables ANSI styling of the table.
    pub fn text_coloring(mut self, enabled: bool) -> Demo<M> {
        self.enable_text_coloring = enabled;
        self
    }

    /// Changes the program used to display the chart.
    pub fn with_viewer(mut self, viewer: Viewer) -> Demo<M> {
        self.viewer = Some(viewer);
        self
    }

    /// Renders the chart without displaying it.
    pub fn without_viewer(mut self) -> Demo<M> {
        self.viewer = None;
        self
    }

    /// Path of the rendered chart.
    pub fn chart_path(&self) -> PathBuf {
        self.output_directory.join(plot::FILE_NAME)
    }

    /// Configures the demo from the command line, exiting with usage information on invalid
    /// arguments.
    #[must_use]
    pub fn configure_from_args(self) -> Demo<M> {
        match self.apply_args(cli::parse_args()) {
            Ok(demo) => demo,
            Err(e) => {
                eprintln!("Error parsing CLI args: {}", e);
                std::process::exit(1);
            }
        }
    }

    /// Applies parsed command-line arguments on top of the current configuration.
    pub fn apply_args(mut self, args: Args) -> Result<Demo<M>> {
        if args.start.is_some() || args.end.is_some() || args.step.is_some() {
            let defaults = InputSizes::default();
            let default_step = match defaults.as_slice() {
                [first, second, ..] => second - first,
                _ => 1,
            };
            self.config.input_sizes = InputSizes::new(
                args.start.or_else(|| defaults.iter().next()).unwrap_or(0),
                args.end.or_else(|| defaults.iter().last()).unwrap_or(0),
                args.step.unwrap_or(default_step),
            )?;
        }
        if let Some(n) = args.sample_size {
            self = self.sample_size(n);
        }
        if args.no_plot {
            self.plotting_enabled = false;
        }
        if args.no_display {
            self.viewer = None;
        } else if let Some(viewer) = args.viewer.as_deref().and_then(Viewer::parse) {
            self.viewer = Some(viewer);
        }
        if let Some(backend) = args.plotting_backend {
            self.plotting_backend = backend;
        }
        if let Some(dir) = args.output_dir {
            self.output_directory = dir;
        }
        self.output_format = args.output_format;
        self.enable_text_coloring = args.color.enabled(atty::is(atty::Stream::Stdout));
        Ok(self)
    }

    /// Runs the demo, reporting to stdout in the configured output format.
    pub fn run(&mut self) -> Result<Measurements> {
        let stdout = stdout();
        let out = stdout.lock();
        match self.output_format {
            OutputFormat::Table => {
                let mut report = TableReport::new(out, self.enable_text_coloring);
                self.run_with_report(&mut report)
            }
            OutputFormat::Json => {
                let mut report = JsonReport::new(out);
                self.run_with_report(&mut report)
            }
        }
    }

    /// Runs the demo, sending progress to `report`.
    ///
    /// Measures every input size in order, then fits the growth factor, renders the chart and
    /// blocks on the viewer. Any failure ends the run.
    pub fn run_with_report(&mut self, report: &mut dyn Report) -> Result<Measurements> {
        report.run_start(self.config.input_sizes.as_slice())?;
        let measurements = routine::measure(&self.measurement, &self.config, report, fibonacci)?;

        let growth = Growth::fit(&measurements);
        if let Some(growth) = &growth {
            info!(
                "Growth factor {:.4} per step of n (R^2 = {:.4})",
                growth.factor, growth.r_squared
            );
        }
        report.final_summary(&measurements, growth.as_ref())?;

        if self.plotting_enabled && !measurements.is_empty() {
            fs::mkdirp(&self.output_directory)?;
            let path = self.chart_path();
            info!("Rendering {:?} with {}", path, self.plotting_backend);

            let mut plotter = self.plotting_backend.create_plotter();
            plotter.exponential(&path, &measurements)?;
            plotter.wait()?;
            report.chart_ready(&path)?;

            if let Some(viewer) = &self.viewer {
                viewer.show(&path)?;
            }
        }

        log_if_err!(stdout().flush().map_err(Error::from));
        Ok(measurements)
    }
}
