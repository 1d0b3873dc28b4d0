use std::path::Path;
use std::process::Child;

use criterion_plot::prelude::*;

use super::{axis_limits, Plotter, TITLE, X_LABEL, Y_LABEL};
use crate::benchmark::Measurements;
use crate::error::{Error, Result};
use crate::format;

const BACKEND: &str = "gnuplot";

fn gnuplot_escape(string: &str) -> String {
    string.replace('_', "\\_").replace('\'', "''")
}

static DEFAULT_FONT: &str = "Helvetica";
static SIZE: Size = Size(1000, 600);

const LINEWIDTH: LineWidth = LineWidth(2.);
const POINT_SIZE: PointSize = PointSize(1.);

fn debug_script(path: &Path, figure: &Figure) {
    if crate::debug_enabled() {
        let mut script_path = path.to_path_buf();
        script_path.set_extension("gnuplot");
        info!("Writing gnuplot script to {:?}", script_path);
        let result = figure.save(script_path.as_path());
        if let Err(e) = result {
            error!("Failed to write debug output: {}", e);
        }
    }
}

pub(crate) fn exponential_figure(measurements: &Measurements) -> Figure {
    let ((x_min, x_max), (y_min, y_max)) =
        axis_limits(measurements.sizes(), measurements.seconds());

    let mut figure = Figure::new();
    figure
        .set(Font(DEFAULT_FONT))
        .set(SIZE)
        .set(Title(gnuplot_escape(TITLE)))
        .configure(Key, |k| k.hide())
        .configure(Axis::BottomX, |a| {
            a.configure(Grid::Major, |g| g.show())
                .set(Label(X_LABEL))
                .set(Range::Limits(x_min, x_max))
        })
        .configure(Axis::LeftY, |a| {
            a.configure(Grid::Major, |g| g.show())
                .set(Label(Y_LABEL))
                .set(Range::Limits(y_min, y_max))
        })
        .plot(
            LinesPoints {
                x: measurements.sizes(),
                y: measurements.seconds(),
            },
            |lp| {
                lp.set(Color::Red)
                    .set(LINEWIDTH)
                    .set(LineType::Dash)
                    .set(PointType::Circle)
                    .set(POINT_SIZE)
            },
        );
    figure
}

/// Renders through the external `gnuplot` command, one child process per chart.
#[derive(Default)]
pub(crate) struct Gnuplot {
    process_list: Vec<Child>,
}

impl Plotter for Gnuplot {
    fn exponential(&mut self, path: &Path, measurements: &Measurements) -> Result<()> {
        let mut figure = exponential_figure(measurements);
        debug_script(path, &figure);
        let child = figure
            .set(Output(path.to_path_buf()))
            .draw()
            .map_err(|inner| Error::PlotError {
                backend: BACKEND,
                inner,
            })?;
        self.process_list.push(child);
        Ok(())
    }

    fn wait(&mut self) -> Result<()> {
        let start = std::time::Instant::now();
        let child_count = self.process_list.len();
        for child in self.process_list.drain(..) {
            match child.wait_with_output() {
                Ok(ref out) if out.status.success() => {}
                Ok(out) => {
                    return Err(Error::PlotFailed {
                        backend: BACKEND,
                        message: String::from_utf8_lossy(&out.stderr).into_owned(),
                    })
                }
                Err(inner) => {
                    return Err(Error::PlotError {
                        backend: BACKEND,
                        inner,
                    })
                }
            }
        }
        let elapsed = &start.elapsed();
        info!(
            "Waiting for {} gnuplot processes took {}",
            child_count,
            format::time(elapsed.as_nanos() as f64)
        );
        Ok(())
    }
}
