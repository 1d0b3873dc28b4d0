mod gnuplot_backend;
mod plotters_backend;

pub(crate) use gnuplot_backend::Gnuplot;
pub(crate) use plotters_backend::PlottersBackend;

use crate::benchmark::Measurements;
use crate::error::Result;
use std::fmt;
use std::path::Path;
use std::str::FromStr;

pub(crate) const TITLE: &str = "Visualization of O(2^n) - Exponential Time Complexity";
pub(crate) const X_LABEL: &str = "Input Size (n)";
pub(crate) const Y_LABEL: &str = "Execution Time (seconds)";
pub(crate) const FILE_NAME: &str = "exponential.svg";

/// Draws the charts of a run. Backends may render asynchronously; `wait` returns once every
/// chart requested so far is on disk.
pub(crate) trait Plotter {
    /// Line chart of execution time against input size.
    fn exponential(&mut self, path: &Path, measurements: &Measurements) -> Result<()>;

    fn wait(&mut self) -> Result<()>;
}

/// Enum representing different plotting backends.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum PlottingBackend {
    /// Plotting backend which uses the external `gnuplot` command to render plots. This is the
    /// default if the `gnuplot` command is installed.
    Gnuplot,
    /// Plotting backend which uses the rust 'Plotters' library. This is the default if `gnuplot`
    /// is not installed.
    Plotters,
}
impl PlottingBackend {
    pub(crate) fn create_plotter(self) -> Box<dyn Plotter> {
        match self {
            PlottingBackend::Gnuplot => Box::new(Gnuplot::default()),
            PlottingBackend::Plotters => Box::new(PlottersBackend),
        }
    }
}

impl FromStr for PlottingBackend {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "gnuplot" => Ok(Self::Gnuplot),
            "plotters" => Ok(Self::Plotters),
            invalid => Err(format!("Invalid plotting backend: {}", invalid)),
        }
    }
}

impl fmt::Display for PlottingBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Gnuplot => "gnuplot",
            Self::Plotters => "plotters",
        })
    }
}

/// Axis limits with some headroom, never empty even for a single sample.
pub(crate) fn axis_limits(sizes: &[u64], seconds: &[f64]) -> ((f64, f64), (f64, f64)) {
    let x_min = sizes.iter().copied().min().unwrap_or(0) as f64;
    let x_max = sizes.iter().copied().max().unwrap_or(0) as f64;
    let y_max = seconds.iter().copied().fold(0f64, f64::max);
    let y_max = if y_max > 0. { y_max * 1.1 } else { 1. };

    ((x_min - 1., x_max + 1.), (0., y_max))
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn backend_from_str() {
        assert_eq!("gnuplot".parse(), Ok(PlottingBackend::Gnuplot));
        assert_eq!("plotters".parse(), Ok(PlottingBackend::Plotters));
        assert!("matplotlib".parse::<PlottingBackend>().is_err());
    }

    #[test]
    fn limits_have_headroom() {
        let ((x0, x1), (y0, y1)) = axis_limits(&[10, 12, 14], &[0.5, 1.0, 2.0]);
        assert_eq!((x0, x1), (9., 15.));
        assert_eq!(y0, 0.);
        assert!((y1 - 2.2).abs() < 1e-12);
    }

    #[test]
    fn limits_for_degenerate_data() {
        let (x, y) = axis_limits(&[10], &[0.0]);
        assert_eq!(x, (9., 11.));
        assert_eq!(y, (0., 1.));
    }
}
