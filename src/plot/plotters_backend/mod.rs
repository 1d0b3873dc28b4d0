use super::{axis_limits, Plotter, TITLE, X_LABEL, Y_LABEL};
use crate::benchmark::Measurements;
use crate::error::{Error, Result};
use plotters::data::float::pretty_print_float;
use plotters::prelude::*;
use plotters::series::DashedLineSeries;
use std::path::Path;

static DEFAULT_FONT: FontFamily = FontFamily::SansSerif;
static SIZE: (u32, u32) = (1000, 600);
static POINT_SIZE: u32 = 4;
static DASH_SIZE: u32 = 8;
static DASH_SPACING: u32 = 6;

const DARK_RED: RGBColor = RGBColor(227, 26, 28);

/// Renders in-process with the `plotters` SVG backend.
#[derive(Default)]
pub struct PlottersBackend;

impl Plotter for PlottersBackend {
    fn exponential(&mut self, path: &Path, measurements: &Measurements) -> Result<()> {
        exponential_figure(path, measurements).map_err(|e| Error::PlotFailed {
            backend: "plotters",
            message: e.to_string(),
        })
    }

    fn wait(&mut self) -> Result<()> {
        Ok(())
    }
}

fn exponential_figure(
    path: &Path,
    measurements: &Measurements,
) -> std::result::Result<(), Box<dyn std::error::Error>> {
    let ((x_min, x_max), (y_min, y_max)) =
        axis_limits(measurements.sizes(), measurements.seconds());
    let points: Vec<(f64, f64)> = measurements
        .sizes()
        .iter()
        .zip(measurements.seconds())
        .map(|(&n, &seconds)| (n as f64, seconds))
        .collect();

    let root_area = SVGBackend::new(path, SIZE).into_drawing_area();
    root_area.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root_area)
        .caption(TITLE, (DEFAULT_FONT, 20))
        .margin((5).percent())
        .set_label_area_size(LabelAreaPosition::Left, (8).percent_width().min(80))
        .set_label_area_size(LabelAreaPosition::Bottom, (5).percent_height().min(40))
        .build_cartesian_2d(x_min..x_max, y_min..y_max)?;

    chart
        .configure_mesh()
        .x_desc(X_LABEL)
        .y_desc(Y_LABEL)
        .x_label_formatter(&|x| pretty_print_float(*x, false))
        .draw()?;

    chart.draw_series(DashedLineSeries::new(
        points.iter().copied(),
        DASH_SIZE,
        DASH_SPACING,
        DARK_RED.stroke_width(2),
    ))?;

    chart.draw_series(
        points
            .iter()
            .map(|&point| Circle::new(point, POINT_SIZE, DARK_RED.filled())),
    )?;

    root_area.present()?;
    Ok(())
}
