mod error;
mod types;

pub use error::Error;
pub use types::Color;

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;
use std::{env, ffi::OsString};

use clap::{App, Arg, ArgMatches};

use crate::plot::PlottingBackend;
use crate::report::OutputFormat;

#[derive(Debug, Default, PartialEq)]
pub struct Args {
    pub start: Option<u64>,
    pub end: Option<u64>,
    pub step: Option<u64>,
    pub sample_size: Option<usize>,
    pub no_plot: bool,
    pub no_display: bool,
    pub plotting_backend: Option<PlottingBackend>,
    pub output_dir: Option<PathBuf>,
    pub output_format: OutputFormat,
    pub viewer: Option<String>,
    pub color: Color,
}

fn app() -> App<'static, 'static> {
    App::new("fib-growth")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Times naive recursive Fibonacci for growing n and charts the exponential trend")
        .arg(Arg::with_name("start")
            .long("start")
            .takes_value(true)
            .value_name("N")
            .help("Smallest input size. [default: 10]"))
        .arg(Arg::with_name("end")
            .long("end")
            .takes_value(true)
            .value_name("N")
            .help("Largest input size, included when it falls on a step. [default: 30]"))
        .arg(Arg::with_name("step")
            .long("step")
            .takes_value(true)
            .value_name("N")
            .help("Distance between consecutive input sizes. [default: 2]"))
        .arg(Arg::with_name("sample-size")
            .long("sample-size")
            .takes_value(true)
            .value_name("COUNT")
            .help("Timed invocations per input size; the mean is reported. [default: 1]"))
        .arg(Arg::with_name("noplot")
            .short("n")
            .long("noplot")
            .help("Disable chart rendering and display."))
        .arg(Arg::with_name("no-display")
            .long("no-display")
            .help("Render the chart but do not open it."))
        .arg(Arg::with_name("plotting-backend")
            .long("plotting-backend")
            .takes_value(true)
            .possible_values(&["gnuplot", "plotters"])
            .help("Set the plotting backend. By default, gnuplot is used if available, plotters otherwise."))
        .arg(Arg::with_name("output-dir")
            .long("output-dir")
            .takes_value(true)
            .value_name("DIR")
            .help("Directory the chart is written to. [default: $FIB_GROWTH_HOME or target/fib-growth]"))
        .arg(Arg::with_name("output-format")
            .long("output-format")
            .takes_value(true)
            .possible_values(&["table", "json"])
            .default_value("table")
            .help("Change the format of the results printed to stdout."))
        .arg(Arg::with_name("viewer")
            .long("viewer")
            .takes_value(true)
            .value_name("COMMAND")
            .help("Program used to display the chart; the chart path is appended. [default: $FIB_GROWTH_VIEWER or the desktop opener]"))
        .arg(Arg::with_name("color")
            .short("c")
            .long("color")
            .alias("colour")
            .takes_value(true)
            .possible_values(&["auto", "always", "never"])
            .default_value("auto")
            .help("Configure coloring of output. always = always colorize output, never = never colorize output, auto = colorize output if output is a tty."))
}

pub fn parse_args() -> Args {
    match try_parse_args(env::args_os().collect()) {
        Ok(args) => args,
        Err(Error::Clap(e)) => e.exit(),
        Err(e) => {
            eprintln!("Error parsing CLI args: {}", e);
            std::process::exit(1);
        }
    }
}

fn opt_value<T>(matches: &ArgMatches<'_>, flag: &'static str) -> Result<Option<T>, Error>
where
    T: FromStr,
    T::Err: fmt::Display,
{
    matches
        .value_of(flag)
        .map(|value| {
            value.parse::<T>().map_err(|e| Error::InvalidValue {
                flag,
                message: e.to_string(),
            })
        })
        .transpose()
}

fn try_parse_args(args: Vec<OsString>) -> Result<Args, Error> {
    let matches = app().get_matches_from_safe(args)?;

    let sample_size: Option<usize> = opt_value(&matches, "sample-size")?;
    if sample_size == Some(0) {
        return Err(Error::InvalidValue {
            flag: "sample-size",
            message: String::from("must be at least 1"),
        });
    }

    Ok(Args {
        start: opt_value(&matches, "start")?,
        end: opt_value(&matches, "end")?,
        step: opt_value(&matches, "step")?,
        sample_size,
        no_plot: matches.is_present("noplot"),
        no_display: matches.is_present("no-display"),
        plotting_backend: opt_value(&matches, "plotting-backend")?,
        output_dir: matches.value_of_os("output-dir").map(PathBuf::from),
        output_format: opt_value(&matches, "output-format")?.unwrap_or_default(),
        viewer: matches.value_of("viewer").map(String::from),
        color: opt_value(&matches, "color")?.unwrap_or_default(),
    })
}
