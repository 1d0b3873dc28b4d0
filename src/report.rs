use crate::analysis::Growth;
use crate::benchmark::Measurements;
use crate::error::Result;
use crate::fibonacci::call_count;
use crate::format;
use anes::{Attribute, Color, ResetAttributes, SetAttribute, SetForegroundColor};
use std::fmt;
use std::io::Write;
use std::path::Path;
use std::str::FromStr;

pub(crate) const BANNER: &str = "Running O(2^n) Exponential Complexity Demo...";
const SEPARATOR_WIDTH: usize = 50;

/// Receives the progress of a run, in order: `run_start`, one `measurement_complete` per input
/// size, `final_summary` and, when a chart was rendered, `chart_ready`.
pub trait Report {
    fn run_start(&mut self, _sizes: &[u64]) -> Result<()> {
        Ok(())
    }
    fn measurement_complete(&mut self, n: u64, result: u64, seconds: f64) -> Result<()>;
    fn final_summary(&mut self, _measurements: &Measurements, _growth: Option<&Growth>) -> Result<()> {
        Ok(())
    }
    fn chart_ready(&mut self, _path: &Path) -> Result<()> {
        Ok(())
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum OutputFormat {
    Table,
    Json,
}

impl Default for OutputFormat {
    fn default() -> Self {
        Self::Table
    }
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "table" => Ok(Self::Table),
            "json" => Ok(Self::Json),
            invalid => Err(format!("Invalid output format: {}", invalid)),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Table => "table",
            Self::Json => "json",
        })
    }
}

pub(crate) fn table_header() -> String {
    format!("{:<10} | {:<15} | {:<20}", "n", "Result", "Time (seconds)")
}

pub(crate) fn table_row(n: u64, result: u64, seconds: f64) -> String {
    format!("{:<10} | {:<15} | {:<20.6}", n, result, seconds)
}

/// The human-facing report: banner, a fixed-width table and a short interpretation.
pub struct TableReport<W: Write> {
    out: W,
    enable_text_coloring: bool,
}
impl<W: Write> TableReport<W> {
    pub fn new(out: W, enable_text_coloring: bool) -> TableReport<W> {
        TableReport {
            out,
            enable_text_coloring,
        }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn with_color(&self, color: Color, s: &str) -> String {
        if self.enable_text_coloring {
            format!("{}{}{}", SetForegroundColor(color), s, ResetAttributes)
        } else {
            String::from(s)
        }
    }

    fn green(&self, s: &str) -> String {
        self.with_color(Color::DarkGreen, s)
    }

    fn yellow(&self, s: &str) -> String {
        self.with_color(Color::DarkYellow, s)
    }

    fn bold(&self, s: String) -> String {
        if self.enable_text_coloring {
            format!("{}{}{}", SetAttribute(Attribute::Bold), s, ResetAttributes)
        } else {
            s
        }
    }
}
impl<W: Write> Report for TableReport<W> {
    fn run_start(&mut self, _sizes: &[u64]) -> Result<()> {
        writeln!(self.out, "{}\n", BANNER)?;
        let header = self.bold(table_header());
        writeln!(self.out, "{}", header)?;
        writeln!(self.out, "{}", "-".repeat(SEPARATOR_WIDTH))?;
        Ok(())
    }

    fn measurement_complete(&mut self, n: u64, result: u64, seconds: f64) -> Result<()> {
        writeln!(self.out, "{}", table_row(n, result, seconds))?;
        self.out.flush()?;
        Ok(())
    }

    fn final_summary(&mut self, measurements: &Measurements, growth: Option<&Growth>) -> Result<()> {
        writeln!(self.out)?;
        if let Some(growth) = growth {
            let factor = self.green(&format!("{:.3}x", growth.factor));
            writeln!(
                self.out,
                "Each step of n multiplied the running time by about {} (R\u{b2} = {:.4})",
                factor, growth.r_squared
            )?;
        }
        if let Some(&largest) = measurements.sizes().iter().max() {
            writeln!(
                self.out,
                "fibonacci({}) made {} recursive calls",
                largest,
                format::integer(call_count(largest))
            )?;
        }
        Ok(())
    }

    fn chart_ready(&mut self, path: &Path) -> Result<()> {
        writeln!(self.out)?;
        writeln!(self.out, "[INFO] The chart shows how time increases exponentially.")?;
        writeln!(
            self.out,
            "[INFO] Try increasing the range to 40, and you'll see a massive slowdown!"
        )?;
        let path = self.yellow(&path.display().to_string());
        writeln!(self.out, "[INFO] Chart written to {}", path)?;
        self.out.flush()?;
        Ok(())
    }
}

#[derive(Serialize)]
#[serde(tag = "reason", rename_all = "kebab-case")]
enum Message<'a> {
    RunStart {
        sizes: &'a [u64],
    },
    Measurement {
        n: u64,
        result: u64,
        seconds: f64,
    },
    Summary {
        measurements: &'a Measurements,
        growth: Option<&'a Growth>,
    },
    Chart {
        path: &'a Path,
    },
}

/// Machine-readable report: one JSON message per line.
pub struct JsonReport<W: Write> {
    out: W,
}
impl<W: Write> JsonReport<W> {
    pub fn new(out: W) -> JsonReport<W> {
        JsonReport { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn send(&mut self, message: &Message<'_>) -> Result<()> {
        serde_json::to_writer(&mut self.out, message)?;
        writeln!(self.out)?;
        self.out.flush()?;
        Ok(())
    }
}
impl<W: Write> Report for JsonReport<W> {
    fn run_start(&mut self, sizes: &[u64]) -> Result<()> {
        self.send(&Message::RunStart { sizes })
    }

    fn measurement_complete(&mut self, n: u64, result: u64, seconds: f64) -> Result<()> {
        self.send(&Message::Measurement { n, result, seconds })
    }

    fn final_summary(&mut self, measurements: &Measurements, growth: Option<&Growth>) -> Result<()> {
        self.send(&Message::Summary {
            measurements,
            growth,
        })
    }

    fn chart_ready(&mut self, path: &Path) -> Result<()> {
        self.send(&Message::Chart { path })
    }
}
