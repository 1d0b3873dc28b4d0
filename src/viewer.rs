//! Displays a rendered chart with an external program.

use crate::error::{Error, Result};
use std::env;
use std::ffi::OsStr;
use std::path::Path;
use std::process::Command;

const VIEWER_ENV: &str = "FIB_GROWTH_VIEWER";

/// SVG viewers that keep running until their window is closed, in order of preference.
const FOREGROUND_VIEWERS: &[(&str, &[&str])] = &[
    ("eog", &["--new-instance"]),
    ("inkview", &[]),
    ("display", &[]),
];

/// External program used to display a chart. The chart path is appended as the last argument
/// and the viewer is awaited, so with a viewer that stays in the foreground the run only ends
/// once its window is closed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Viewer {
    program: String,
    args: Vec<String>,
}

impl Viewer {
    pub fn new<S: Into<String>>(program: S) -> Viewer {
        Viewer {
            program: program.into(),
            args: Vec::new(),
        }
    }

    pub fn arg<S: Into<String>>(mut self, arg: S) -> Viewer {
        self.args.push(arg.into());
        self
    }

    /// Splits a command line on whitespace into program and arguments. Returns `None` for a
    /// blank command.
    pub fn parse(command: &str) -> Option<Viewer> {
        let mut words = command.split_whitespace();
        let program = words.next()?;
        Some(Viewer {
            program: program.to_owned(),
            args: words.map(str::to_owned).collect(),
        })
    }

    /// The viewer named by `FIB_GROWTH_VIEWER`, if set.
    pub fn from_env() -> Option<Viewer> {
        env::var(VIEWER_ENV).ok().and_then(|cmd| Viewer::parse(&cmd))
    }

    /// A viewer that blocks until its window is closed: `open -W` on macOS, `start /WAIT` on
    /// Windows and elsewhere the first foreground viewer found on `PATH`. Falls back to
    /// `xdg-open`, which may return before the chart is closed.
    pub fn platform_default() -> Viewer {
        if cfg!(target_os = "macos") {
            Viewer::new("open").arg("-W")
        } else if cfg!(target_os = "windows") {
            Viewer::new("cmd").arg("/C").arg("start").arg("/WAIT").arg("")
        } else {
            let found = env::var_os("PATH").and_then(|path| Viewer::foreground_on(&path));
            found.unwrap_or_else(|| {
                info!("No foreground SVG viewer found on PATH, falling back to xdg-open");
                Viewer::new("xdg-open")
            })
        }
    }

    /// The first of `eog`, `inkview` and `display` found in the directories of `search_path`.
    pub fn foreground_on(search_path: &OsStr) -> Option<Viewer> {
        let dirs: Vec<_> = env::split_paths(search_path).collect();
        FOREGROUND_VIEWERS
            .iter()
            .find(|(program, _)| dirs.iter().any(|dir| dir.join(program).is_file()))
            .map(|(program, args)| {
                args.iter()
                    .fold(Viewer::new(*program), |viewer, arg| viewer.arg(*arg))
            })
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    pub fn command_line(&self) -> String {
        let mut line = self.program.clone();
        for arg in &self.args {
            line.push(' ');
            line.push_str(arg);
        }
        line
    }

    /// Runs the viewer on `path` and blocks until it exits.
    pub fn show(&self, path: &Path) -> Result<()> {
        info!("Opening {:?} with `{}`", path, self.command_line());
        let status = Command::new(&self.program)
            .args(&self.args)
            .arg(path)
            .status()
            .map_err(|inner| Error::ViewerError {
                command: self.command_line(),
                inner,
            })?;
        if status.success() {
            Ok(())
        } else {
            Err(Error::ViewerExit {
                command: self.command_line(),
                status,
            })
        }
    }
}

impl Default for Viewer {
    fn default() -> Viewer {
        Viewer::from_env().unwrap_or_else(Viewer::platform_default)
    }
}
