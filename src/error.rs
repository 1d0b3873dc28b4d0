use std::error::Error as StdError;
use std::fmt;
use std::io;
use std::path::PathBuf;
use std::process::ExitStatus;

use serde_json::Error as SerdeError;

#[derive(Debug)]
pub enum Error {
    AccessError {
        path: PathBuf,
        inner: io::Error,
    },
    OutputError {
        inner: io::Error,
    },
    PlotError {
        backend: &'static str,
        inner: io::Error,
    },
    PlotFailed {
        backend: &'static str,
        message: String,
    },
    ViewerError {
        command: String,
        inner: io::Error,
    },
    ViewerExit {
        command: String,
        status: ExitStatus,
    },
    SerdeError {
        inner: SerdeError,
    },
    InvalidInputSizes {
        start: u64,
        end: u64,
        step: u64,
    },
}
impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::AccessError { path, inner } => {
                write!(f, "Failed to access file {:?}: {}", path, inner)
            }
            Error::OutputError { inner } => write!(f, "Failed to write report output: {}", inner),
            Error::PlotError { backend, inner } => {
                write!(f, "Failed to run the {} plotting backend: {}", backend, inner)
            }
            Error::PlotFailed { backend, message } => {
                write!(f, "The {} plotting backend failed: {}", backend, message)
            }
            Error::ViewerError { command, inner } => {
                write!(f, "Failed to launch chart viewer `{}`: {}", command, inner)
            }
            Error::ViewerExit { command, status } => {
                write!(f, "Chart viewer `{}` exited with {}", command, status)
            }
            Error::SerdeError { inner } => write!(f, "Failed to serialize a report: {}", inner),
            Error::InvalidInputSizes { start, end, step } => write!(
                f,
                "Invalid input sizes {}..={} step {}: the step must be positive and start must not exceed end",
                start, end, step
            ),
        }
    }
}
impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match self {
            Error::AccessError { inner, .. } => Some(inner),
            Error::OutputError { inner } => Some(inner),
            Error::PlotError { inner, .. } => Some(inner),
            Error::ViewerError { inner, .. } => Some(inner),
            Error::SerdeError { inner } => Some(inner),
            Error::PlotFailed { .. } | Error::ViewerExit { .. } | Error::InvalidInputSizes { .. } => {
                None
            }
        }
    }
}

impl From<io::Error> for Error {
    fn from(inner: io::Error) -> Error {
        Error::OutputError { inner }
    }
}

impl From<SerdeError> for Error {
    fn from(inner: SerdeError) -> Error {
        Error::SerdeError { inner }
    }
}

pub type Result<T> = ::std::result::Result<T, Error>;

pub(crate) fn log_error(e: &Error) {
    error!("error: {}", e);
}
