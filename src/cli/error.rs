use std::fmt;

#[derive(Debug)]
pub enum Error {
    Clap(clap::Error),
    InvalidValue { flag: &'static str, message: String },
}

impl From<clap::Error> for Error {
    fn from(e: clap::Error) -> Self {
        Self::Clap(e)
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Clap(err) => write!(f, "{}", err.message),
            Self::InvalidValue { flag, message } => {
                write!(f, "Invalid value for '--{}': {}", flag, message)
            }
        }
    }
}

impl std::error::Error for Error {}
