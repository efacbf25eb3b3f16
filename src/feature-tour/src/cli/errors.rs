use crate::tour::TourError;
use std::error::Error;
use std::fmt;
use std::io;
use std::path::PathBuf;

#[derive(Debug)]
pub enum CliError {
    IoError(io::Error),
    ConfigError { path: PathBuf, message: String },
    TourError(TourError),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::IoError(e) => write!(f, "File I/O error: {}", e),
            CliError::ConfigError { path, message } => {
                write!(f, "Invalid configuration in {}: {}", path.display(), message.trim_end())
            }
            CliError::TourError(e) => write!(f, "{}", e),
        }
    }
}

impl Error for CliError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            CliError::IoError(e) => Some(e),
            CliError::TourError(e) => Some(e),
            CliError::ConfigError { .. } => None,
        }
    }
}

impl From<io::Error> for CliError {
    fn from(err: io::Error) -> Self {
        CliError::IoError(err)
    }
}

impl From<TourError> for CliError {
    fn from(err: TourError) -> Self {
        CliError::TourError(err)
    }
}
