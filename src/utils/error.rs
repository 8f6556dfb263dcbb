//! Configuration errors.

use std::fmt;

#[derive(Debug)]
pub enum Error {
    /// The config file exists but could not be read.
    Io(std::io::Error),
    /// The config file is not valid JSON for `AppConfig`.
    Json(serde_json::Error),
    /// The document parsed but a value is out of range.
    InvalidConfig(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(err) => write!(f, "IO error: {err}"),
            Self::Json(err) => write!(f, "JSON error: {err}"),
            Self::InvalidConfig(reason) => write!(f, "Invalid config: {reason}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Json(err) => Some(err),
            Self::InvalidConfig(_) => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err)
    }
}

pub type Result<T> = std::result::Result<T, Error>;

/// Builds an [`Error::InvalidConfig`] from a format string.
#[macro_export]
macro_rules! invalid_config {
    ($($arg:tt)*) => {
        $crate::utils::error::Error::InvalidConfig(format!($($arg)*))
    };
}
