use crate::query::QueryError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the database extensions
#[derive(Error, Debug)]
pub enum Error {
    /// No resolver was registered and the driver is not a built-in one
    #[error("Unsupported driver [{0}]")]
    UnsupportedDriver(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Query error: {0}")]
    Query(#[from] QueryError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    pub fn unsupported_driver(driver: impl Into<String>) -> Self {
        Self::UnsupportedDriver(driver.into())
    }

    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// The offending driver name, if this is a dispatch failure
    pub fn driver(&self) -> Option<&str> {
        match self {
            Error::UnsupportedDriver(driver) => Some(driver),
            _ => None,
        }
    }

    /// Get error code for API responses
    pub fn error_code(&self) -> &'static str {
        match self {
            Error::UnsupportedDriver(_) => "E_DB_UNSUPPORTED_DRIVER",
            Error::Config(_) => "E_DB_CONFIG",
            Error::Query(_) => "E_DB_QUERY",
            Error::Io(_) => "E_IO",
        }
    }
}
