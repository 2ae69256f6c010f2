//! Error types for reading-context derivation. Every variant describes bad
//! caller input.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Missing required fields: {}", .missing.join(", "))]
    Validation { missing: Vec<&'static str> },

    #[error("Invalid date format: {0}")]
    DateFormat(String),
}

pub type Result<T> = std::result::Result<T, Error>;

impl From<chrono::ParseError> for Error {
    fn from(e: chrono::ParseError) -> Self {
        Error::DateFormat(e.to_string())
    }
}
