//! Crate-level error type and `Result` alias for structured error handling.
//! Converts underlying I/O and serialization errors, and provides semantic
//! variants for group-size validation and input opening failures.
use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Cannot open input {path:?}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid group size: {value}. Must be a base-10 integer")]
    InvalidGroupSize { value: String },

    #[error("Group size must be at least 1, got: {value}")]
    ZeroGroupSize { value: String },

    #[error("Report serialization error: {0}")]
    Report(#[from] serde_json::Error),
}

impl Error {
    /// True for the argument-validation variants, false for I/O failures.
    pub fn is_argument_error(&self) -> bool {
        matches!(
            self,
            Error::InvalidGroupSize { .. } | Error::ZeroGroupSize { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_argument_error_classification() {
        assert!(Error::InvalidGroupSize { value: "x".into() }.is_argument_error());
        assert!(Error::ZeroGroupSize { value: "0".into() }.is_argument_error());
        let io = Error::from(std::io::Error::other("boom"));
        assert!(!io.is_argument_error());
    }

    #[test]
    fn test_open_error_mentions_path() {
        let err = Error::Open {
            path: PathBuf::from("/missing/ids.csv"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
        };
        assert!(err.to_string().contains("/missing/ids.csv"));
    }
}
