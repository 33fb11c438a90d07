use thiserror::Error;

/// Application-specific errors for the CLI
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Invalid group size: {value}. Must be a positive base-10 integer")]
    InvalidGroupSize { value: String },

    #[error("Group size must be at least 1, got: {value}")]
    ZeroGroupSize { value: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Library(linegroup::Error),
}

impl From<linegroup::Error> for AppError {
    fn from(err: linegroup::Error) -> Self {
        match err {
            linegroup::Error::InvalidGroupSize { value } => AppError::InvalidGroupSize { value },
            linegroup::Error::ZeroGroupSize { value } => AppError::ZeroGroupSize { value },
            other => AppError::Library(other),
        }
    }
}
