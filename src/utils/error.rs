use thiserror::Error;

#[derive(Error, Debug)]
pub enum CheckError {
    #[error("Invalid input")]
    InvalidInput { token: Option<String> },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

impl CheckError {
    /// Process exit status for this error. Every failure is terminal.
    pub fn exit_code(&self) -> i32 {
        match self {
            CheckError::InvalidInput { .. } => 1,
            CheckError::IoError(_) => 1,
            CheckError::SerializationError(_) => 1,
        }
    }
}

pub type Result<T> = std::result::Result<T, CheckError>;
