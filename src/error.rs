use thiserror::Error;

#[derive(Error, Debug)]
pub enum GuardError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type GuardResult<T> = Result<T, GuardError>;
