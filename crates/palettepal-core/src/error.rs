use thiserror::Error;

pub type Result<T> = std::result::Result<T, PalError>;

#[derive(Debug, Error)]
pub enum PalError {
    #[error("validation error: {0}")]
    Validation(String),

    #[error("sink error: {0}")]
    Sink(String),

    #[error("search state error: {0}")]
    State(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
