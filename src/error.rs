//! Single error type shared by the transforms and the command line driver.
use thiserror::Error;

#[derive(Error, Debug)]
pub enum TransformError {
    /// Bad argument handed to an encode path or accessor (empty text, index out of range).
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Decode side found data that could not have come from the matching encoder.
    #[error("Corrupt encoding: {0}")]
    CorruptEncoding(String),

    /// Reading or writing the driver's input/output failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, TransformError>;
