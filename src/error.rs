use std::io;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum StreamError {
    /// A corpus line does not follow the column format.
    #[error("Invalid format: {0}")]
    Format(String),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The source cannot perform the requested operation (e.g. rewinding stdin).
    #[error("Unsupported operation: {0}")]
    Unsupported(String),

    #[error("Stream is closed")]
    Closed,

    #[error("Invalid sample: {0}")]
    InvalidSample(String),
}

pub type Result<T> = std::result::Result<T, StreamError>;
