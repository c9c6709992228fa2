use thiserror::Error;
use std::io;

/// Custom error types for the linefuzz library
#[derive(Error, Debug)]
pub enum LineFuzzError {
    /// I/O error while opening or reading the corpus file
    #[error("I/O error: {0}")]
    IoError(#[from] io::Error),

    /// A key or pattern is longer than the engine supports
    #[error("sequence length {length} exceeds the supported maximum of {max}")]
    CapacityError { length: usize, max: usize },

    /// Search distance outside the supported range
    #[error("invalid max distance: {0}")]
    InvalidDistance(usize),
}

/// Result type alias for linefuzz operations
pub type Result<T> = std::result::Result<T, LineFuzzError>;
