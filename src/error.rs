//! Error types for deferred-removal containers.

use thiserror::Error;

/// Error variants for container operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    /// A logical index was provided that is at or past the container's length.
    #[error("index out of bounds: {0}")]
    IndexOutOfBounds(usize),
}

/// A specialized Result type for container operations.
pub type Result<T> = std::result::Result<T, Error>;
