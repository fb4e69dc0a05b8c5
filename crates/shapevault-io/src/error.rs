//! Error types for the io crate.

use std::path::PathBuf;

use shapevault_types::TypeError;

/// Errors that can occur while reading or validating shape input.
#[derive(Debug, thiserror::Error)]
pub enum IoError {
    /// The input file could not be read.
    #[error("cannot read file {}: {source}", path.display())]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A rectangle line or value list is malformed.
    #[error("invalid rectangle: {0}")]
    Rectangle(String),

    /// A cone line or value list is malformed.
    #[error("invalid cone: {0}")]
    Cone(String),

    /// The values were well-formed but do not describe a valid shape.
    #[error(transparent)]
    Shape(#[from] TypeError),
}

/// Convenience alias for io results.
pub type IoResult<T> = Result<T, IoError>;
