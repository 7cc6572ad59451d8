//! Error types for level file reading and writing

use thiserror::Error;

/// Result type for level file operations
pub type Result<T> = std::result::Result<T, Error>;

/// Level file error types
#[derive(Error, Debug)]
pub enum Error {
    /// IO error at the storage boundary
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The file's first line could not be read
    #[error("missing begin marker")]
    MissingBeginMarker,

    /// Variable header line with the wrong delimiter structure
    #[error("malformed variable header: {line:?}")]
    MalformedHeader { line: String },

    /// Length field of a variable header failed integer parsing
    #[error("invalid length field: {value:?}")]
    InvalidLength { value: String },

    /// Stream ended inside a variable's declared payload
    #[error("truncated payload for variable '{name}': expected {expected} bytes, got {actual}")]
    TruncatedPayload {
        name: String,
        expected: usize,
        actual: usize,
    },

    /// Payload not followed by its newline terminator
    #[error("variable '{name}': payload is not terminated by a newline")]
    MissingTerminator { name: String },

    /// A variable name was inserted twice
    #[error("duplicate variable name: {name}")]
    DuplicateVariable { name: String },
}
