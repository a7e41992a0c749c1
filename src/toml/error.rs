//! Error types for TOML operations.

use std::io;
use toml_edit::TomlError;

/// Error type for TOML operations.
#[derive(Debug)]
pub enum Error {
    /// Malformed input document (from toml_edit)
    Parse(TomlError),
    /// Empty or malformed path
    InvalidPath(String),
    /// Segment applied to a node of the wrong kind
    TypeMismatch(String),
    /// Key absent or index out of bounds
    PathNotFound(String),
    /// Create target already resolves to an existing node
    AlreadyExists(String),
    /// Value literal rejected by the TOML grammar
    InvalidValueSyntax(String),
    /// I/O error
    Io(String),
    /// Command-line usage error
    Usage(String),
}

impl Error {
    /// Process exit code for this error kind, for scripting consumption.
    pub fn exit_code(&self) -> i32 {
        match self {
            Error::Parse(_) => 1,
            Error::Usage(_) => 2,
            Error::InvalidPath(_) => 3,
            Error::TypeMismatch(_) => 4,
            Error::PathNotFound(_) => 5,
            Error::AlreadyExists(_) => 6,
            Error::InvalidValueSyntax(_) => 7,
            Error::Io(_) => 8,
        }
    }
}

impl std::error::Error for Error {}

impl From<TomlError> for Error {
    fn from(e: TomlError) -> Self {
        Error::Parse(e)
    }
}

impl From<io::Error> for Error {
    fn from(e: io::Error) -> Self {
        Error::Io(e.to_string())
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Error::Parse(e) => write!(f, "TOML file invalid: {}", e.message()),
            Error::InvalidPath(e) => write!(f, "{}", e),
            Error::TypeMismatch(e) => write!(f, "{}", e),
            Error::PathNotFound(e) => write!(f, "{}", e),
            Error::AlreadyExists(e) => write!(f, "{}", e),
            Error::InvalidValueSyntax(e) => write!(f, "invalid TOML value: {}", e),
            Error::Io(e) => write!(f, "{}", e),
            Error::Usage(e) => write!(f, "{}", e),
        }
    }
}
