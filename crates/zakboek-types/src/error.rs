use std::fmt;

/// Result type for zakboek-types operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur in the types layer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Bag identifier was not a positive integer
    InvalidId(String),

    /// Amount text did not follow the expected decimal convention
    InvalidAmount(String),

    /// Bag type label outside the fixed set
    InvalidType(String),

    /// Source label was empty after trimming
    EmptySource,

    /// Record fields disagree with the processed flag
    Inconsistent(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidId(raw) => write!(f, "invalid bag number: {:?}", raw),
            Error::InvalidAmount(raw) => write!(f, "invalid amount: {:?}", raw),
            Error::InvalidType(raw) => write!(f, "invalid bag type: {:?}", raw),
            Error::EmptySource => write!(f, "source label is empty"),
            Error::Inconsistent(msg) => write!(f, "inconsistent record: {}", msg),
        }
    }
}

impl std::error::Error for Error {}
