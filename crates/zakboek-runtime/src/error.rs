use std::fmt;

/// Result type for zakboek-runtime operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur in the runtime layer
#[derive(Debug)]
pub enum Error {
    /// Statement parsing failed batch-fatally
    Chr(zakboek_chr::Error),

    /// Gateway layer error
    Sheet(zakboek_sheet::Error),

    /// Ledger snapshot or record inconsistency
    Ledger(zakboek_types::Error),

    /// IO operation failed
    Io(std::io::Error),

    /// Configuration error
    Config(String),

    /// Invalid operation or state
    InvalidOperation(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Chr(err) => write!(f, "Statement error: {}", err),
            Error::Sheet(err) => write!(f, "Gateway error: {}", err),
            Error::Ledger(err) => write!(f, "Ledger error: {}", err),
            Error::Io(err) => write!(f, "IO error: {}", err),
            Error::Config(msg) => write!(f, "Configuration error: {}", msg),
            Error::InvalidOperation(msg) => write!(f, "Invalid operation: {}", msg),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Chr(err) => Some(err),
            Error::Sheet(err) => Some(err),
            Error::Ledger(err) => Some(err),
            Error::Io(err) => Some(err),
            Error::Config(_) | Error::InvalidOperation(_) => None,
        }
    }
}

impl From<zakboek_chr::Error> for Error {
    fn from(err: zakboek_chr::Error) -> Self {
        Error::Chr(err)
    }
}

impl From<zakboek_sheet::Error> for Error {
    fn from(err: zakboek_sheet::Error) -> Self {
        Error::Sheet(err)
    }
}

impl From<zakboek_types::Error> for Error {
    fn from(err: zakboek_types::Error) -> Self {
        Error::Ledger(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err)
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}
