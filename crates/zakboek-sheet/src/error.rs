use std::fmt;

/// Result type for zakboek-sheet operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur in the gateway layer
#[derive(Debug)]
pub enum Error {
    /// Workbook cannot be reached at all (missing file, bad path)
    Unavailable(String),

    /// Workbook content does not match the expected layout
    SchemaMismatch(String),

    /// IO operation failed
    Io(std::io::Error),

    /// CSV encoding or decoding failed
    Csv(csv::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Unavailable(msg) => write!(f, "workbook unavailable: {}", msg),
            Error::SchemaMismatch(msg) => write!(f, "workbook schema mismatch: {}", msg),
            Error::Io(err) => write!(f, "IO error: {}", err),
            Error::Csv(err) => write!(f, "CSV error: {}", err),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(err) => Some(err),
            Error::Csv(err) => Some(err),
            Error::Unavailable(_) | Error::SchemaMismatch(_) => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err)
    }
}

impl From<csv::Error> for Error {
    fn from(err: csv::Error) -> Self {
        Error::Csv(err)
    }
}
