use std::fmt;

/// Result type for zakboek-chr operations
pub type Result<T> = std::result::Result<T, Error>;

/// Batch-fatal parse failures.
///
/// Anything that only affects a single detail line is reported as a
/// [`crate::LineIssue`] instead and never surfaces here.
#[derive(Debug)]
pub enum Error {
    /// IO operation failed
    Io(std::io::Error),

    /// Statement has no content at all
    Empty,

    /// Header line is missing or its processing date is unusable
    Header(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(err) => write!(f, "IO error: {}", err),
            Error::Empty => write!(f, "statement is empty"),
            Error::Header(msg) => write!(f, "statement header error: {}", msg),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(err) => Some(err),
            Error::Empty | Error::Header(_) => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err)
    }
}
