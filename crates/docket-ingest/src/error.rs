use std::fmt;

/// Result type for docket-ingest operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while normalizing a notification
#[derive(Debug)]
pub enum Error {
    /// Notification or payload could not be encoded/decoded
    Serialization(serde_json::Error),

    /// Required field absent from a known variant's detail payload
    MissingField { field: String },

    /// Field present but of the wrong shape
    TypeMismatch {
        field: String,
        expected: &'static str,
    },
}

impl Error {
    pub(crate) fn missing(field: impl Into<String>) -> Self {
        Error::MissingField {
            field: field.into(),
        }
    }

    pub(crate) fn mismatch(field: impl Into<String>, expected: &'static str) -> Self {
        Error::TypeMismatch {
            field: field.into(),
            expected,
        }
    }

    /// Offending field for decode errors
    pub fn field(&self) -> Option<&str> {
        match self {
            Error::MissingField { field } | Error::TypeMismatch { field, .. } => Some(field),
            Error::Serialization(_) => None,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Serialization(err) => write!(f, "Serialization error: {}", err),
            Error::MissingField { field } => write!(f, "Missing required field: {}", field),
            Error::TypeMismatch { field, expected } => {
                write!(f, "Type mismatch for field {}: expected {}", field, expected)
            }
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Serialization(err) => Some(err),
            Error::MissingField { .. } | Error::TypeMismatch { .. } => None,
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Serialization(err)
    }
}

impl From<docket_types::Error> for Error {
    fn from(err: docket_types::Error) -> Self {
        match err {
            docket_types::Error::Serialization(err) => Error::Serialization(err),
        }
    }
}
