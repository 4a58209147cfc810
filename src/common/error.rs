use std::fmt::{Display, Error, Formatter};

// Error
//------------------------------------------------------------------------------

#[derive(Debug, PartialEq, Eq, Clone)]
pub enum PayloadError {
    // Persisted records
    UnknownPayloadType(String),
    UnknownSecurity(String),

    // Style
    InvalidColor(String),

    // Codec
    Serialization(String),
}

impl Display for PayloadError {
    fn fmt(&self, f: &mut Formatter) -> Result<(), Error> {
        match self {
            // Persisted records
            Self::UnknownPayloadType(tag) => write!(f, "Unknown payload type: {tag:?}"),
            Self::UnknownSecurity(token) => write!(f, "Unknown wifi security: {token:?}"),

            // Style
            Self::InvalidColor(hex) => write!(f, "Invalid color: {hex:?}"),

            // Codec
            Self::Serialization(msg) => write!(f, "Serialization failed: {msg}"),
        }
    }
}

impl std::error::Error for PayloadError {}

impl From<serde_json::Error> for PayloadError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}

pub type PayloadResult<T> = Result<T, PayloadError>;
