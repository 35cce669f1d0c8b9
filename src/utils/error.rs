//! Error handling for ulatex transcoding
//!
//! Two error kinds cover the whole crate: configuration errors raised while
//! building the static symbol table, and data-integrity errors raised when
//! decode input violates its preconditions. Everything else is handled by
//! permissive pass-through.

use std::fmt;

/// Transcoding error type
#[derive(Debug, Clone)]
pub enum TranscodeError {
    /// The shipped symbol table references data that does not resolve.
    /// Fatal: indicates a bug in the static tables, not a runtime condition.
    Configuration { message: String },
    /// Decode input already contains standalone combining marks.
    /// Recoverable: callers should log the offending record and continue.
    DataIntegrity { message: String, input: String },
}

impl fmt::Display for TranscodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TranscodeError::Configuration { message } => {
                write!(f, "Configuration error: {}", message)
            }
            TranscodeError::DataIntegrity { message, input } => {
                write!(f, "Data integrity error: {} (input: {:?})", message, input)
            }
        }
    }
}

impl std::error::Error for TranscodeError {}

/// Result type for transcoding operations
pub type TranscodeResult<T> = Result<T, TranscodeError>;

// Convenience constructors
impl TranscodeError {
    pub fn configuration(message: impl Into<String>) -> Self {
        TranscodeError::Configuration {
            message: message.into(),
        }
    }

    pub fn data_integrity(message: impl Into<String>, input: impl Into<String>) -> Self {
        TranscodeError::DataIntegrity {
            message: message.into(),
            input: input.into(),
        }
    }

    /// True for errors the caller can recover from by skipping the record.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, TranscodeError::DataIntegrity { .. })
    }
}
