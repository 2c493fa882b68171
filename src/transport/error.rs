//! Transport error types

use std::fmt;

/// Failures of the underlying byte stream to the gateway.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransportError {
    /// Device-level failure (open error, unexpected disconnect).
    Io { message: String },
    /// The read timeout elapsed before any byte arrived.
    Timeout { timeout_ms: u64 },
}

impl fmt::Display for TransportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransportError::Io { message } => {
                write!(f, "Transport I/O error: {}", message)
            }
            TransportError::Timeout { timeout_ms } => {
                write!(f, "Read timed out after {}ms", timeout_ms)
            }
        }
    }
}

impl std::error::Error for TransportError {}

/// Result type for transport operations.
pub type TransportResult<T> = Result<T, TransportError>;
