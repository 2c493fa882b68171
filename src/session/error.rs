//! Session error types

use crate::transport::TransportError;
use std::fmt;

/// Failures of the command/response and frame-read exchanges.
///
/// `InsufficientBytes` is the expected occasional starvation case and
/// is recoverable where the caller chooses to continue; `Transport`
/// wraps a fatal byte-stream fault.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    /// Underlying byte stream failed.
    Transport(TransportError),
    /// Fewer bytes than a complete frame arrived before the timeout.
    InsufficientBytes { expected: usize, received: usize },
    /// A command was issued outside the Established state.
    NotEstablished { operation: &'static str },
}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SessionError::Transport(e) => write!(f, "{}", e),
            SessionError::InsufficientBytes { expected, received } => {
                write!(
                    f,
                    "Insufficient number of bytes read: expected {}, got {}",
                    expected, received
                )
            }
            SessionError::NotEstablished { operation } => {
                write!(f, "Session not established: cannot {}", operation)
            }
        }
    }
}

impl std::error::Error for SessionError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SessionError::Transport(e) => Some(e),
            _ => None,
        }
    }
}

impl From<TransportError> for SessionError {
    fn from(e: TransportError) -> Self {
        SessionError::Transport(e)
    }
}

/// Result type for session operations.
pub type SessionResult<T> = Result<T, SessionError>;
