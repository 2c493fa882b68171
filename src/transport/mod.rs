//! Byte transport abstraction for the serial link to the gateway
//!
//! The session layer talks to the gateway exclusively through the
//! [`ByteTransport`] trait, so the same protocol logic runs against
//! real hardware and against the scripted mock used in tests.

pub mod error;
pub mod mock;
pub mod serial;

pub use error::{TransportError, TransportResult};
pub use mock::MockTransport;
pub use serial::SerialTransport;

/// A duplex byte stream to the gateway with a bounded read timeout.
pub trait ByteTransport {
    /// Block for a single byte, up to the configured read timeout.
    /// Returns `TransportError::Timeout` if nothing arrives in time.
    fn read_byte(&mut self) -> TransportResult<u8>;

    /// Read until `buf` is full or the read timeout elapses; returns
    /// how many bytes actually arrived. A short count is not an error
    /// at this layer; the caller decides whether it is a framing
    /// failure.
    fn read_into(&mut self, buf: &mut [u8]) -> TransportResult<usize>;

    /// Write the full byte sequence to the gateway.
    fn write_all(&mut self, bytes: &[u8]) -> TransportResult<()>;

    /// Push any buffered output onto the wire.
    fn flush(&mut self) -> TransportResult<()>;
}
