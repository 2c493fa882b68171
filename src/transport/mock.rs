//! Mock byte transport for testing and development

use crate::transport::{ByteTransport, TransportError, TransportResult};
use std::collections::VecDeque;

const MOCK_TIMEOUT_MS: u64 = 100;

/// Scriptable in-memory transport standing in for the gateway.
///
/// Bytes queued with [`queue_bytes`](Self::queue_bytes) are served to
/// reads in order; everything the session writes is recorded for
/// assertions. With echo mode enabled the last written command frame
/// is placed back on the read queue at flush time, which makes the
/// mock behave like a conformant gateway that acknowledges every
/// command by echoing it.
pub struct MockTransport {
    rx_queue: VecDeque<u8>,
    written: Vec<u8>,
    echo_on_flush: bool,
    fail_when_empty: bool,
    connected: bool,
}

impl MockTransport {
    pub fn new() -> Self {
        Self {
            rx_queue: VecDeque::new(),
            written: Vec::new(),
            echo_on_flush: false,
            fail_when_empty: false,
            connected: true,
        }
    }

    /// Echo the last written 4-byte frame back on every flush.
    pub fn with_echo(mut self) -> Self {
        self.echo_on_flush = true;
        self
    }

    /// Report a fatal I/O error once the read queue runs dry, instead
    /// of the usual timeout. Lets loop-driving tests terminate.
    pub fn with_failure_when_drained(mut self) -> Self {
        self.fail_when_empty = true;
        self
    }

    /// Script gateway bytes to be served to subsequent reads.
    pub fn queue_bytes(&mut self, bytes: &[u8]) {
        self.rx_queue.extend(bytes.iter().copied());
    }

    /// Everything written to the transport so far, in order.
    pub fn written(&self) -> &[u8] {
        &self.written
    }

    /// Simulate losing the device.
    pub fn disconnect(&mut self) {
        self.connected = false;
    }

    fn check_connected(&self) -> TransportResult<()> {
        if self.connected {
            Ok(())
        } else {
            Err(TransportError::Io {
                message: "device disconnected".to_string(),
            })
        }
    }
}

impl Default for MockTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl ByteTransport for MockTransport {
    fn read_byte(&mut self) -> TransportResult<u8> {
        self.check_connected()?;
        match self.rx_queue.pop_front() {
            Some(byte) => Ok(byte),
            None if self.fail_when_empty => Err(TransportError::Io {
                message: "stream closed".to_string(),
            }),
            None => Err(TransportError::Timeout {
                timeout_ms: MOCK_TIMEOUT_MS,
            }),
        }
    }

    fn read_into(&mut self, buf: &mut [u8]) -> TransportResult<usize> {
        self.check_connected()?;
        if self.rx_queue.is_empty() && self.fail_when_empty {
            return Err(TransportError::Io {
                message: "stream closed".to_string(),
            });
        }
        let mut filled = 0;
        while filled < buf.len() {
            match self.rx_queue.pop_front() {
                Some(byte) => {
                    buf[filled] = byte;
                    filled += 1;
                }
                None => break,
            }
        }
        Ok(filled)
    }

    fn write_all(&mut self, bytes: &[u8]) -> TransportResult<()> {
        self.check_connected()?;
        self.written.extend_from_slice(bytes);
        Ok(())
    }

    fn flush(&mut self) -> TransportResult<()> {
        self.check_connected()?;
        if self.echo_on_flush && self.written.len() >= 4 {
            let tail = self.written.len() - 4;
            let frame: Vec<u8> = self.written[tail..].to_vec();
            self.queue_bytes(&frame);
        }
        Ok(())
    }
}
