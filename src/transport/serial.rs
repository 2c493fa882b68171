//! Serial-port transport backed by the `serialport` crate

use crate::transport::{ByteTransport, TransportError, TransportResult};
use std::io::{Read, Write};
use std::time::Duration;

/// Byte transport over a physical serial port.
pub struct SerialTransport {
    port: Box<dyn serialport::SerialPort>,
    timeout: Duration,
}

impl SerialTransport {
    /// Open the serial device at the given baud rate with a fixed
    /// read timeout. 8N1 framing, the gateway's only supported mode.
    pub fn open(path: &str, baud_rate: u32, timeout: Duration) -> TransportResult<Self> {
        let port = serialport::new(path, baud_rate)
            .data_bits(serialport::DataBits::Eight)
            .parity(serialport::Parity::None)
            .stop_bits(serialport::StopBits::One)
            .timeout(timeout)
            .open()
            .map_err(|e| TransportError::Io {
                message: format!("failed to open '{}': {}", path, e),
            })?;

        Ok(Self { port, timeout })
    }

    fn timeout_ms(&self) -> u64 {
        self.timeout.as_millis() as u64
    }
}

impl ByteTransport for SerialTransport {
    fn read_byte(&mut self) -> TransportResult<u8> {
        let mut buf = [0u8; 1];
        match self.read_into(&mut buf)? {
            1 => Ok(buf[0]),
            _ => Err(TransportError::Timeout {
                timeout_ms: self.timeout_ms(),
            }),
        }
    }

    fn read_into(&mut self, buf: &mut [u8]) -> TransportResult<usize> {
        let mut filled = 0;
        while filled < buf.len() {
            match self.port.read(&mut buf[filled..]) {
                Ok(0) => break,
                Ok(n) => filled += n,
                Err(e) if e.kind() == std::io::ErrorKind::TimedOut => break,
                Err(e) => {
                    return Err(TransportError::Io {
                        message: e.to_string(),
                    })
                }
            }
        }
        Ok(filled)
    }

    fn write_all(&mut self, bytes: &[u8]) -> TransportResult<()> {
        self.port.write_all(bytes).map_err(|e| TransportError::Io {
            message: e.to_string(),
        })
    }

    fn flush(&mut self) -> TransportResult<()> {
        self.port.flush().map_err(|e| TransportError::Io {
            message: e.to_string(),
        })
    }
}
