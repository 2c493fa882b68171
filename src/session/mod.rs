//! Gateway session state machine
//!
//! A session is established with the SYN/ACK handshake, drives the
//! strictly request-then-response command channel, and is closed with
//! an end-of-session command. Exactly one session is live at a time;
//! it holds the byte transport exclusively for its whole lifetime.

pub mod error;
pub mod handler;

pub use error::{SessionError, SessionResult};
pub use handler::SessionHandler;

use crate::config::GatewayMode;
use crate::protocol::constants::{ACK, FRAME_LEN, SYN};
use crate::protocol::{encode_command, Command, Frame};
use crate::transport::ByteTransport;

/// Lifecycle state of a gateway session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// Created, handshake not yet accepted.
    Unestablished,
    /// Handshake accepted; command exchanges are valid.
    Established,
    /// End-of-session issued; terminal.
    Terminated,
}

/// One host session with the gateway, exclusively holding the
/// transport for its lifetime.
///
/// Commands are valid only in the Established state. The command
/// channel and the monitoring frame reads share the one transport and
/// are never interleaved: each command is a complete write-then-read
/// round trip before the next read is issued.
pub struct Session<'a, T: ByteTransport> {
    transport: &'a mut T,
    state: SessionState,
    mode: Option<GatewayMode>,
}

impl<'a, T: ByteTransport> Session<'a, T> {
    pub fn new(transport: &'a mut T) -> Self {
        Self {
            transport,
            state: SessionState::Unestablished,
            mode: None,
        }
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn is_established(&self) -> bool {
        self.state == SessionState::Established
    }

    /// Gateway mode selected for this session, once set.
    pub fn mode(&self) -> Option<GatewayMode> {
        self.mode
    }

    /// Perform the SYN/ACK handshake. Returns `true` and enters the
    /// Established state iff the gateway answers with ACK; any other
    /// byte leaves the session Unestablished. A read that yields no
    /// byte at all within the timeout is a transport error.
    pub fn init(&mut self) -> SessionResult<bool> {
        self.transport.write_all(&[SYN])?;
        let response = self.transport.read_byte()?;
        if response == ACK {
            self.state = SessionState::Established;
        }
        Ok(self.is_established())
    }

    /// One command round trip: write the 4-byte frame, flush, read
    /// exactly 4 response bytes. Returns the result payload (the last
    /// two response bytes).
    pub fn command(&mut self, cmd: Command, msb: u8, lsb: u8) -> SessionResult<(u8, u8)> {
        self.exchange(cmd.code(), msb, lsb)
    }

    fn exchange(&mut self, code: u8, msb: u8, lsb: u8) -> SessionResult<(u8, u8)> {
        if self.state != SessionState::Established {
            return Err(SessionError::NotEstablished {
                operation: "exchange command",
            });
        }
        self.transport.write_all(&encode_command(code, msb, lsb))?;
        self.transport.flush()?;

        let mut response = [0u8; FRAME_LEN];
        let received = self.transport.read_into(&mut response)?;
        if received != FRAME_LEN {
            return Err(SessionError::InsufficientBytes {
                expected: FRAME_LEN,
                received,
            });
        }
        Ok((response[2], response[3]))
    }

    /// Read one 16-bit parameter via its "get" command.
    pub fn get_value(&mut self, cmd: Command) -> SessionResult<u16> {
        let (msb, lsb) = self.exchange(cmd.code(), 0, 0)?;
        Ok(u16::from_be_bytes([msb, lsb]))
    }

    /// Write one 16-bit parameter via the command's "set" variant.
    ///
    /// Returns the value the gateway echoed back; callers that need
    /// the write confirmed should compare it against the requested
    /// value themselves.
    pub fn set_value(&mut self, cmd: Command, value: u16) -> SessionResult<u16> {
        let [msb, lsb] = value.to_be_bytes();
        let (echo_msb, echo_lsb) = self.exchange(cmd.write_code(), msb, lsb)?;
        Ok(u16::from_be_bytes([echo_msb, echo_lsb]))
    }

    /// Block for one 4-byte OpenTherm monitoring frame. The hot path
    /// of the monitoring loop; a short read is an `InsufficientBytes`
    /// failure of this read attempt, not of the session.
    pub fn read_frame(&mut self) -> SessionResult<Frame> {
        let mut bytes = [0u8; FRAME_LEN];
        let received = self.transport.read_into(&mut bytes)?;
        if received != FRAME_LEN {
            return Err(SessionError::InsufficientBytes {
                expected: FRAME_LEN,
                received,
            });
        }
        Ok(Frame::from_bytes(bytes))
    }

    /// Keep-alive ping; returns the liveness value in the response low
    /// byte.
    pub fn ping(&mut self) -> SessionResult<u8> {
        let (_, lsb) = self.exchange(Command::Ping.code(), 0, 0)?;
        Ok(lsb)
    }

    /// Put the gateway in passive monitor or active intercept mode.
    pub fn set_mode(&mut self, mode: GatewayMode) -> SessionResult<()> {
        let cmd = match mode {
            GatewayMode::Monitor => Command::DoMonitor,
            GatewayMode::Intercept => Command::DoIntercept,
        };
        self.exchange(cmd.code(), 0, 0)?;
        self.mode = Some(mode);
        Ok(())
    }

    /// Close the session with the end-of-session command. Returns
    /// `true` when the command was issued; repeated calls are no-ops
    /// returning `false`.
    pub fn terminate(&mut self) -> SessionResult<bool> {
        if self.state != SessionState::Established {
            return Ok(false);
        }
        self.exchange(Command::EndSession.code(), 0, 0)?;
        self.state = SessionState::Terminated;
        println!("Clean termination.");
        Ok(true)
    }

    pub fn get_t_min(&mut self) -> SessionResult<u16> {
        self.get_value(Command::GetTMin)
    }

    pub fn set_t_min(&mut self, value: u16) -> SessionResult<u16> {
        self.set_value(Command::GetTMin, value)
    }

    pub fn get_t_max(&mut self) -> SessionResult<u16> {
        self.get_value(Command::GetTMax)
    }

    pub fn set_t_max(&mut self, value: u16) -> SessionResult<u16> {
        self.set_value(Command::GetTMax, value)
    }

    pub fn get_t2_min(&mut self) -> SessionResult<u16> {
        self.get_value(Command::GetT2Min)
    }

    pub fn set_t2_min(&mut self, value: u16) -> SessionResult<u16> {
        self.set_value(Command::GetT2Min, value)
    }

    pub fn get_t2_max(&mut self) -> SessionResult<u16> {
        self.get_value(Command::GetT2Max)
    }

    pub fn set_t2_max(&mut self, value: u16) -> SessionResult<u16> {
        self.set_value(Command::GetT2Max, value)
    }
}

impl<T: ByteTransport> Drop for Session<'_, T> {
    /// Best-effort end-of-session on every exit path, so the gateway
    /// side is not left with a dangling session when the host unwinds.
    fn drop(&mut self) {
        if self.state == SessionState::Established {
            let _ = self.terminate();
        }
    }
}
