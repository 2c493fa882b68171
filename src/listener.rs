//! Gateway connection listener
//!
//! Owns the byte transport and waits for the gateway to request a
//! session by sending ENQ. Each accepted request runs one full
//! session; when the session ends, listening resumes.

use crate::config::MonitorConfig;
use crate::protocol::constants::ENQ;
use crate::session::{Session, SessionHandler};
use crate::transport::{ByteTransport, TransportError, TransportResult};

/// Accepts session requests from the gateway, one at a time.
pub struct Listener<T: ByteTransport> {
    transport: T,
    handler: SessionHandler,
}

impl<T: ByteTransport> Listener<T> {
    pub fn new(transport: T, config: MonitorConfig) -> Self {
        Self {
            transport,
            handler: SessionHandler::new(config),
        }
    }

    /// Listen for ENQ and serve sessions until the transport fails.
    ///
    /// Bytes other than ENQ between sessions are reported and
    /// discarded; read timeouts keep the wait going.
    pub fn run(&mut self) -> TransportResult<()> {
        println!("Listening for session requests...");
        loop {
            match self.transport.read_byte() {
                Ok(ENQ) => self.serve_session(),
                Ok(byte) => println!("Ignoring unexpected byte: 0x{:02X}", byte),
                Err(TransportError::Timeout { .. }) => continue,
                Err(e) => return Err(e),
            }
        }
    }

    fn serve_session(&mut self) {
        println!("Session requested.");
        let mut session = Session::new(&mut self.transport);
        match session.init() {
            Ok(true) => {
                println!("Session established.");
                if let Err(e) = self.handler.run(&mut session) {
                    eprintln!("Session ended: {}", e);
                }
            }
            Ok(false) => println!("Handshake rejected by gateway."),
            Err(e) => eprintln!("Handshake failed: {}", e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::protocol::constants::{ACK, HOST_TO_GW, SYN};
    use crate::transport::MockTransport;

    #[test]
    fn test_ignores_noise_until_enq() {
        let mut transport = MockTransport::new().with_failure_when_drained();
        transport.queue_bytes(&[0x00, 0xFF]); // line noise, no ENQ

        let mut listener = Listener::new(transport, MonitorConfig::default());
        assert!(listener.run().is_err()); // exits only when the stream dies
        assert!(listener.transport.written().is_empty());
    }

    #[test]
    fn test_enq_triggers_handshake() {
        let mut transport = MockTransport::new().with_failure_when_drained();
        transport.queue_bytes(&[ENQ]);
        // No ACK follows: handshake fails, listener resumes and the
        // drained queue ends the run

        let mut listener = Listener::new(transport, MonitorConfig::default());
        assert!(listener.run().is_err());
        assert_eq!(listener.transport.written(), &[SYN]);
    }

    #[test]
    fn test_rejected_handshake_keeps_listening() {
        let mut transport = MockTransport::new().with_failure_when_drained();
        transport.queue_bytes(&[ENQ, 0x15]); // NAK instead of ACK
        transport.queue_bytes(&[ENQ, ACK]); // second attempt succeeds
        // Established session finds an empty queue and ends

        let mut listener = Listener::new(transport, MonitorConfig::default());
        assert!(listener.run().is_err());
        // Two SYNs went out, then the first bound write of the
        // established session
        let written = listener.transport.written();
        assert_eq!(written[0], SYN);
        assert_eq!(written[1], SYN);
        assert_eq!(&written[2..6], &[HOST_TO_GW, 0x8A, 0x01, 0xF4]);
    }
}
