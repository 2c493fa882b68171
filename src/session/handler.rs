//! Monitoring loop driving an established session
//!
//! Configures the temperature bounds, selects the gateway mode, then
//! reads, decodes and prints frames while keeping the session alive
//! with periodic pings.
//!
//! Known liveness gap: the keep-alive timer is only checked after a
//! frame read returns, so a gateway that stops sending frames entirely
//! is never pinged and may drop the session on its side.

use crate::config::MonitorConfig;
use crate::protocol::lookup_identifier;
use crate::session::{Session, SessionError, SessionResult};
use crate::transport::ByteTransport;
use std::time::{Duration, Instant};

/// Orchestrates one established session to completion.
pub struct SessionHandler {
    config: MonitorConfig,
    keepalive: Duration,
}

impl SessionHandler {
    pub fn new(config: MonitorConfig) -> Self {
        let keepalive = Duration::from_secs_f64(config.keepalive_secs);
        Self { config, keepalive }
    }

    /// Run the configure/monitor cycle. Returns only on an
    /// unrecoverable session error; short reads are logged with a
    /// degraded marker and the loop continues.
    pub fn run<T: ByteTransport>(&self, session: &mut Session<'_, T>) -> SessionResult<()> {
        self.configure_bounds(session)?;
        session.set_mode(self.config.mode)?;

        let mut last_ping = Instant::now();
        loop {
            match session.read_frame() {
                Ok(frame) => self.report_frame(&frame),
                Err(SessionError::InsufficientBytes { .. }) => println!(" * "),
                Err(e) => return Err(e),
            }

            if last_ping.elapsed() >= self.keepalive {
                // A starved ping is degraded service, not session
                // death; the timer resets only on success
                match session.ping() {
                    Ok(_) => last_ping = Instant::now(),
                    Err(SessionError::InsufficientBytes { .. }) => println!(" * "),
                    Err(e) => return Err(e),
                }
            }
        }
    }

    /// Push the four 16-bit temperature bounds to the gateway. A short
    /// response here is fatal: there is no recovery path before the
    /// monitoring loop starts.
    fn configure_bounds<T: ByteTransport>(&self, session: &mut Session<'_, T>) -> SessionResult<()> {
        let bounds = &self.config.bounds;
        session.set_t_min(bounds.t_min)?;
        session.set_t_max(bounds.t_max)?;
        session.set_t2_min(bounds.t2_min)?;
        session.set_t2_max(bounds.t2_max)?;
        Ok(())
    }

    fn report_frame(&self, frame: &crate::protocol::Frame) {
        let header = frame.header();
        if header.reserved_bits != 0 {
            eprintln!(
                "warning: reserved header bits set: 0x{:02X}",
                header.reserved_bits
            );
        }
        let entry = lookup_identifier(frame.data_id());
        let (msb, lsb) = frame.value_bytes();
        println!(
            "{}\t{}\t{}\t{:02x}{:02x}",
            header.direction, header.msg_type, entry.mnemonic, msb, lsb
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GatewayMode;
    use crate::protocol::constants::{ACK, HOST_TO_GW, SYN};
    use crate::transport::{MockTransport, TransportError};

    fn test_config(mode: GatewayMode) -> MonitorConfig {
        MonitorConfig {
            mode,
            ..MonitorConfig::default()
        }
    }

    /// Response frames for the four bound writes and the mode command.
    fn queue_setup_responses(transport: &mut MockTransport, mode_code: u8) {
        transport.queue_bytes(&[0x30, 0x8A, 0x01, 0xF4]); // t_min = 500
        transport.queue_bytes(&[0x30, 0x8B, 0x03, 0x84]); // t_max = 900
        transport.queue_bytes(&[0x30, 0x8C, 0x03, 0xE8]); // t2_min = 1000
        transport.queue_bytes(&[0x30, 0x8D, 0x07, 0x08]); // t2_max = 1800
        transport.queue_bytes(&[0x30, mode_code, 0, 0]);
    }

    #[test]
    fn test_configures_bounds_and_mode_on_the_wire() {
        let mut transport = MockTransport::new().with_failure_when_drained();
        transport.queue_bytes(&[ACK]);
        queue_setup_responses(&mut transport, 0x04);

        {
            let mut session = Session::new(&mut transport);
            assert!(session.init().unwrap());

            let handler = SessionHandler::new(test_config(GatewayMode::Monitor));
            // Queue drained after setup: the first frame read fails
            // fatally and ends the loop
            let result = handler.run(&mut session);
            assert!(matches!(
                result,
                Err(SessionError::Transport(TransportError::Io { .. }))
            ));
        }

        let written = transport.written();
        let mut expected = vec![SYN];
        expected.extend_from_slice(&[HOST_TO_GW, 0x8A, 0x01, 0xF4]);
        expected.extend_from_slice(&[HOST_TO_GW, 0x8B, 0x03, 0x84]);
        expected.extend_from_slice(&[HOST_TO_GW, 0x8C, 0x03, 0xE8]);
        expected.extend_from_slice(&[HOST_TO_GW, 0x8D, 0x07, 0x08]);
        expected.extend_from_slice(&[HOST_TO_GW, 0x04, 0, 0]);
        // Drop appends the EOS attempt after the handler returns
        expected.extend_from_slice(&[HOST_TO_GW, 0x01, 0, 0]);
        assert_eq!(written, &expected[..]);
    }

    #[test]
    fn test_intercept_mode_uses_its_command_code() {
        let mut transport = MockTransport::new().with_failure_when_drained();
        transport.queue_bytes(&[ACK]);
        queue_setup_responses(&mut transport, 0x05);

        {
            let mut session = Session::new(&mut transport);
            assert!(session.init().unwrap());
            let handler = SessionHandler::new(test_config(GatewayMode::Intercept));
            let _ = handler.run(&mut session);
        }

        // 5th command frame carries DO_INTERCEPT
        let mode_frame = &transport.written()[1 + 4 * 4..1 + 4 * 5];
        assert_eq!(mode_frame, &[HOST_TO_GW, 0x05, 0, 0]);
    }

    #[test]
    fn test_loop_survives_short_frame_and_continues() {
        let mut transport = MockTransport::new().with_failure_when_drained();
        transport.queue_bytes(&[ACK]);
        queue_setup_responses(&mut transport, 0x04);
        // One good frame, then a 2-byte stub, then the queue drains
        transport.queue_bytes(&[0x40, 1, 0x02, 0x3A]);
        transport.queue_bytes(&[0x40, 1]);

        let mut session = Session::new(&mut transport);
        assert!(session.init().unwrap());
        let handler = SessionHandler::new(test_config(GatewayMode::Monitor));
        // The short read is absorbed; the loop only ends when the
        // transport itself fails
        let result = handler.run(&mut session);
        assert!(matches!(
            result,
            Err(SessionError::Transport(TransportError::Io { .. }))
        ));
    }

    #[test]
    fn test_keepalive_ping_issued_after_interval() {
        let mut transport = MockTransport::new().with_failure_when_drained();
        transport.queue_bytes(&[ACK]);
        queue_setup_responses(&mut transport, 0x04);
        transport.queue_bytes(&[0x40, 1, 0x02, 0x3A]); // one frame
        transport.queue_bytes(&[0x30, 0x02, 0x00, 0x01]); // ping response

        let mut config = test_config(GatewayMode::Monitor);
        config.keepalive_secs = 0.0; // elapses immediately
        {
            let mut session = Session::new(&mut transport);
            assert!(session.init().unwrap());
            let handler = SessionHandler::new(config);
            let _ = handler.run(&mut session);
        }

        // After the frame read, a PING frame went out
        let written = transport.written();
        let ping_at = 1 + 4 * 5;
        assert_eq!(&written[ping_at..ping_at + 4], &[HOST_TO_GW, 0x02, 0, 0]);
    }

    #[test]
    fn test_short_ping_response_does_not_end_the_loop() {
        let mut transport = MockTransport::new().with_failure_when_drained();
        transport.queue_bytes(&[ACK]);
        queue_setup_responses(&mut transport, 0x04);
        transport.queue_bytes(&[0x40, 1, 0x02, 0x3A]); // one frame
        transport.queue_bytes(&[0x30, 0x02]); // starved ping response

        let mut config = test_config(GatewayMode::Monitor);
        config.keepalive_secs = 0.0;
        let mut session = Session::new(&mut transport);
        assert!(session.init().unwrap());
        let handler = SessionHandler::new(config);

        // The loop absorbs the short ping and keeps reading; it ends
        // only when the transport itself dies on the next frame read
        let result = handler.run(&mut session);
        assert!(matches!(
            result,
            Err(SessionError::Transport(TransportError::Io { .. }))
        ));
    }

    #[test]
    fn test_fatal_bound_configuration_failure() {
        let mut transport = MockTransport::new();
        transport.queue_bytes(&[ACK]);
        // Short response to the very first bound write
        transport.queue_bytes(&[0x30, 0x8A]);

        let mut session = Session::new(&mut transport);
        assert!(session.init().unwrap());
        let handler = SessionHandler::new(test_config(GatewayMode::Monitor));
        assert!(matches!(
            handler.run(&mut session),
            Err(SessionError::InsufficientBytes {
                expected: 4,
                received: 2
            })
        ));
    }
}
