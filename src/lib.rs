//! OpenTherm Gateway Monitoring Host
//!
//! Host-side companion for an OpenTherm gateway: establishes sessions
//! over a serial link, configures the gateway, and decodes the 4-byte
//! OpenTherm frames it relays.

pub mod config;
pub mod listener;
pub mod protocol;
pub mod session;
pub mod transport;

// Re-export commonly used types
pub use config::{Bounds, ConfigError, ConfigResult, GatewayMode, MonitorConfig};
pub use listener::Listener;
pub use protocol::{
    lookup_identifier, Command, DataIdEntry, Direction, Frame, FrameHeader, MsgType,
    UNKNOWN_DATA_ID,
};
pub use session::{Session, SessionError, SessionHandler, SessionResult, SessionState};
pub use transport::{
    ByteTransport, MockTransport, SerialTransport, TransportError, TransportResult,
};
