//! OpenTherm gateway wire protocol: frame codec, command codes and
//! the data-identifier registry.
//!
//! Everything here is pure data manipulation; reading and writing the
//! bytes is the transport layer's job.

pub mod command;
pub mod constants;
pub mod frame;
pub mod registry;

pub use command::Command;
pub use frame::{decode_header, encode_command, Direction, Frame, FrameHeader, MsgType};
pub use registry::{lookup_identifier, DataIdEntry, UNKNOWN_DATA_ID};
