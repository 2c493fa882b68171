//! Wire-level constants for the gateway serial protocol

/// Gateway-initiated session request byte.
pub const ENQ: u8 = 0x05;
/// Host handshake request byte.
pub const SYN: u8 = 0x16;
/// Gateway handshake acknowledgment byte.
pub const ACK: u8 = 0x06;

/// Byte 0 tag on every host-originated command frame, distinct from
/// the OpenTherm master/slave traffic header values.
pub const HOST_TO_GW: u8 = 0x30;

/// Length of every protocol unit on the wire, command or monitoring.
pub const FRAME_LEN: usize = 4;

/// Bit 6 of the frame header carries the bus direction.
pub const DIRECTION_BIT: u8 = 6;
/// Bits 4-6 of the frame header carry the 3-bit message type.
pub const MSG_TYPE_MASK: u8 = 0x70;
/// Bits 0-3 of the frame header are reserved and must be zero.
pub const RESERVED_MASK: u8 = 0x0F;

/// Offset turning a "get" command code into its "set" variant.
pub const WRITE_VARIANT_BIT: u8 = 0x80;
