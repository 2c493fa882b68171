//! Frame model and header codec for 4-byte gateway protocol units

use crate::protocol::constants::{
    DIRECTION_BIT, FRAME_LEN, HOST_TO_GW, MSG_TYPE_MASK, RESERVED_MASK,
};

/// Direction of an OpenTherm bus message, taken from bit 6 of byte 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    MasterToSlave,
    SlaveToMaster,
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Direction::MasterToSlave => write!(f, "M -> S"),
            Direction::SlaveToMaster => write!(f, "M <- S"),
        }
    }
}

/// OpenTherm message type, the 3-bit field in bits 4-6 of byte 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MsgType {
    ReadData,
    WriteData,
    InvalidData,
    Reserved,
    ReadAck,
    WriteAck,
    DataInvalid,
    UnknownDataId,
}

impl MsgType {
    /// Map the extracted 3-bit value to its message type.
    pub fn from_bits(bits: u8) -> Self {
        match bits & 0x07 {
            0 => MsgType::ReadData,
            1 => MsgType::WriteData,
            2 => MsgType::InvalidData,
            3 => MsgType::Reserved,
            4 => MsgType::ReadAck,
            5 => MsgType::WriteAck,
            6 => MsgType::DataInvalid,
            _ => MsgType::UnknownDataId,
        }
    }
}

impl std::fmt::Display for MsgType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            MsgType::ReadData => "READ_DATA",
            MsgType::WriteData => "WRITE_DATA",
            MsgType::InvalidData => "INVALID_DATA",
            MsgType::Reserved => "RESERVED",
            MsgType::ReadAck => "READ_ACK",
            MsgType::WriteAck => "WRITE_ACK",
            MsgType::DataInvalid => "DATA_INVALID",
            MsgType::UnknownDataId => "UNKNOWN_DATAID",
        };
        write!(f, "{}", name)
    }
}

/// Decoded contents of a frame header byte.
///
/// The reserved low nibble is carried out of the decode rather than
/// raised as an error: a nonzero value is a protocol anomaly the caller
/// may log, but decoding always proceeds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameHeader {
    pub direction: Direction,
    pub msg_type: MsgType,
    /// Value of the reserved bits 0-3; zero on a conformant frame.
    pub reserved_bits: u8,
}

/// Decode byte 0 of a monitoring frame into direction and message type.
pub fn decode_header(byte0: u8) -> FrameHeader {
    let direction = if byte0 & (1 << DIRECTION_BIT) != 0 {
        Direction::SlaveToMaster
    } else {
        Direction::MasterToSlave
    };
    FrameHeader {
        direction,
        msg_type: MsgType::from_bits((byte0 & MSG_TYPE_MASK) >> 4),
        reserved_bits: byte0 & RESERVED_MASK,
    }
}

/// Build the 4-byte host-to-gateway command frame for a command code.
pub fn encode_command(command: u8, msb: u8, lsb: u8) -> [u8; FRAME_LEN] {
    [HOST_TO_GW, command, msb, lsb]
}

/// A single 4-byte OpenTherm monitoring frame as read from the gateway.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Frame {
    bytes: [u8; FRAME_LEN],
}

impl Frame {
    pub fn from_bytes(bytes: [u8; FRAME_LEN]) -> Self {
        Self { bytes }
    }

    /// Decoded header byte (direction, message type, reserved bits).
    pub fn header(&self) -> FrameHeader {
        decode_header(self.bytes[0])
    }

    /// Data-identifier byte naming the payload's semantic field.
    pub fn data_id(&self) -> u8 {
        self.bytes[1]
    }

    /// Payload as a big-endian 16-bit value.
    pub fn value(&self) -> u16 {
        u16::from_be_bytes([self.bytes[2], self.bytes[3]])
    }

    /// Raw payload bytes (msb, lsb), not decoded further here.
    pub fn value_bytes(&self) -> (u8, u8) {
        (self.bytes[2], self.bytes[3])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direction_from_bit_6() {
        assert_eq!(decode_header(0x00).direction, Direction::MasterToSlave);
        assert_eq!(decode_header(0x40).direction, Direction::SlaveToMaster);
        assert_eq!(decode_header(0x30).direction, Direction::MasterToSlave);
        assert_eq!(decode_header(0x70).direction, Direction::SlaveToMaster);
    }

    #[test]
    fn test_msg_type_from_bits_4_to_6() {
        assert_eq!(decode_header(0x00).msg_type, MsgType::ReadData);
        assert_eq!(decode_header(0x10).msg_type, MsgType::WriteData);
        assert_eq!(decode_header(0x20).msg_type, MsgType::InvalidData);
        assert_eq!(decode_header(0x30).msg_type, MsgType::Reserved);
        assert_eq!(decode_header(0x40).msg_type, MsgType::ReadAck);
        assert_eq!(decode_header(0x50).msg_type, MsgType::WriteAck);
        assert_eq!(decode_header(0x60).msg_type, MsgType::DataInvalid);
        assert_eq!(decode_header(0x70).msg_type, MsgType::UnknownDataId);
    }

    #[test]
    fn test_reserved_bits_never_block_decoding() {
        // byte0 = 0x41: bit 6 set, msg type 4, reserved nibble nonzero
        let header = decode_header(0x41);
        assert_eq!(header.direction, Direction::SlaveToMaster);
        assert_eq!(header.msg_type, MsgType::ReadAck);
        assert_eq!(header.reserved_bits, 0x01);

        // Conformant frame reports zero reserved bits
        assert_eq!(decode_header(0x40).reserved_bits, 0);
    }

    #[test]
    fn test_encode_command_layout() {
        let frame = encode_command(0x8A, 0x01, 0xF4);
        assert_eq!(frame, [HOST_TO_GW, 0x8A, 0x01, 0xF4]);

        // Defaulted payload bytes stay zero
        assert_eq!(encode_command(0x02, 0, 0), [HOST_TO_GW, 0x02, 0, 0]);
    }

    #[test]
    fn test_frame_accessors() {
        let frame = Frame::from_bytes([0x40, 1, 0x02, 0x3A]);
        assert_eq!(frame.header().direction, Direction::SlaveToMaster);
        assert_eq!(frame.header().msg_type, MsgType::ReadAck);
        assert_eq!(frame.data_id(), 1);
        assert_eq!(frame.value(), 0x023A);
        assert_eq!(frame.value_bytes(), (0x02, 0x3A));
    }

    #[test]
    fn test_direction_display() {
        assert_eq!(Direction::MasterToSlave.to_string(), "M -> S");
        assert_eq!(Direction::SlaveToMaster.to_string(), "M <- S");
    }
}
