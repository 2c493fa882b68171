//! Host-to-gateway command codes

use crate::protocol::constants::WRITE_VARIANT_BIT;

/// Control codes accepted by the gateway firmware.
///
/// Every readable parameter is addressed by its "get" code; the
/// matching "set" code is the same value with bit 7 set, produced by
/// [`Command::write_code`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum Command {
    /// End the current session.
    EndSession = 0x01,
    /// Keep-alive ping.
    Ping = 0x02,
    /// Restart the gateway firmware.
    Restart = 0x03,
    /// Enter passive monitoring mode.
    DoMonitor = 0x04,
    /// Enter active intercept mode.
    DoIntercept = 0x05,
    /// Read the measured temperature.
    GetTempr = 0x06,
    /// Temperature divisor.
    GetTDiv = 0x07,
    /// Primary temperature register.
    GetT = 0x08,
    /// Secondary temperature register.
    GetT2 = 0x09,
    /// Lower bound for the primary temperature.
    GetTMin = 0x0A,
    /// Upper bound for the primary temperature.
    GetTMax = 0x0B,
    /// Lower bound for the secondary temperature.
    GetT2Min = 0x0C,
    /// Upper bound for the secondary temperature.
    GetT2Max = 0x0D,
    /// LED state.
    GetLed = 0x0E,
    /// Serial baud setting.
    GetBaud = 0x0F,
    /// Parity error counter.
    GetErrCnt = 0x10,
    /// Framing error counter.
    GetFrmErrCnt = 0x11,
    /// Sync error counter.
    GetSynErrCnt = 0x12,
    /// Test value register.
    GetTest = 0x13,
    /// Trigger the gateway self-test.
    DoTest = 0xFF,
}

impl Command {
    /// The wire code for the command (its "get" form where applicable).
    pub fn code(self) -> u8 {
        self as u8
    }

    /// The "set" variant of this command's code: the get code with
    /// bit 7 set.
    pub fn write_code(self) -> u8 {
        self.code() | WRITE_VARIANT_BIT
    }
}
