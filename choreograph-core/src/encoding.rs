//! Position encoding
//!
//! Every position travels on the bus as exactly two bytes, most significant
//! byte first. Small values are left-padded with zeros, so `10` becomes
//! `[0, 10]` and `0` becomes `[0, 0]`.

use core::fmt;

/// A servo position (unit defined by the slave firmware)
pub type Position = u16;

/// The two-byte wire form of a [`Position`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct EncodedFrame([u8; 2]);

impl EncodedFrame {
    /// Encoding of position 0; marks reset frames when in the first column
    pub const ZERO: Self = Self([0, 0]);

    /// Encode a position
    ///
    /// Base-256 digits, most significant first. A position with a single
    /// significant byte and position 0 both come out padded to two bytes.
    pub const fn from_position(position: Position) -> Self {
        Self(position.to_be_bytes())
    }

    /// Decode back into a position
    pub const fn position(self) -> Position {
        Position::from_be_bytes(self.0)
    }

    /// Both bytes, high byte first
    pub const fn bytes(self) -> [u8; 2] {
        self.0
    }

    /// Most significant byte
    pub const fn high(self) -> u8 {
        self.0[0]
    }

    /// Least significant byte
    pub const fn low(self) -> u8 {
        self.0[1]
    }

    /// Check for the all-zero encoding
    pub const fn is_zero(self) -> bool {
        self.0[0] == 0 && self.0[1] == 0
    }
}

impl From<Position> for EncodedFrame {
    fn from(position: Position) -> Self {
        Self::from_position(position)
    }
}

impl fmt::Display for EncodedFrame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.0[0], self.0[1])
    }
}
