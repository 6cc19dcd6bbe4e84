//! I2C bus abstractions
//!
//! Provides the master-write trait the player uses to push positions to
//! its slaves, plus a board-independent error vocabulary.

use core::fmt;

/// Error from I2C operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum I2cBusError {
    /// Bus error (misplaced start/stop condition)
    Bus,
    /// Arbitration lost to another master
    ArbitrationLost,
    /// Address or data byte not acknowledged by the slave
    Nack,
    /// Transfer did not complete in time
    Timeout,
    /// Data overrun
    Overrun,
    /// Other error
    Other,
}

impl fmt::Display for I2cBusError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            I2cBusError::Bus => "bus error",
            I2cBusError::ArbitrationLost => "arbitration lost",
            I2cBusError::Nack => "no acknowledge",
            I2cBusError::Timeout => "timeout",
            I2cBusError::Overrun => "overrun",
            I2cBusError::Other => "unknown I2C error",
        };
        f.write_str(msg)
    }
}

/// I2C bus master
///
/// The bus is opened once per session and owned by whoever drives it;
/// writes are blocking and strictly sequential.
pub trait I2cBus {
    /// Write data to a device at the given address
    ///
    /// # Arguments
    /// * `address` - 7-bit I2C address
    /// * `data` - Bytes to write
    fn write(&mut self, address: u8, data: &[u8]) -> Result<(), I2cBusError>;
}

/// I2C configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct I2cConfig {
    /// Bus number (`/dev/i2c-N` on Linux)
    pub bus: u8,
}

impl Default for I2cConfig {
    fn default() -> Self {
        // Bus 1 is the user-facing bus on the Raspberry Pi header
        Self { bus: 1 }
    }
}

impl I2cConfig {
    /// Create a config for the given bus number
    pub const fn new(bus: u8) -> Self {
        Self { bus }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_bus_is_one() {
        assert_eq!(I2cConfig::default().bus, 1);
    }

    #[test]
    fn test_error_display() {
        use core::fmt::Write;

        struct Buf {
            data: [u8; 32],
            len: usize,
        }

        impl Write for Buf {
            fn write_str(&mut self, s: &str) -> fmt::Result {
                let bytes = s.as_bytes();
                let end = self.len + bytes.len();
                if end > self.data.len() {
                    return Err(fmt::Error);
                }
                self.data[self.len..end].copy_from_slice(bytes);
                self.len = end;
                Ok(())
            }
        }

        let mut buf = Buf {
            data: [0; 32],
            len: 0,
        };
        write!(buf, "{}", I2cBusError::Nack).unwrap();
        assert_eq!(&buf.data[..buf.len], b"no acknowledge");
    }
}
