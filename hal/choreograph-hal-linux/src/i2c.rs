//! I2C bus driver for Linux
//!
//! Wraps a `/dev/i2c-N` character device. Each write is a single
//! transaction addressed to one slave.

use embedded_hal::i2c::ErrorKind;

use choreograph_hal::I2cBusError;

#[cfg(target_os = "linux")]
pub use self::linux::LinuxI2cBus;

/// Map an `embedded-hal` error kind onto the board-independent vocabulary
pub fn map_error_kind(kind: ErrorKind) -> I2cBusError {
    match kind {
        ErrorKind::Bus => I2cBusError::Bus,
        ErrorKind::ArbitrationLoss => I2cBusError::ArbitrationLost,
        ErrorKind::NoAcknowledge(_) => I2cBusError::Nack,
        ErrorKind::Overrun => I2cBusError::Overrun,
        _ => I2cBusError::Other,
    }
}

#[cfg(target_os = "linux")]
mod linux {
    use embedded_hal::i2c::{Error as _, I2c};
    use linux_embedded_hal::I2cdev;
    use log::debug;

    use choreograph_hal::i2c::I2cConfig;
    use choreograph_hal::{I2cBus, I2cBusError};

    use super::map_error_kind;
    use crate::HalError;

    /// I2C master on a Linux `i2c-dev` node
    pub struct LinuxI2cBus {
        dev: I2cdev,
    }

    impl LinuxI2cBus {
        /// Open `/dev/i2c-N` for the configured bus number
        pub fn open(config: I2cConfig) -> Result<Self, HalError> {
            let path = format!("/dev/i2c-{}", config.bus);
            let dev = I2cdev::new(&path).map_err(|source| HalError::I2cOpen {
                path: path.clone(),
                source: source.into(),
            })?;
            debug!("Opened I2C bus {}", path);
            Ok(Self { dev })
        }
    }

    impl I2cBus for LinuxI2cBus {
        fn write(&mut self, address: u8, data: &[u8]) -> Result<(), I2cBusError> {
            self.dev
                .write(address, data)
                .map_err(|e| map_error_kind(e.kind()))
        }
    }
}
