//! Errors raised while acquiring hardware handles

use thiserror::Error;

/// Failure to open a bus or pin
///
/// Only raised at startup; once a handle is open, per-transfer failures
/// are reported through [`choreograph_hal::I2cBusError`] instead.
#[derive(Debug, Error)]
pub enum HalError {
    /// The I2C character device could not be opened
    #[cfg(target_os = "linux")]
    #[error("failed to open I2C bus {path}")]
    I2cOpen {
        path: String,
        #[source]
        source: linux_embedded_hal::I2CError,
    },

    /// The GPIO block or the requested pin is unavailable
    #[cfg(target_os = "linux")]
    #[error("failed to acquire GPIO {pin}")]
    Gpio {
        pin: u8,
        #[source]
        source: rppal::gpio::Error,
    },

    /// The host has no supported hardware backend
    #[error("hardware access is only supported on Linux")]
    Unsupported,
}
