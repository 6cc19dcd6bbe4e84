//! Linux HAL for the Choreograph player
//!
//! This crate provides Linux implementations of the shared
//! `choreograph-hal` traits:
//!
//! - I2C master writes through the kernel `i2c-dev` interface
//!   (`linux-embedded-hal`, driven through `embedded-hal` 1.0)
//! - Digital inputs through the Raspberry Pi GPIO block (`rppal`)
//!
//! Both handles are opened once at startup and owned for the whole
//! playback session.

#![deny(unsafe_code)]

pub mod error;
#[cfg(target_os = "linux")]
pub mod gpio;
pub mod i2c;

pub use error::HalError;
#[cfg(target_os = "linux")]
pub use gpio::{Pull, RppalInputPin};
#[cfg(target_os = "linux")]
pub use i2c::LinuxI2cBus;
pub use i2c::map_error_kind;

// Re-export shared traits from choreograph-hal for convenience
pub use choreograph_hal::{I2cBus, I2cBusError, InputPin};
