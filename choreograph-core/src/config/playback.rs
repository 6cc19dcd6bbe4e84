//! Playback configuration
//!
//! Timing constants, the device address list and the middle-position
//! sentinel. Defaults match the installation the player was built for.

use core::time::Duration;

use heapless::Vec;
use thiserror::Error;

use crate::encoding::{EncodedFrame, Position};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// 7-bit bus address of one slave
pub type DeviceAddress = u8;

/// Highest valid 7-bit slave address
pub const MAX_ADDRESS: DeviceAddress = 0x7F;

/// Maximum devices per config (one per 7-bit address)
pub const MAX_DEVICES: usize = 128;

/// Ordered device addresses; column `i` of every frame goes to entry `i`
pub type DeviceList = Vec<DeviceAddress, MAX_DEVICES>;

/// Default addresses are 1 through 24
pub const DEFAULT_FIRST_ADDRESS: DeviceAddress = 1;
pub const DEFAULT_LAST_ADDRESS: DeviceAddress = 24;

/// Tick period in milliseconds
pub const DEFAULT_CLOCK_PERIOD_MS: u32 = 60;

/// Pause after any reset, in milliseconds
pub const DEFAULT_RESET_SETTLE_MS: u32 = 15_000;

/// Position that is never written to the bus
pub const DEFAULT_MIDDLE_POSITION: Position = 4000;

/// Configuration errors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// Device list is empty
    #[error("at least one device address is required")]
    NoDevices,
    /// More addresses than fit in a device list
    #[error("too many device addresses (max {})", MAX_DEVICES)]
    TooManyDevices,
    /// Address outside the 7-bit range
    #[error("device address {0} is outside the 7-bit range 0..=127")]
    InvalidAddress(DeviceAddress),
    /// Clock period of zero
    #[error("clock period must be greater than zero")]
    ZeroClockPeriod,
}

/// Playback configuration
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default, deny_unknown_fields))]
pub struct PlaybackConfig {
    /// Bus addresses, in frame column order
    pub devices: DeviceList,
    /// Time between ticks (ms)
    pub clock_period_ms: u32,
    /// Pause after a panic or regular reset (ms)
    pub reset_settle_ms: u32,
    /// Positions equal to this are skipped on write
    pub middle_position: Position,
}

impl Default for PlaybackConfig {
    fn default() -> Self {
        Self {
            devices: default_devices(),
            clock_period_ms: DEFAULT_CLOCK_PERIOD_MS,
            reset_settle_ms: DEFAULT_RESET_SETTLE_MS,
            middle_position: DEFAULT_MIDDLE_POSITION,
        }
    }
}

impl PlaybackConfig {
    /// Replace the device list
    pub fn with_devices(mut self, addresses: &[DeviceAddress]) -> Result<Self, ConfigError> {
        self.devices = device_list(addresses)?;
        Ok(self)
    }

    /// Check all invariants
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.devices.is_empty() {
            return Err(ConfigError::NoDevices);
        }
        if let Some(&bad) = self.devices.iter().find(|&&a| a > MAX_ADDRESS) {
            return Err(ConfigError::InvalidAddress(bad));
        }
        if self.clock_period_ms == 0 {
            return Err(ConfigError::ZeroClockPeriod);
        }
        Ok(())
    }

    /// Number of configured devices (the width of every frame)
    pub fn device_count(&self) -> usize {
        self.devices.len()
    }

    /// Tick period
    pub fn clock_period(&self) -> Duration {
        Duration::from_millis(u64::from(self.clock_period_ms))
    }

    /// Settle duration after a reset
    pub fn reset_settle(&self) -> Duration {
        Duration::from_millis(u64::from(self.reset_settle_ms))
    }

    /// Encoded middle position, compared byte-wise against frame entries
    pub fn middle_encoded(&self) -> EncodedFrame {
        EncodedFrame::from_position(self.middle_position)
    }
}

/// Addresses 1..=24
pub fn default_devices() -> DeviceList {
    (DEFAULT_FIRST_ADDRESS..=DEFAULT_LAST_ADDRESS).collect()
}

/// Build a device list from a slice, checking capacity and range
pub fn device_list(addresses: &[DeviceAddress]) -> Result<DeviceList, ConfigError> {
    if addresses.is_empty() {
        return Err(ConfigError::NoDevices);
    }
    let mut list = DeviceList::new();
    for &address in addresses {
        if address > MAX_ADDRESS {
            return Err(ConfigError::InvalidAddress(address));
        }
        list.push(address)
            .map_err(|_| ConfigError::TooManyDevices)?;
    }
    Ok(list)
}
