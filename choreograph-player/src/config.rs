//! Configuration loading
//!
//! The built-in defaults live in `player.toml`, compiled into the binary.
//! A user file passed with `--config` replaces them; any section or key it
//! omits falls back to the compiled-in defaults of the core crate.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

use choreograph_core::config::{device_list, DeviceAddress, PinConfig, PlaybackConfig, DEFAULT_I2C_BUS};
use choreograph_hal::i2c::I2cConfig;

/// Embedded default configuration
/// Edit player.toml and rebuild to change it
const EMBEDDED_CONFIG: &str = include_str!("../player.toml");

/// Contents of a configuration file
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FileConfig {
    pub playback: PlaybackConfig,
    pub hardware: HardwareSection,
}

/// `[hardware]` section
#[derive(Debug, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct HardwareSection {
    /// Bus number, `/dev/i2c-<n>`
    pub i2c_bus: u8,
    /// Panic switch pin, e.g. "^!gpio4"
    pub panic_pin: String,
}

impl Default for HardwareSection {
    fn default() -> Self {
        Self {
            i2c_bus: DEFAULT_I2C_BUS,
            panic_pin: "^!gpio4".to_string(),
        }
    }
}

/// Fully resolved, validated settings for one session
#[derive(Debug, Clone)]
pub struct Settings {
    pub playback: PlaybackConfig,
    pub i2c: I2cConfig,
    pub panic_pin: PinConfig,
}

impl FileConfig {
    /// Parse TOML text
    pub fn parse(text: &str) -> Result<Self> {
        toml::from_str(text).context("invalid configuration")
    }

    /// Load `path`, or the embedded defaults when no path is given
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => {
                let text = fs::read_to_string(path)
                    .with_context(|| format!("failed to read {}", path.display()))?;
                Self::parse(&text).with_context(|| format!("in {}", path.display()))
            }
            None => Self::parse(EMBEDDED_CONFIG).context("in embedded player.toml"),
        }
    }

    /// Apply command line overrides and validate
    pub fn resolve(self, addresses: Option<&[DeviceAddress]>) -> Result<Settings> {
        let mut playback = self.playback;
        if let Some(addresses) = addresses {
            playback.devices = device_list(addresses).context("invalid --i2c-slave-addresses")?;
        }
        playback.validate().context("invalid playback configuration")?;

        let panic_pin = PinConfig::parse(&self.hardware.panic_pin)
            .with_context(|| format!("invalid panic_pin {:?}", self.hardware.panic_pin))?;

        Ok(Settings {
            playback,
            i2c: I2cConfig::new(self.hardware.i2c_bus),
            panic_pin,
        })
    }
}
