//! Hardware acquisition
//!
//! Opens the I2C bus and the panic switch. On hosts without the Linux
//! backends the handle types are uninhabited and every open fails, which
//! still leaves dry runs usable.

use choreograph_core::config::PinConfig;
use choreograph_drivers::PanicButton;
use choreograph_hal::i2c::I2cConfig;
use choreograph_hal_linux::HalError;

#[cfg(target_os = "linux")]
pub use choreograph_hal_linux::{LinuxI2cBus as Bus, RppalInputPin as Pin};

#[cfg(not(target_os = "linux"))]
pub use self::unsupported::{Bus, Pin};

/// Open the bus the slaves hang off
#[cfg(target_os = "linux")]
pub fn open_bus(config: I2cConfig) -> Result<Bus, HalError> {
    let bus = Bus::open(config)?;
    log::info!("Opened I2C bus {}", config.bus);
    Ok(bus)
}

#[cfg(not(target_os = "linux"))]
pub fn open_bus(_config: I2cConfig) -> Result<Bus, HalError> {
    Err(HalError::Unsupported)
}

/// Open the panic switch
#[cfg(target_os = "linux")]
pub fn open_panic_button(config: &PinConfig) -> Result<PanicButton<Pin>, HalError> {
    use choreograph_hal_linux::Pull;

    let pull = if config.pull_up { Pull::Up } else { Pull::None };
    let pin = Pin::open(config.pin, pull)?;
    log::info!(
        "Panic switch on GPIO {} ({})",
        config.pin,
        if config.inverted { "active low" } else { "active high" }
    );
    Ok(PanicButton::from_config(pin, config))
}

#[cfg(not(target_os = "linux"))]
pub fn open_panic_button(_config: &PinConfig) -> Result<PanicButton<Pin>, HalError> {
    Err(HalError::Unsupported)
}

#[cfg(not(target_os = "linux"))]
mod unsupported {
    use choreograph_hal::{I2cBus, I2cBusError, InputPin};

    /// No I2C backend on this host
    pub enum Bus {}

    impl I2cBus for Bus {
        fn write(&mut self, _address: u8, _data: &[u8]) -> Result<(), I2cBusError> {
            match *self {}
        }
    }

    /// No GPIO backend on this host
    pub enum Pin {}

    impl InputPin for Pin {
        fn is_high(&self) -> bool {
            match *self {}
        }
    }
}
