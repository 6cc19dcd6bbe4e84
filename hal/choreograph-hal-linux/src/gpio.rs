//! GPIO inputs through the Raspberry Pi GPIO block

use log::debug;
use rppal::gpio::Gpio;

use choreograph_hal::InputPin;

use crate::HalError;

/// Internal pull resistor applied when the pin is opened
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pull {
    /// Floating input
    None,
    /// Pull up to 3.3V
    Up,
    /// Pull down to ground
    Down,
}

/// A BCM-numbered GPIO configured as input
pub struct RppalInputPin {
    pin: rppal::gpio::InputPin,
}

impl RppalInputPin {
    /// Acquire BCM pin `pin` as an input with the given pull resistor
    pub fn open(pin: u8, pull: Pull) -> Result<Self, HalError> {
        let gpio_err = |source| HalError::Gpio { pin, source };
        let raw = Gpio::new().map_err(gpio_err)?.get(pin).map_err(gpio_err)?;
        let pin_handle = match pull {
            Pull::None => raw.into_input(),
            Pull::Up => raw.into_input_pullup(),
            Pull::Down => raw.into_input_pulldown(),
        };
        debug!("Opened GPIO {} as input ({:?})", pin, pull);
        Ok(Self { pin: pin_handle })
    }
}

impl InputPin for RppalInputPin {
    fn is_high(&self) -> bool {
        self.pin.is_high()
    }
}
