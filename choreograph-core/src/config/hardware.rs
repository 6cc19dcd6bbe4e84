//! Hardware configuration types
//!
//! Pin assignment for the panic input and the bus the slaves sit on.

/// Highest BCM GPIO number on the Raspberry Pi header
pub const MAX_GPIO: u8 = 27;

/// BCM pin the panic switch is wired to
pub const DEFAULT_PANIC_PIN: u8 = 4;

/// I2C bus number the slaves sit on
pub const DEFAULT_I2C_BUS: u8 = 1;

/// Pin configuration with optional inversion
///
/// `inverted` means the input is active-low: the switch is considered
/// pressed when the pin reads low.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PinConfig {
    /// BCM GPIO number
    pub pin: u8,
    /// Pin is active-low (inverted)
    pub inverted: bool,
    /// Enable internal pull-up
    pub pull_up: bool,
}

impl PinConfig {
    /// Create a new pin config
    pub const fn new(pin: u8) -> Self {
        Self {
            pin,
            inverted: false,
            pull_up: false,
        }
    }

    /// Create an inverted (active-low) pin
    pub const fn inverted(pin: u8) -> Self {
        Self {
            pin,
            inverted: true,
            pull_up: false,
        }
    }

    /// Create a pin with pull-up enabled
    pub const fn with_pullup(pin: u8) -> Self {
        Self {
            pin,
            inverted: false,
            pull_up: true,
        }
    }

    /// Panic switch default: pull-up input, closed contact pulls to ground
    pub const fn default_panic() -> Self {
        Self {
            pin: DEFAULT_PANIC_PIN,
            inverted: true,
            pull_up: true,
        }
    }

    /// Parse a pin string from config
    ///
    /// Supports formats:
    /// - "gpio4" -> pin 4
    /// - "!gpio4" -> pin 4, inverted/active-low
    /// - "^gpio4" -> pin 4, pull-up
    /// - "^!gpio4" or "!^gpio4" -> both
    pub fn parse(s: &str) -> Option<Self> {
        let mut s = s.trim();
        let mut config = Self::default();

        loop {
            if let Some(rest) = s.strip_prefix('!') {
                config.inverted = true;
                s = rest;
            } else if let Some(rest) = s.strip_prefix('^') {
                config.pull_up = true;
                s = rest;
            } else {
                break;
            }
        }

        let pin: u8 = s.strip_prefix("gpio")?.parse().ok()?;
        if pin > MAX_GPIO {
            return None;
        }
        config.pin = pin;
        Some(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pin_config() {
        let pin = PinConfig::new(10);
        assert_eq!(pin.pin, 10);
        assert!(!pin.inverted);
        assert!(!pin.pull_up);

        let inverted = PinConfig::inverted(12);
        assert!(inverted.inverted);

        let pullup = PinConfig::with_pullup(4);
        assert!(pullup.pull_up);
    }

    #[test]
    fn test_parse_pin_string() {
        assert_eq!(PinConfig::parse("gpio11"), Some(PinConfig::new(11)));
        assert_eq!(PinConfig::parse("!gpio12"), Some(PinConfig::inverted(12)));
        assert_eq!(PinConfig::parse("^gpio4"), Some(PinConfig::with_pullup(4)));
        assert_eq!(PinConfig::parse("^!gpio4"), Some(PinConfig::default_panic()));
        assert_eq!(PinConfig::parse(" !^gpio4 "), Some(PinConfig::default_panic()));
        assert_eq!(PinConfig::parse("gpio27"), Some(PinConfig::new(27)));

        // Invalid
        assert_eq!(PinConfig::parse("gpio28"), None);
        assert_eq!(PinConfig::parse("pin11"), None);
        assert_eq!(PinConfig::parse("gpio"), None);
        assert_eq!(PinConfig::parse(""), None);
    }
}
