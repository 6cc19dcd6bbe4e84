//! Panic switch on a digital input
//!
//! The switch is normally closed while the show is allowed to run. Panic
//! is active whenever the switch is NOT pressed, so releasing it, cutting
//! the wire or pulling the connector all stop playback.

use choreograph_core::config::PinConfig;
use choreograph_core::traits::PanicMonitor;
use choreograph_hal::InputPin;

/// Panic monitor reading a switch on a GPIO pin
pub struct PanicButton<P> {
    pin: P,
    /// If true, pressed = pin LOW (switch to ground with pull-up)
    pressed_when_low: bool,
}

impl<P: InputPin> PanicButton<P> {
    /// Create a new panic button
    ///
    /// # Arguments
    /// - `pin`: The input the switch is wired to
    /// - `pressed_when_low`: If true, the switch pulls the pin to ground
    pub fn new(pin: P, pressed_when_low: bool) -> Self {
        Self {
            pin,
            pressed_when_low,
        }
    }

    /// Create a button following a pin configuration
    pub fn from_config(pin: P, config: &PinConfig) -> Self {
        Self::new(pin, config.inverted)
    }

    /// Check whether the switch is currently pressed
    pub fn is_pressed(&self) -> bool {
        self.pin.is_high() != self.pressed_when_low
    }
}

impl<P: InputPin> PanicMonitor for PanicButton<P> {
    fn is_panic_active(&mut self) -> bool {
        !self.is_pressed()
    }
}

/// Stand-in for hosts without a panic switch
///
/// Never reports panic. Only meant for dry runs.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoPanicInput;

impl PanicMonitor for NoPanicInput {
    fn is_panic_active(&mut self) -> bool {
        false
    }
}
