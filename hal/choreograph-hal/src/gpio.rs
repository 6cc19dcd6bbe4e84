//! GPIO pin abstractions
//!
//! Provides the digital input trait used for the panic switch.

/// Digital input pin
///
/// Implementations should handle the actual hardware reading for the
/// specific board. Pull resistors are configured when the pin is opened,
/// not through this trait.
pub trait InputPin {
    /// Check if the pin reads high (logic 1)
    fn is_high(&self) -> bool;
}
