//! Panic input trait

/// Trait for the emergency-stop input
///
/// A point-in-time query with no internal state. The engine polls it once
/// per tick, before any frame is written.
///
/// Polarity is part of the physical contract: panic is active when the
/// monitored switch is open (de-asserted), so a cut wire or an unplugged
/// switch also stops the show.
pub trait PanicMonitor {
    /// Check whether an emergency stop is currently asserted
    ///
    /// Takes `&mut self` because reading an input may require mutable
    /// access to the underlying handle.
    fn is_panic_active(&mut self) -> bool;
}

impl<T: PanicMonitor + ?Sized> PanicMonitor for &mut T {
    fn is_panic_active(&mut self) -> bool {
        (**self).is_panic_active()
    }
}
