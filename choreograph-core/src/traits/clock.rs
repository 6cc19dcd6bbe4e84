//! Blocking clock trait

use core::time::Duration;

/// Source of blocking delays
///
/// The engine never reads the time; it only sleeps. Tests substitute a
/// clock that records the requested delays and returns immediately.
pub trait Clock {
    /// Block for `duration`
    fn sleep(&mut self, duration: Duration);
}

impl<T: Clock + ?Sized> Clock for &mut T {
    fn sleep(&mut self, duration: Duration) {
        (**self).sleep(duration)
    }
}
