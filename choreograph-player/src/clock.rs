//! Wall-clock sleeping

use std::thread;
use std::time::Duration;

use choreograph_core::traits::Clock;

/// Clock that blocks the calling thread
#[derive(Debug, Default, Clone, Copy)]
pub struct ThreadClock;

impl Clock for ThreadClock {
    fn sleep(&mut self, duration: Duration) {
        thread::sleep(duration);
    }
}
