//! Dry-run transport
//!
//! Accepts every write without touching hardware. Used to rehearse a
//! choreography on a machine with no bus attached.

use choreograph_core::config::DeviceAddress;
use choreograph_core::traits::{BusTransport, TransportError};
use choreograph_core::EncodedFrame;
use log::trace;

/// Transport that discards all writes
#[derive(Debug, Default)]
pub struct NullTransport {
    writes: u64,
}

impl NullTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of writes swallowed so far
    pub fn writes(&self) -> u64 {
        self.writes
    }
}

impl BusTransport for NullTransport {
    fn send(&mut self, address: DeviceAddress, value: EncodedFrame) -> Result<(), TransportError> {
        trace!("(dry run) {} > {}", value, address);
        self.writes += 1;
        Ok(())
    }
}
