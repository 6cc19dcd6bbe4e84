//! Bus transport trait

use thiserror::Error;

use crate::config::DeviceAddress;
use crate::encoding::EncodedFrame;

/// Errors from a single write to a single device
///
/// These never stop playback; the engine logs them and moves on to the
/// next device.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TransportError {
    /// The slave did not acknowledge (absent or busy)
    #[error("no acknowledge from device")]
    NoAcknowledge,
    /// Bus-level fault (misplaced start/stop, lost arbitration)
    #[error("bus fault")]
    Bus,
    /// Transfer did not complete
    #[error("write timed out")]
    Timeout,
    /// Anything else reported by the driver
    #[error("write failed")]
    Other,
}

/// Trait for the shared bus the slaves hang off
///
/// One call writes one encoded value to one device. Calls are made
/// strictly in sequence, in configured address order.
pub trait BusTransport {
    /// Write `value` to the device at `address`
    fn send(&mut self, address: DeviceAddress, value: EncodedFrame) -> Result<(), TransportError>;
}

impl<T: BusTransport + ?Sized> BusTransport for &mut T {
    fn send(&mut self, address: DeviceAddress, value: EncodedFrame) -> Result<(), TransportError> {
        (**self).send(address, value)
    }
}
