//! I2C transport
//!
//! Each position goes out as one two-byte write transaction: high byte
//! then low byte, addressed to the slave.

use choreograph_core::config::DeviceAddress;
use choreograph_core::traits::{BusTransport, TransportError};
use choreograph_core::EncodedFrame;
use choreograph_hal::{I2cBus, I2cBusError};
use log::info;

/// Transport writing positions to an I2C bus
pub struct I2cTransport<B> {
    bus: B,
}

impl<B: I2cBus> I2cTransport<B> {
    /// Wrap an open bus
    pub fn new(bus: B) -> Self {
        Self { bus }
    }

    /// Give the bus back
    pub fn release(self) -> B {
        self.bus
    }
}

impl<B: I2cBus> BusTransport for I2cTransport<B> {
    fn send(&mut self, address: DeviceAddress, value: EncodedFrame) -> Result<(), TransportError> {
        info!("{} > {}", value, address);
        self.bus
            .write(address, &[value.high(), value.low()])
            .map_err(transport_error)
    }
}

fn transport_error(e: I2cBusError) -> TransportError {
    match e {
        I2cBusError::Nack => TransportError::NoAcknowledge,
        I2cBusError::Bus | I2cBusError::ArbitrationLost => TransportError::Bus,
        I2cBusError::Timeout => TransportError::Timeout,
        I2cBusError::Overrun | I2cBusError::Other => TransportError::Other,
    }
}
