//! Bus transport implementations

pub mod i2c;
pub mod null;

pub use i2c::I2cTransport;
pub use null::NullTransport;
