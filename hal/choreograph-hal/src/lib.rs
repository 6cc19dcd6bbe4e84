//! Choreograph Hardware Abstraction Layer
//!
//! This crate defines the hardware traits the player needs from its host
//! board. Drivers in `choreograph-drivers` are written against these traits,
//! so the same playback code runs on a Raspberry Pi, on another Linux board,
//! or against mocks in tests.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  Application (choreograph-player)       │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  choreograph-drivers (transport, panic) │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  choreograph-hal (this crate - traits)  │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  choreograph-hal-linux                  │
//! └─────────────────────────────────────────┘
//! ```
//!
//! # Traits
//!
//! - [`gpio::InputPin`] - Digital input
//! - [`i2c::I2cBus`] - I2C bus writes

#![no_std]
#![deny(unsafe_code)]

pub mod gpio;
pub mod i2c;

// Re-export key traits at crate root for convenience
pub use gpio::InputPin;
pub use i2c::{I2cBus, I2cBusError};
