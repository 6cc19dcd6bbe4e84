//! Hardware driver implementations
//!
//! This crate provides concrete implementations of the traits defined
//! in choreograph-core, built on the board traits of choreograph-hal:
//!
//! - Bus transports (I2C master, dry-run null transport)
//! - Panic inputs (GPIO switch, always-clear stand-in)

#![no_std]
#![deny(unsafe_code)]

pub mod panic;
pub mod transport;

pub use panic::{NoPanicInput, PanicButton};
pub use transport::{I2cTransport, NullTransport};
