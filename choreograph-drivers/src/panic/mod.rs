//! Panic input implementations

pub mod button;

pub use button::{NoPanicInput, PanicButton};
