//! Configuration types
//!
//! Board-agnostic configuration structures. Built once at startup and
//! passed by reference into the engine; never mutated afterwards.

pub mod hardware;
pub mod playback;

pub use hardware::*;
pub use playback::*;
