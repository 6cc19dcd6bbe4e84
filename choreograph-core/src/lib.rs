//! Board-agnostic core logic for the choreography player
//!
//! This crate contains all application logic that does not depend on
//! specific hardware implementations:
//!
//! - Position encoding (two bytes, big-endian)
//! - Choreography loading into an immutable timeline
//! - Collaborator traits (bus transport, panic monitor, clock)
//! - State machine for panic and regular resets
//! - Playback engine and single-value broadcast
//! - Configuration type definitions

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

extern crate alloc;

pub mod config;
pub mod encoding;
pub mod playback;
pub mod state;
pub mod timeline;
pub mod traits;

pub use encoding::{EncodedFrame, Position};
pub use timeline::{Frame, LoadError, Timeline};
