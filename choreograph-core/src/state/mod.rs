//! State machine for playback
//!
//! Defines the reset protocol of the playback engine.
//! The state machine is explicit, finite, and deterministic.

pub mod events;
pub mod machine;

pub use events::Event;
pub use machine::State;
