//! Playback engine
//!
//! Walks the timeline at a fixed clock period, polls the panic input
//! before every frame, writes frames through the bus transport, and runs
//! the settle protocol for panic and regular resets.

pub mod dispatch;
pub mod engine;

pub use dispatch::{broadcast_position, send_positions, DispatchReport};
pub use engine::{decide, PlaybackError, PlaybackStats, Player, TickAction, TickOutcome};
