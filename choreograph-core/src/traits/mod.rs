//! Collaborator traits
//!
//! These traits define the interface between the playback engine and
//! everything that blocks or touches hardware.

pub mod clock;
pub mod panic;
pub mod transport;

pub use clock::Clock;
pub use panic::PanicMonitor;
pub use transport::{BusTransport, TransportError};
