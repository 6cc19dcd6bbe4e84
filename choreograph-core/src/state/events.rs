//! Events that trigger state transitions

/// Events that can trigger state transitions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// Panic input polled active at a tick boundary
    PanicDetected,
    /// A frame whose first entry is zero was just written
    ResetFrameSent,
    /// The settle pause after a reset has elapsed
    Settled,
}
