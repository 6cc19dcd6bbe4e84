//! State machine definition
//!
//! Every tick starts in `Running`. Both reset states last exactly one
//! settle pause and always return to `Running`; there is no terminal
//! state.

use super::events::Event;

/// Playback states
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum State {
    /// Ticking through the timeline
    #[default]
    Running,
    /// Emergency stop: zero broadcast sent, settling, timeline will restart
    PanicReset,
    /// Reset frame from the choreography sent, settling, playback resumes
    RegularReset,
}

impl State {
    /// Process an event and return the next state
    ///
    /// This is the core state transition logic.
    pub fn transition(self, event: Event) -> Self {
        use Event::*;
        use State::*;

        match (self, event) {
            // Panic is checked before the scheduled frame is written
            (Running, PanicDetected) => PanicReset,
            (Running, ResetFrameSent) => RegularReset,

            // Settling
            (PanicReset, Settled) => Running,
            (RegularReset, Settled) => Running,

            // Default: stay in current state
            _ => self,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state_is_running() {
        assert_eq!(State::default(), State::Running);
    }

    #[test]
    fn test_panic_flow() {
        let state = State::Running;

        let panic = state.transition(Event::PanicDetected);
        assert_eq!(panic, State::PanicReset);

        let running = panic.transition(Event::Settled);
        assert_eq!(running, State::Running);
    }

    #[test]
    fn test_regular_reset_flow() {
        let state = State::Running;

        let reset = state.transition(Event::ResetFrameSent);
        assert_eq!(reset, State::RegularReset);

        let running = reset.transition(Event::Settled);
        assert_eq!(running, State::Running);
    }

    #[test]
    fn test_settling_ignores_other_events() {
        for state in [State::PanicReset, State::RegularReset] {
            assert_eq!(state.transition(Event::PanicDetected), state);
            assert_eq!(state.transition(Event::ResetFrameSent), state);
        }
    }

    #[test]
    fn test_settled_while_running_is_noop() {
        assert_eq!(State::Running.transition(Event::Settled), State::Running);
    }
}
