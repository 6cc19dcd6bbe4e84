//! Playback engine
//!
//! One tick per frame:
//!
//! 1. sleep one clock period
//! 2. poll the panic input; if active, write an all-zero frame, sleep the
//!    settle duration and restart the timeline from frame 0
//! 3. otherwise write the scheduled frame
//! 4. if that frame is a reset frame, sleep the settle duration and carry
//!    on with the next frame
//! 5. advance, wrapping to frame 0 after the last one
//!
//! The panic path throws the current pass away; a regular reset is a pause
//! point authored into the choreography and playback resumes in sequence.

use log::{debug, info, warn};
use thiserror::Error;

use super::dispatch::{send_positions, DispatchReport};
use crate::config::{ConfigError, PlaybackConfig};
use crate::encoding::EncodedFrame;
use crate::state::{Event, State};
use crate::timeline::{Frame, Timeline};
use crate::traits::{BusTransport, Clock, PanicMonitor};

/// Errors building a player
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PlaybackError {
    /// The playback configuration is invalid
    #[error(transparent)]
    Config(#[from] ConfigError),
    /// Timeline frames are not as wide as the device list
    #[error("timeline has {timeline} columns but {configured} devices are configured")]
    DeviceCountMismatch { timeline: usize, configured: usize },
}

/// What a tick should do, decided before any I/O
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickAction {
    /// Abandon the scheduled frame and run the panic reset
    PanicReset,
    /// Write the scheduled frame, then settle if it is a reset frame
    Play { reset_after: bool },
}

/// Decide what to do with the scheduled frame
///
/// Panic always wins: a reset frame scheduled on a panicking tick is not
/// written.
pub fn decide(panic_active: bool, frame: &Frame) -> TickAction {
    if panic_active {
        TickAction::PanicReset
    } else {
        TickAction::Play {
            reset_after: frame.is_reset_frame(),
        }
    }
}

/// Result of one tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Frame `index` was written
    Played { index: usize, report: DispatchReport },
    /// Reset frame `index` was written and the settle pause elapsed
    RegularReset { index: usize, report: DispatchReport },
    /// Panic at the tick scheduled for frame `interrupted`; zeros were
    /// broadcast, the settle pause elapsed, and playback restarts at 0
    PanicReset {
        interrupted: usize,
        report: DispatchReport,
    },
}

impl TickOutcome {
    /// Dispatch report of the frame written this tick
    pub fn report(&self) -> &DispatchReport {
        match self {
            TickOutcome::Played { report, .. }
            | TickOutcome::RegularReset { report, .. }
            | TickOutcome::PanicReset { report, .. } => report,
        }
    }
}

/// Running counters, kept for logging and diagnostics
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PlaybackStats {
    /// Ticks executed
    pub ticks: u64,
    /// Complete passes through the timeline
    pub passes: u64,
    /// Panic resets performed
    pub panic_resets: u64,
    /// Regular resets performed
    pub regular_resets: u64,
    /// Successful writes
    pub writes_sent: u64,
    /// Writes skipped for the middle position
    pub writes_skipped: u64,
    /// Failed writes
    pub writes_failed: u64,
}

impl PlaybackStats {
    fn record(&mut self, report: &DispatchReport) {
        self.writes_sent += report.sent as u64;
        self.writes_skipped += report.skipped as u64;
        self.writes_failed += report.failed as u64;
    }
}

/// Timeline player
///
/// Owns the timeline and all collaborators for the lifetime of the
/// session. The bus is written from this one thread only.
pub struct Player<T, P, C> {
    config: PlaybackConfig,
    timeline: Timeline,
    transport: T,
    panic: P,
    clock: C,
    /// Current state; only differs from `Running` during a settle pause
    state: State,
    /// Index of the frame the next tick will play
    cursor: usize,
    /// Broadcast on panic
    zero_frame: Frame,
    middle: EncodedFrame,
    stats: PlaybackStats,
}

impl<T, P, C> Player<T, P, C>
where
    T: BusTransport,
    P: PanicMonitor,
    C: Clock,
{
    /// Create a player
    ///
    /// Fails if the configuration is invalid or the timeline width does
    /// not match the device list.
    pub fn new(
        config: PlaybackConfig,
        timeline: Timeline,
        transport: T,
        panic: P,
        clock: C,
    ) -> Result<Self, PlaybackError> {
        config.validate()?;

        if timeline.device_count() != config.device_count() {
            return Err(PlaybackError::DeviceCountMismatch {
                timeline: timeline.device_count(),
                configured: config.device_count(),
            });
        }

        Ok(Self {
            zero_frame: Frame::broadcast(0, config.device_count()),
            middle: config.middle_encoded(),
            config,
            timeline,
            transport,
            panic,
            clock,
            state: State::Running,
            cursor: 0,
            stats: PlaybackStats::default(),
        })
    }

    /// Get current state
    pub fn state(&self) -> State {
        self.state
    }

    /// Index of the frame the next tick will play
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Get running counters
    pub fn stats(&self) -> &PlaybackStats {
        &self.stats
    }

    /// Get the configuration
    pub fn config(&self) -> &PlaybackConfig {
        &self.config
    }

    /// Get the timeline
    pub fn timeline(&self) -> &Timeline {
        &self.timeline
    }

    /// Get the bus transport
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Get the clock
    pub fn clock(&self) -> &C {
        &self.clock
    }

    /// Play forever
    pub fn run(&mut self) -> ! {
        info!(
            "Starting playback: {} frames ({} reset frames), {} devices, {} ms period",
            self.timeline.len(),
            self.timeline.reset_frame_count(),
            self.config.device_count(),
            self.config.clock_period_ms
        );

        loop {
            self.tick();
        }
    }

    /// Execute one tick
    pub fn tick(&mut self) -> TickOutcome {
        self.clock.sleep(self.config.clock_period());
        self.stats.ticks += 1;

        let index = self.cursor;
        let panic_active = self.panic.is_panic_active();

        match decide(panic_active, &self.timeline.frames()[index]) {
            TickAction::PanicReset => self.panic_reset(index),
            TickAction::Play { reset_after } => self.play(index, reset_after),
        }
    }

    fn play(&mut self, index: usize, reset_after: bool) -> TickOutcome {
        let frame = &self.timeline.frames()[index];
        debug!("{:>6} |{}", index, frame);

        let report = send_positions(&mut self.transport, &self.config.devices, frame, self.middle);
        self.stats.record(&report);

        let outcome = if reset_after {
            self.state = self.state.transition(Event::ResetFrameSent);
            info!("Reset (regular) at frame {}", index);
            self.settle();
            self.stats.regular_resets += 1;
            TickOutcome::RegularReset { index, report }
        } else {
            TickOutcome::Played { index, report }
        };

        self.advance();
        outcome
    }

    fn panic_reset(&mut self, interrupted: usize) -> TickOutcome {
        self.state = self.state.transition(Event::PanicDetected);
        warn!("Reset (panic) at frame {}", interrupted);

        let report = send_positions(
            &mut self.transport,
            &self.config.devices,
            &self.zero_frame,
            self.middle,
        );
        self.stats.record(&report);
        self.stats.panic_resets += 1;

        self.settle();
        self.cursor = 0;

        TickOutcome::PanicReset {
            interrupted,
            report,
        }
    }

    fn settle(&mut self) {
        self.clock.sleep(self.config.reset_settle());
        self.state = self.state.transition(Event::Settled);
    }

    fn advance(&mut self) {
        self.cursor += 1;
        if self.cursor >= self.timeline.len() {
            self.cursor = 0;
            self.stats.passes += 1;
            debug!(
                "Timeline pass {} complete ({} writes failed so far)",
                self.stats.passes, self.stats.writes_failed
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DeviceAddress;
    use crate::encoding::Position;
    use crate::traits::TransportError;
    use alloc::collections::VecDeque;
    use alloc::vec;
    use alloc::vec::Vec;
    use core::time::Duration;

    const PERIOD: Duration = Duration::from_millis(60);
    const SETTLE: Duration = Duration::from_millis(15_000);

    #[derive(Default)]
    struct MockBus {
        writes: Vec<(DeviceAddress, EncodedFrame)>,
        failing: Vec<DeviceAddress>,
    }

    impl BusTransport for MockBus {
        fn send(
            &mut self,
            address: DeviceAddress,
            value: EncodedFrame,
        ) -> Result<(), TransportError> {
            self.writes.push((address, value));
            if self.failing.contains(&address) {
                Err(TransportError::NoAcknowledge)
            } else {
                Ok(())
            }
        }
    }

    /// Panic input replaying a script, then staying clear
    struct ScriptedPanic(VecDeque<bool>);

    impl ScriptedPanic {
        fn never() -> Self {
            Self(VecDeque::new())
        }

        fn script(ticks: &[bool]) -> Self {
            Self(ticks.iter().copied().collect())
        }
    }

    impl PanicMonitor for ScriptedPanic {
        fn is_panic_active(&mut self) -> bool {
            self.0.pop_front().unwrap_or(false)
        }
    }

    #[derive(Default)]
    struct MockClock {
        sleeps: Vec<Duration>,
    }

    impl Clock for MockClock {
        fn sleep(&mut self, duration: Duration) {
            self.sleeps.push(duration);
        }
    }

    fn frame(positions: &[Position]) -> Frame {
        Frame::new(positions.iter().map(|&p| EncodedFrame::from_position(p)).collect())
    }

    fn make_player(
        rows: &[&[Position]],
        panic: ScriptedPanic,
    ) -> Player<MockBus, ScriptedPanic, MockClock> {
        let devices: Vec<DeviceAddress> = (1..=rows[0].len() as u8).collect();
        let config = PlaybackConfig::default().with_devices(&devices).unwrap();
        let timeline = Timeline::from_frames(rows.iter().map(|r| frame(r)).collect()).unwrap();
        Player::new(config, timeline, MockBus::default(), panic, MockClock::default()).unwrap()
    }

    fn index_of(outcome: &TickOutcome) -> usize {
        match *outcome {
            TickOutcome::Played { index, .. } | TickOutcome::RegularReset { index, .. } => index,
            TickOutcome::PanicReset { interrupted, .. } => interrupted,
        }
    }

    #[test]
    fn test_decide() {
        let normal = frame(&[10, 20]);
        let reset = frame(&[0, 20]);

        assert_eq!(decide(false, &normal), TickAction::Play { reset_after: false });
        assert_eq!(decide(false, &reset), TickAction::Play { reset_after: true });
        assert_eq!(decide(true, &normal), TickAction::PanicReset);
        assert_eq!(decide(true, &reset), TickAction::PanicReset);
    }

    #[test]
    fn test_frames_in_order_and_wrap() {
        let mut player = make_player(&[&[10, 11], &[20, 21], &[30, 31]], ScriptedPanic::never());

        let visited: Vec<usize> = (0..7).map(|_| index_of(&player.tick())).collect();

        assert_eq!(visited, vec![0, 1, 2, 0, 1, 2, 0]);
        assert_eq!(player.stats().passes, 2);
        assert_eq!(player.stats().ticks, 7);
        assert_eq!(player.cursor(), 1);
        assert_eq!(player.clock().sleeps, vec![PERIOD; 7]);
    }

    #[test]
    fn test_sleep_precedes_write() {
        let mut player = make_player(&[&[10]], ScriptedPanic::never());
        player.tick();

        assert_eq!(player.clock().sleeps, vec![PERIOD]);
        assert_eq!(player.transport().writes.len(), 1);
    }

    #[test]
    fn test_panic_restarts_from_first_frame() {
        let mut player = make_player(
            &[&[10, 11], &[20, 21], &[30, 31]],
            ScriptedPanic::script(&[false, false, true]),
        );

        assert_eq!(index_of(&player.tick()), 0);
        assert_eq!(index_of(&player.tick()), 1);

        let outcome = player.tick();
        assert!(matches!(
            outcome,
            TickOutcome::PanicReset { interrupted: 2, .. }
        ));
        assert_eq!(player.state(), State::Running);
        assert_eq!(player.cursor(), 0);

        // Frame 2 was never written; zeros went to every device instead
        let writes = &player.transport().writes;
        assert_eq!(writes.len(), 6);
        assert_eq!(
            &writes[4..],
            &[(1, EncodedFrame::ZERO), (2, EncodedFrame::ZERO)]
        );

        assert_eq!(player.clock().sleeps, vec![PERIOD, PERIOD, PERIOD, SETTLE]);

        // Next tick starts over
        assert_eq!(index_of(&player.tick()), 0);
        assert_eq!(player.stats().panic_resets, 1);
        assert_eq!(player.stats().passes, 0);
    }

    #[test]
    fn test_panic_skips_scheduled_reset_frame() {
        let mut player = make_player(&[&[0, 5], &[10, 11]], ScriptedPanic::script(&[true]));

        let outcome = player.tick();

        assert!(matches!(
            outcome,
            TickOutcome::PanicReset { interrupted: 0, .. }
        ));
        assert_eq!(player.stats().regular_resets, 0);
        // One settle pause, not two
        assert_eq!(player.clock().sleeps, vec![PERIOD, SETTLE]);
    }

    #[test]
    fn test_regular_reset_continues_in_sequence() {
        let mut player = make_player(
            &[&[10, 11], &[0, 21], &[30, 31]],
            ScriptedPanic::never(),
        );

        assert!(matches!(player.tick(), TickOutcome::Played { index: 0, .. }));
        assert!(matches!(
            player.tick(),
            TickOutcome::RegularReset { index: 1, .. }
        ));
        assert_eq!(player.state(), State::Running);
        assert!(matches!(player.tick(), TickOutcome::Played { index: 2, .. }));

        assert_eq!(player.clock().sleeps, vec![PERIOD, PERIOD, SETTLE, PERIOD]);
        assert_eq!(player.stats().regular_resets, 1);

        // The reset frame itself was written
        assert_eq!(
            &player.transport().writes[2..4],
            &[
                (1, EncodedFrame::ZERO),
                (2, EncodedFrame::from_position(21))
            ]
        );
    }

    #[test]
    fn test_reset_frame_as_last_frame_wraps() {
        let mut player = make_player(&[&[10], &[0]], ScriptedPanic::never());

        player.tick();
        assert!(matches!(
            player.tick(),
            TickOutcome::RegularReset { index: 1, .. }
        ));
        assert_eq!(player.cursor(), 0);
        assert_eq!(player.stats().passes, 1);
    }

    #[test]
    fn test_failing_device_isolated() {
        let mut player = make_player(&[&[10, 20, 30]], ScriptedPanic::never());
        player.transport.failing = vec![2];

        let outcome = player.tick();

        assert_eq!(outcome.report().sent, 2);
        assert_eq!(outcome.report().failed, 1);
        let addresses: Vec<_> = player.transport().writes.iter().map(|(a, _)| *a).collect();
        assert_eq!(addresses, vec![1, 2, 3]);
        assert_eq!(player.stats().writes_failed, 1);

        // Playback keeps going
        player.tick();
        assert_eq!(player.stats().ticks, 2);
    }

    #[test]
    fn test_middle_position_not_written() {
        let mut player = make_player(&[&[4000, 10, 4000]], ScriptedPanic::never());

        let outcome = player.tick();

        assert_eq!(outcome.report().skipped, 2);
        assert_eq!(
            player.transport().writes,
            vec![(2, EncodedFrame::from_position(10))]
        );
        assert_eq!(player.stats().writes_skipped, 2);
    }

    #[test]
    fn test_rejects_width_mismatch() {
        let config = PlaybackConfig::default().with_devices(&[1, 2, 3]).unwrap();
        let timeline = Timeline::parse("1;2\n", 2).unwrap();

        let result = Player::new(
            config,
            timeline,
            MockBus::default(),
            ScriptedPanic::never(),
            MockClock::default(),
        );

        assert!(matches!(
            result,
            Err(PlaybackError::DeviceCountMismatch {
                timeline: 2,
                configured: 3
            })
        ));
    }

    #[test]
    fn test_rejects_invalid_config() {
        let config = PlaybackConfig {
            clock_period_ms: 0,
            ..PlaybackConfig::default()
        };
        let timeline = Timeline::from_frames(vec![Frame::broadcast(1, 24)]).unwrap();

        let result = Player::new(
            config,
            timeline,
            MockBus::default(),
            ScriptedPanic::never(),
            MockClock::default(),
        );

        assert!(matches!(
            result,
            Err(PlaybackError::Config(ConfigError::ZeroClockPeriod))
        ));
    }
}
