//! State for the clock screen.

use crate::config::ResetBehavior;
use crate::ui::mvi::UiState;
use std::time::{Duration, Instant};

/// Which way the clock counts. Fixed for the lifetime of the process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Counts up from zero, unbounded.
    #[default]
    Stopwatch,
    /// Counts down from a fixed target to zero.
    Countdown,
}

/// Run status of the clock.
///
/// `Finished` is only reachable in countdown mode and is left only through
/// a reset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Status {
    Running,
    #[default]
    Paused,
    Finished,
}

/// Size of the display area in terminal cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// Complete timing state of the clock screen.
///
/// `duration` is the elapsed time in stopwatch mode and the remaining time
/// in countdown mode. It only changes while `status == Running`.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TimerState {
    pub mode: Mode,
    pub status: Status,
    pub duration: Duration,
    /// Countdown target. Zero in stopwatch mode.
    pub target: Duration,
    /// Timestamp of the last processed tick. Always `Some` while running.
    pub last_tick: Option<Instant>,
    pub viewport: Viewport,
    pub reset_behavior: ResetBehavior,
}

impl UiState for TimerState {}

impl TimerState {
    /// Stopwatch at zero. When `running`, timing starts from `now`.
    pub fn stopwatch(running: bool, now: Instant) -> Self {
        if running {
            Self {
                status: Status::Running,
                last_tick: Some(now),
                ..Self::default()
            }
        } else {
            Self::default()
        }
    }

    /// Running countdown from `target`, starting at `now`.
    pub fn countdown(target: Duration, now: Instant) -> Self {
        Self {
            mode: Mode::Countdown,
            status: Status::Running,
            duration: target,
            target,
            last_tick: Some(now),
            ..Self::default()
        }
    }

    pub fn with_reset_behavior(mut self, reset_behavior: ResetBehavior) -> Self {
        self.reset_behavior = reset_behavior;
        self
    }

    pub fn is_running(&self) -> bool {
        self.status == Status::Running
    }

    pub fn is_finished(&self) -> bool {
        self.status == Status::Finished
    }

    /// Elapsed time in stopwatch mode. Zero for a countdown.
    pub fn elapsed(&self) -> Duration {
        match self.mode {
            Mode::Stopwatch => self.duration,
            Mode::Countdown => Duration::ZERO,
        }
    }

    /// Remaining time in countdown mode. Zero for a stopwatch.
    pub fn remaining(&self) -> Duration {
        match self.mode {
            Mode::Stopwatch => Duration::ZERO,
            Mode::Countdown => self.duration,
        }
    }

    /// Remaining time divided by target, clamped to `[0, 1]`.
    ///
    /// A zero target yields `0.0`.
    pub fn fraction_remaining(&self) -> f64 {
        if self.target.is_zero() {
            return 0.0;
        }
        (self.remaining().as_secs_f64() / self.target.as_secs_f64()).clamp(0.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_paused_stopwatch_at_zero() {
        let state = TimerState::default();
        assert_eq!(state.mode, Mode::Stopwatch);
        assert_eq!(state.status, Status::Paused);
        assert_eq!(state.duration, Duration::ZERO);
        assert!(state.last_tick.is_none());
    }

    #[test]
    fn running_stopwatch_records_start() {
        let now = Instant::now();
        let state = TimerState::stopwatch(true, now);
        assert!(state.is_running());
        assert_eq!(state.last_tick, Some(now));
    }

    #[test]
    fn countdown_starts_full() {
        let state = TimerState::countdown(Duration::from_secs(5), Instant::now());
        assert_eq!(state.remaining(), Duration::from_secs(5));
        assert_eq!(state.target, Duration::from_secs(5));
        assert_eq!(state.fraction_remaining(), 1.0);
    }

    #[test]
    fn elapsed_and_remaining_belong_to_their_mode() {
        let mut countdown = TimerState::countdown(Duration::from_secs(5), Instant::now());
        countdown.duration = Duration::from_secs(2);
        assert_eq!(countdown.elapsed(), Duration::ZERO);
        assert_eq!(countdown.remaining(), Duration::from_secs(2));

        let mut stopwatch = TimerState::default();
        stopwatch.duration = Duration::from_secs(7);
        assert_eq!(stopwatch.elapsed(), Duration::from_secs(7));
        assert_eq!(stopwatch.remaining(), Duration::ZERO);
    }

    #[test]
    fn fraction_guards_zero_target() {
        let mut state = TimerState::countdown(Duration::ZERO, Instant::now());
        state.duration = Duration::from_secs(3);
        assert_eq!(state.fraction_remaining(), 0.0);
        assert_eq!(TimerState::default().fraction_remaining(), 0.0);
    }
}
