//! Intents for the clock screen.

use crate::ui::mvi::Intent;
use std::time::Instant;

/// Events fed into the clock reducer, one at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClockIntent {
    /// Terminal resized. Timing is unaffected.
    Resize { width: u16, height: u16 },

    /// Pause a running clock or resume a paused one.
    /// `now` becomes the new tick reference when resuming.
    Toggle { now: Instant },

    /// Zero the clock (or restore the target, see `ResetBehavior`) and pause.
    Reset,

    /// Leave the application.
    Quit,

    /// Scheduler tick carrying the time it fired.
    Tick { at: Instant },
}

impl Intent for ClockIntent {}

/// Follow-up actions the host performs after a transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClockEffect {
    /// Arm the next scheduler tick.
    ScheduleTick,
    /// Countdown just reached zero: ring the terminal bell.
    Bell,
    /// Stop the event loop.
    Quit,
}
