use crate::ui::clock::{ClockEffect, ClockIntent, ClockReducer, TimerState};
use crate::ui::mvi::Reducer;

/// Generic MVI dispatch: takes current state, runs reducer, stores result,
/// yields the effect.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {{
        let (state, effect) = <$reducer>::reduce(std::mem::take(&mut $self.$field), $intent);
        $self.$field = state;
        effect
    }};
}

/// Sole owner of the clock state for the lifetime of the event loop.
pub struct App {
    should_quit: bool,
    clock: TimerState,
}

impl App {
    pub fn new(clock: TimerState) -> Self {
        Self {
            should_quit: false,
            clock,
        }
    }

    pub fn state(&self) -> &TimerState {
        &self.clock
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Runs one intent through the clock reducer.
    ///
    /// `Quit` is absorbed here; the remaining effects are returned for the
    /// runtime to perform.
    pub fn dispatch(&mut self, intent: ClockIntent) -> Option<ClockEffect> {
        let previous = self.clock.status;
        let effect = dispatch_mvi!(self, clock, ClockReducer, intent);

        if self.clock.status != previous {
            tracing::debug!(from = ?previous, to = ?self.clock.status, "Clock status changed");
        }

        match effect {
            Some(ClockEffect::Quit) => {
                self.should_quit = true;
                None
            }
            Some(ClockEffect::Bell) => {
                tracing::info!("Countdown finished");
                effect
            }
            other => other,
        }
    }
}
