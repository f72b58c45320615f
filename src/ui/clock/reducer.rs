//! Reducer for the clock screen.

use crate::config::ResetBehavior;
use crate::ui::mvi::Reducer;
use std::time::Duration;

use super::intent::{ClockEffect, ClockIntent};
use super::state::{Mode, Status, TimerState, Viewport};

/// Clock state transitions.
///
/// Pure function: ringing the bell, arming the next tick and exiting are
/// returned as [`ClockEffect`]s and performed by the runtime.
pub struct ClockReducer;

impl Reducer for ClockReducer {
    type State = TimerState;
    type Intent = ClockIntent;
    type Effect = ClockEffect;

    fn reduce(state: Self::State, intent: Self::Intent) -> (Self::State, Option<Self::Effect>) {
        match intent {
            ClockIntent::Resize { width, height } => (
                TimerState {
                    viewport: Viewport::new(width, height),
                    ..state
                },
                None,
            ),

            ClockIntent::Toggle { now } => match state.status {
                Status::Finished => (state, None),
                Status::Running => (
                    TimerState {
                        status: Status::Paused,
                        ..state
                    },
                    None,
                ),
                Status::Paused => (
                    TimerState {
                        status: Status::Running,
                        last_tick: Some(now),
                        ..state
                    },
                    Some(ClockEffect::ScheduleTick),
                ),
            },

            ClockIntent::Reset => {
                let duration = match (state.mode, state.reset_behavior) {
                    (Mode::Countdown, ResetBehavior::Target) => state.target,
                    _ => Duration::ZERO,
                };
                (
                    TimerState {
                        status: Status::Paused,
                        duration,
                        ..state
                    },
                    None,
                )
            }

            ClockIntent::Quit => (state, Some(ClockEffect::Quit)),

            ClockIntent::Tick { at } => {
                if state.status != Status::Running {
                    let effect = (!state.is_finished()).then_some(ClockEffect::ScheduleTick);
                    return (state, effect);
                }

                let delta = state
                    .last_tick
                    .map(|last| at.saturating_duration_since(last))
                    .unwrap_or(Duration::ZERO);

                match state.mode {
                    Mode::Stopwatch => (
                        TimerState {
                            duration: state.duration.saturating_add(delta),
                            last_tick: Some(at),
                            ..state
                        },
                        Some(ClockEffect::ScheduleTick),
                    ),
                    Mode::Countdown => {
                        let remaining = state.duration.saturating_sub(delta);
                        if remaining.is_zero() {
                            (
                                TimerState {
                                    status: Status::Finished,
                                    duration: Duration::ZERO,
                                    last_tick: Some(at),
                                    ..state
                                },
                                Some(ClockEffect::Bell),
                            )
                        } else {
                            (
                                TimerState {
                                    duration: remaining,
                                    last_tick: Some(at),
                                    ..state
                                },
                                Some(ClockEffect::ScheduleTick),
                            )
                        }
                    }
                }
            }
        }
    }
}
