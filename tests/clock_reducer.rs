//! Tests for the clock engine's timing properties.

mod common;

use common::*;
use std::time::{Duration, Instant};
use termtimer::config::ResetBehavior;
use termtimer::ui::clock::{ClockEffect, ClockIntent, ClockReducer, Mode, Status, TimerState};
use termtimer::ui::mvi::Reducer;

// -- Stopwatch ----------------------------------------------------------------

#[test]
fn stopwatch_accumulates_every_delta() {
    let start = Instant::now();
    let state = TimerState::stopwatch(true, start);
    let (state, bells) = tick_at(state, start, &[millis(10), millis(25), millis(1_000)]);
    assert_eq!(state.elapsed(), millis(1_000));
    assert_eq!(state.status, Status::Running);
    assert_eq!(bells, 0);
}

#[test]
fn stopwatch_is_monotone() {
    let start = Instant::now();
    let mut state = TimerState::stopwatch(true, start);
    let mut previous = Duration::ZERO;
    for step in 1..=50u64 {
        let (next, effect) = ClockReducer::reduce(
            state,
            ClockIntent::Tick {
                at: start + millis(step * 7),
            },
        );
        assert!(next.elapsed() >= previous);
        assert_eq!(effect, Some(ClockEffect::ScheduleTick));
        previous = next.elapsed();
        state = next;
    }
    assert_eq!(state.elapsed(), millis(350));
}

#[test]
fn stopwatch_never_finishes() {
    let start = Instant::now();
    let state = TimerState::stopwatch(true, start);
    let (state, bells) = tick_at(state, start, &[secs(100 * 3600)]);
    assert_eq!(state.status, Status::Running);
    assert_eq!(bells, 0);
}

#[test]
fn paused_stopwatch_ignores_ticks() {
    let start = Instant::now();
    let (state, _) = tick_at(TimerState::default(), start, &[secs(1), secs(2)]);
    assert_eq!(state.elapsed(), Duration::ZERO);
    assert_eq!(state.status, Status::Paused);
}

// -- Countdown ----------------------------------------------------------------

#[test]
fn countdown_subtracts_delta() {
    let start = Instant::now();
    let state = TimerState::countdown(secs(5), start);
    let (state, bells) = tick_at(state, start, &[secs(1), secs(3)]);
    assert_eq!(state.remaining(), secs(2));
    assert_eq!(state.status, Status::Running);
    assert_eq!(bells, 0);
}

#[test]
fn countdown_finishes_exactly_at_zero() {
    let start = Instant::now();
    let state = TimerState::countdown(secs(5), start);
    let (state, effect) = ClockReducer::reduce(state, ClockIntent::Tick { at: start + secs(5) });
    assert_eq!(state.remaining(), Duration::ZERO);
    assert_eq!(state.status, Status::Finished);
    assert_eq!(effect, Some(ClockEffect::Bell));
}

#[test]
fn countdown_clamps_overshoot() {
    let start = Instant::now();
    let state = TimerState::countdown(secs(5), start);
    let (state, bells) = tick_at(state, start, &[secs(3), secs(9)]);
    assert_eq!(state.remaining(), Duration::ZERO);
    assert_eq!(state.status, Status::Finished);
    assert_eq!(bells, 1);
}

#[test]
fn bell_rings_once_while_finished() {
    let start = Instant::now();
    let state = TimerState::countdown(secs(5), start);
    let (state, bells) = tick_at(state, start, &[secs(3), secs(6), secs(7), secs(8), secs(60)]);
    assert_eq!(state.status, Status::Finished);
    assert_eq!(bells, 1);
}

#[test]
fn finishing_tick_stops_the_tick_chain() {
    let start = Instant::now();
    let state = TimerState::countdown(secs(1), start);
    let (state, effect) = ClockReducer::reduce(state, ClockIntent::Tick { at: start + secs(2) });
    assert_eq!(effect, Some(ClockEffect::Bell));
    let (_, effect) = ClockReducer::reduce(state, ClockIntent::Tick { at: start + secs(3) });
    assert!(effect.is_none());
}

// -- Toggle -------------------------------------------------------------------

#[test]
fn paused_time_does_not_accrue() {
    let start = Instant::now();
    let state = TimerState::stopwatch(true, start);
    let (state, _) = tick_at(state, start, &[secs(2)]);

    let (state, _) = ClockReducer::reduce(state, ClockIntent::Toggle { now: start + secs(2) });
    assert_eq!(state.status, Status::Paused);

    // Ten minutes pass while paused.
    let (state, _) = tick_at(state, start, &[secs(300), secs(600)]);
    let (state, effect) =
        ClockReducer::reduce(state, ClockIntent::Toggle { now: start + secs(602) });
    assert_eq!(state.status, Status::Running);
    assert_eq!(state.last_tick, Some(start + secs(602)));
    assert_eq!(effect, Some(ClockEffect::ScheduleTick));

    let (state, _) = tick_at(state, start, &[secs(603)]);
    assert_eq!(state.elapsed(), secs(3));
}

#[test]
fn countdown_pause_keeps_remaining() {
    let start = Instant::now();
    let state = TimerState::countdown(secs(10), start);
    let (state, _) = tick_at(state, start, &[secs(4)]);
    let (state, _) = ClockReducer::reduce(state, ClockIntent::Toggle { now: start + secs(4) });
    let (state, _) = tick_at(state, start, &[secs(20)]);
    assert_eq!(state.remaining(), secs(6));
    assert_eq!(state.status, Status::Paused);
}

// -- Reset --------------------------------------------------------------------

#[test]
fn reset_always_pauses_at_zero() {
    let start = Instant::now();
    let running_stopwatch = tick_at(TimerState::stopwatch(true, start), start, &[secs(4)]).0;
    let paused_stopwatch = TimerState::default();
    let running_countdown = tick_at(TimerState::countdown(secs(9), start), start, &[secs(4)]).0;
    let finished_countdown = tick_at(TimerState::countdown(secs(1), start), start, &[secs(4)]).0;
    assert_eq!(finished_countdown.status, Status::Finished);

    for state in [
        running_stopwatch,
        paused_stopwatch,
        running_countdown,
        finished_countdown,
    ] {
        let mode = state.mode;
        let (state, effect) = ClockReducer::reduce(state, ClockIntent::Reset);
        assert_eq!(state.status, Status::Paused, "{mode:?}");
        assert_eq!(state.duration, Duration::ZERO, "{mode:?}");
        assert!(effect.is_none());
    }
}

#[test]
fn finished_reset_then_toggle_restarts_ticks() {
    let start = Instant::now();
    let state = TimerState::countdown(secs(1), start).with_reset_behavior(ResetBehavior::Target);
    let (state, _) = tick_at(state, start, &[secs(2)]);
    assert!(state.is_finished());

    let (state, _) = ClockReducer::reduce(state, ClockIntent::Reset);
    assert_eq!(state.remaining(), secs(1));

    let (state, effect) = ClockReducer::reduce(state, ClockIntent::Toggle { now: start + secs(5) });
    assert_eq!(state.status, Status::Running);
    assert_eq!(effect, Some(ClockEffect::ScheduleTick));

    let (state, bells) = tick_at(state, start, &[millis(5_500), secs(6)]);
    assert!(state.is_finished());
    assert_eq!(bells, 1);
}

// -- Quit ---------------------------------------------------------------------

#[test]
fn quit_from_every_status() {
    let start = Instant::now();
    let finished = tick_at(TimerState::countdown(secs(1), start), start, &[secs(2)]).0;
    for state in [
        TimerState::stopwatch(true, start),
        TimerState::default(),
        finished,
    ] {
        let (after, effect) = ClockReducer::reduce(state.clone(), ClockIntent::Quit);
        assert_eq!(after, state);
        assert_eq!(effect, Some(ClockEffect::Quit));
    }
}

#[test]
fn mode_is_never_changed() {
    let start = Instant::now();
    let mut state = TimerState::countdown(secs(3), start);
    for intent in [
        ClockIntent::Tick { at: start + secs(1) },
        ClockIntent::Toggle { now: start + secs(1) },
        ClockIntent::Reset,
        ClockIntent::Resize {
            width: 10,
            height: 10,
        },
        ClockIntent::Quit,
    ] {
        state = ClockReducer::reduce(state, intent).0;
        assert_eq!(state.mode, Mode::Countdown);
    }
}
