//! Shared test utilities.

#![allow(dead_code, unused_imports)]

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::widgets::Widget;
use std::time::{Duration, Instant};
use termtimer::ui::clock::{ClockEffect, ClockIntent, ClockReducer, TimerState};
use termtimer::ui::mvi::Reducer;
use termtimer::ui::render::ClockWidget;
use termtimer::ui::view::ClockView;

pub fn secs(n: u64) -> Duration {
    Duration::from_secs(n)
}

pub fn millis(n: u64) -> Duration {
    Duration::from_millis(n)
}

/// Feed ticks at the given offsets from `start`.
///
/// Returns the final state and how many times the bell was requested.
pub fn tick_at(mut state: TimerState, start: Instant, offsets: &[Duration]) -> (TimerState, usize) {
    let mut bells = 0;
    for offset in offsets {
        let (next, effect) = ClockReducer::reduce(state, ClockIntent::Tick { at: start + *offset });
        if effect == Some(ClockEffect::Bell) {
            bells += 1;
        }
        state = next;
    }
    (state, bells)
}

/// Render the clock for `state` into a fresh buffer of `width` x `height`.
pub fn render(state: &TimerState, width: u16, height: u16) -> Buffer {
    let area = Rect::new(0, 0, width, height);
    let mut buf = Buffer::empty(area);
    let view = ClockView::from_state(state);
    ClockWidget::new(&view).render(area, &mut buf);
    buf
}

/// Buffer rows as plain strings.
pub fn rows(buf: &Buffer) -> Vec<String> {
    let area = buf.area;
    (area.top()..area.bottom())
        .map(|y| {
            (area.left()..area.right())
                .map(|x| buf[(x, y)].symbol())
                .collect::<String>()
        })
        .collect()
}

pub fn screen_text(buf: &Buffer) -> String {
    rows(buf).join("\n")
}
