//! View model for the clock screen.
//!
//! Pure mapping from [`TimerState`] to the labels, time text, progress bar
//! and accent color of a frame. Drawing lives in `render.rs`.

use crate::duration::format_duration;
use crate::ui::clock::{Mode, Status, TimerState};
use crate::ui::theme::{countdown_accent, COUNTDOWN_FINISHED, STOPWATCH_ACCENT};
use ratatui::style::Color;

pub const BAR_WIDTH: usize = 40;
pub const BAR_FILLED: char = '█';
pub const BAR_EMPTY: char = '░';

pub const STOPWATCH_TITLE: &str = "STOPWATCH";
pub const COUNTDOWN_TITLE: &str = "COUNTDOWN TIMER";
pub const RUNNING_LABEL: &str = "▶ RUNNING";
pub const PAUSED_LABEL: &str = "⏸ PAUSED";
pub const FINISHED_LABEL: &str = "🔔 TIME'S UP!";
pub const HELP_LINE: &str = "space: pause/resume • r: reset • q: quit";

/// Everything a frame shows, already formatted.
#[derive(Debug, Clone, PartialEq)]
pub struct ClockView {
    pub title: &'static str,
    pub status: &'static str,
    pub time: String,
    /// Countdown only.
    pub progress: Option<ProgressView>,
    pub accent: Color,
    pub help: &'static str,
}

impl ClockView {
    pub fn from_state(state: &TimerState) -> Self {
        match state.mode {
            Mode::Stopwatch => Self {
                title: STOPWATCH_TITLE,
                status: if state.is_running() {
                    RUNNING_LABEL
                } else {
                    PAUSED_LABEL
                },
                time: format_duration(state.elapsed(), true),
                progress: None,
                accent: STOPWATCH_ACCENT,
                help: HELP_LINE,
            },
            Mode::Countdown => {
                let fraction = state.fraction_remaining();
                let (status, accent) = match state.status {
                    Status::Finished => (FINISHED_LABEL, COUNTDOWN_FINISHED),
                    Status::Running => (RUNNING_LABEL, countdown_accent(fraction)),
                    Status::Paused => (PAUSED_LABEL, countdown_accent(fraction)),
                };
                Self {
                    title: COUNTDOWN_TITLE,
                    status,
                    time: format_duration(state.remaining(), false),
                    progress: Some(ProgressView::new(fraction, BAR_WIDTH)),
                    accent,
                    help: HELP_LINE,
                }
            }
        }
    }
}

/// Fixed-width progress bar with a percentage label.
#[derive(Debug, Clone, PartialEq)]
pub struct ProgressView {
    pub filled: usize,
    pub width: usize,
    pub percent: String,
}

impl ProgressView {
    /// `fraction` outside `[0, 1]` is clamped.
    pub fn new(fraction: f64, width: usize) -> Self {
        let fraction = if fraction.is_nan() {
            0.0
        } else {
            fraction.clamp(0.0, 1.0)
        };
        let filled = ((fraction * width as f64).floor() as usize).min(width);
        Self {
            filled,
            width,
            percent: format!("{:.0}%", fraction * 100.0),
        }
    }

    pub fn bar(&self) -> String {
        let mut bar = String::with_capacity(self.width * BAR_FILLED.len_utf8());
        bar.extend(std::iter::repeat(BAR_FILLED).take(self.filled));
        bar.extend(std::iter::repeat(BAR_EMPTY).take(self.width - self.filled));
        bar
    }

    /// Bar followed by the percentage, e.g. `██░░ 50%`.
    pub fn line(&self) -> String {
        format!("{} {}", self.bar(), self.percent)
    }
}
