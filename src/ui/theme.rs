use ratatui::style::Color;

pub const STOPWATCH_ACCENT: Color = Color::Indexed(86);
pub const COUNTDOWN_PLENTY: Color = Color::Indexed(82);
pub const COUNTDOWN_HALF: Color = Color::Indexed(226);
pub const COUNTDOWN_LOW: Color = Color::Indexed(208);
pub const COUNTDOWN_FINISHED: Color = Color::Indexed(196);
pub const HELP_TEXT: Color = Color::Indexed(241);

/// Accent for a running or paused countdown, by fraction of time remaining.
pub fn countdown_accent(fraction_remaining: f64) -> Color {
    if fraction_remaining > 0.5 {
        COUNTDOWN_PLENTY
    } else if fraction_remaining > 0.2 {
        COUNTDOWN_HALF
    } else {
        COUNTDOWN_LOW
    }
}
