use crate::ui::clock::ClockIntent;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::time::Instant;

/// Maps a key press to a clock intent. `now` stamps toggles.
///
/// Release and repeat events, and unbound keys, map to `None`.
pub fn key_to_intent(key: KeyEvent, now: Instant) -> Option<ClockIntent> {
    if key.kind != KeyEventKind::Press {
        return None;
    }

    if is_ctrl_char(key, 'c') {
        return Some(ClockIntent::Quit);
    }

    match key.code {
        KeyCode::Char(' ') => Some(ClockIntent::Toggle { now }),
        KeyCode::Char('r') => Some(ClockIntent::Reset),
        KeyCode::Char('q') | KeyCode::Esc => Some(ClockIntent::Quit),
        _ => None,
    }
}

fn is_ctrl_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && key.modifiers.contains(KeyModifiers::CONTROL)
}
