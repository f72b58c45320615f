//! Duration strings in and out.
//!
//! Parsing accepts the general `<number><unit>` syntax (`1.5h`, `250ms`,
//! `1h30m`) and falls back to a lenient leading `<n>h<n>m<n>s` prefix
//! (`5min`, `1h30`). Formatting renders `HH:MM:SS` with optional
//! centiseconds.

use std::time::Duration;
use thiserror::Error;

/// Display and rounding granularity, matching the scheduler tick.
pub const TICK_INTERVAL: Duration = Duration::from_millis(10);

const NANOS_PER_MICRO: u128 = 1_000;
const NANOS_PER_MILLI: u128 = 1_000_000;
const NANOS_PER_SEC: u128 = 1_000_000_000;
const NANOS_PER_MIN: u128 = 60 * NANOS_PER_SEC;
const NANOS_PER_HOUR: u128 = 60 * NANOS_PER_MIN;

/// Errors produced by [`parse_duration`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DurationError {
    #[error("invalid duration format: {0}")]
    Invalid(String),

    #[error("duration must be greater than zero: {0}")]
    NotPositive(String),

    #[error("duration out of range: {0}")]
    OutOfRange(String),
}

/// Parses a countdown duration. Zero and negative results are rejected.
pub fn parse_duration(input: &str) -> Result<Duration, DurationError> {
    let s = input.trim();
    let s = s.strip_prefix("--").unwrap_or(s);

    let nanos = match parse_unit_sequence(s) {
        Ok(nanos) => nanos,
        Err(err @ DurationError::OutOfRange(_)) => return Err(err),
        Err(_) => parse_hms_prefix(s).ok_or_else(|| DurationError::Invalid(s.to_string()))?,
    };

    if nanos <= 0 {
        return Err(DurationError::NotPositive(s.to_string()));
    }

    let nanos = u64::try_from(nanos).map_err(|_| DurationError::OutOfRange(s.to_string()))?;
    Ok(Duration::from_nanos(nanos))
}

/// `[+-]?(<digits>[.<digits>]<unit>)+`, or the bare string `0`.
fn parse_unit_sequence(s: &str) -> Result<i128, DurationError> {
    let invalid = || DurationError::Invalid(s.to_string());

    let (negative, mut rest) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    if rest == "0" {
        return Ok(0);
    }
    if rest.is_empty() {
        return Err(invalid());
    }

    let mut total: u128 = 0;
    while !rest.is_empty() {
        let whole_len = rest.bytes().take_while(u8::is_ascii_digit).count();
        let (whole, after) = rest.split_at(whole_len);

        let (fraction, after) = match after.strip_prefix('.') {
            Some(after) => {
                let frac_len = after.bytes().take_while(u8::is_ascii_digit).count();
                after.split_at(frac_len)
            }
            None => ("", after),
        };
        if whole.is_empty() && fraction.is_empty() {
            return Err(invalid());
        }

        let unit_len = after
            .char_indices()
            .find(|(_, c)| *c == '.' || c.is_ascii_digit())
            .map(|(i, _)| i)
            .unwrap_or(after.len());
        let (unit, after) = after.split_at(unit_len);
        let scale = unit_nanos(unit).ok_or_else(invalid)?;

        let whole: u128 = if whole.is_empty() {
            0
        } else {
            whole
                .parse()
                .map_err(|_| DurationError::OutOfRange(s.to_string()))?
        };
        let mut value = whole
            .checked_mul(scale)
            .ok_or_else(|| DurationError::OutOfRange(s.to_string()))?;

        // Digits beyond nanosecond precision for the largest unit carry no weight.
        let fraction = &fraction[..fraction.len().min(20)];
        if !fraction.is_empty() {
            let digits: u128 = fraction.parse().map_err(|_| invalid())?;
            let divisor = 10u128.pow(fraction.len() as u32);
            value += digits * scale / divisor;
        }

        total = total
            .checked_add(value)
            .ok_or_else(|| DurationError::OutOfRange(s.to_string()))?;
        if total > u64::MAX as u128 {
            return Err(DurationError::OutOfRange(s.to_string()));
        }
        rest = after;
    }

    let total = total as i128;
    Ok(if negative { -total } else { total })
}

fn unit_nanos(unit: &str) -> Option<u128> {
    match unit {
        "ns" => Some(1),
        "us" | "µs" | "μs" => Some(NANOS_PER_MICRO),
        "ms" => Some(NANOS_PER_MILLI),
        "s" => Some(NANOS_PER_SEC),
        "m" => Some(NANOS_PER_MIN),
        "h" => Some(NANOS_PER_HOUR),
        _ => None,
    }
}

/// Leading `(<n>h)?(<n>m)?(<n>s)?`; anything after the match is ignored.
/// An empty match yields `None`.
fn parse_hms_prefix(s: &str) -> Option<i128> {
    let mut rest = s;
    let mut total: u128 = 0;

    for (suffix, scale) in [('h', NANOS_PER_HOUR), ('m', NANOS_PER_MIN), ('s', NANOS_PER_SEC)] {
        let digits = rest.bytes().take_while(u8::is_ascii_digit).count();
        if digits == 0 || rest[digits..].chars().next() != Some(suffix) {
            continue;
        }
        let n: u128 = rest[..digits].parse().ok()?;
        total = total.checked_add(n.checked_mul(scale)?)?;
        rest = &rest[digits + 1..];
    }

    if total == 0 {
        return None;
    }
    i128::try_from(total).ok()
}

/// Formats `d` as `HH:MM:SS`, or `HH:MM:SS.cc` when `centis` is set.
///
/// The value is first rounded to the nearest [`TICK_INTERVAL`]. Hours are
/// at least two digits wide and otherwise unbounded.
pub fn format_duration(d: Duration, centis: bool) -> String {
    let unit = TICK_INTERVAL.as_nanos();
    let ticks = (d.as_nanos() + unit / 2) / unit;

    let per_sec = NANOS_PER_SEC / unit;
    let hours = ticks / (per_sec * 3600);
    let minutes = ticks / (per_sec * 60) % 60;
    let seconds = ticks / per_sec % 60;
    let fraction = ticks % per_sec;

    if centis {
        format!("{hours:02}:{minutes:02}:{seconds:02}.{fraction:02}")
    } else {
        format!("{hours:02}:{minutes:02}:{seconds:02}")
    }
}
