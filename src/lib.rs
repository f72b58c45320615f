//! Terminal stopwatch and countdown timer.
//!
//! The only file the timer reads is an optional `config.toml` choosing what
//! `r` does to a countdown (see [`config`]). It is skipped when absent. A
//! file that exists but cannot be read or parsed stops startup with exit
//! code 1, like an invalid duration; `--reset-to` covers the same setting
//! without any file.

pub mod cli;
pub mod config;
pub mod duration;
pub mod logging;
pub mod shutdown;
pub mod ui;
