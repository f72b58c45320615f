//! Command-line surface.

use crate::config::{Config, ResetBehavior};
use crate::duration::{parse_duration, DurationError};
use crate::ui::clock::TimerState;
use clap::Parser;
use std::ffi::OsString;
use std::path::PathBuf;
use std::time::{Duration, Instant};

/// Usage summary printed after an invalid duration.
pub const USAGE: &str = "\
Usage:
  timer                 Start in interactive mode
  timer --stopwatch     Start stopwatch
  timer --start         Start stopwatch (alias)
  timer 5m              Start 5-minute countdown
  timer 1h30m           Start 1h30m countdown
  timer 90s             Start 90-second countdown";

#[derive(Debug, Parser)]
#[command(name = "timer", version, about = "Terminal stopwatch and countdown timer")]
pub struct Cli {
    /// Start the stopwatch immediately
    #[arg(short = 's', long = "stopwatch", visible_alias = "start")]
    pub stopwatch: bool,

    /// Countdown length, e.g. 5m, 1h30m, 90s, 1.5h
    #[arg(
        value_name = "DURATION",
        allow_hyphen_values = true,
        conflicts_with = "stopwatch"
    )]
    pub duration: Option<String>,

    /// What `r` does to a countdown (overrides the config file)
    #[arg(long, value_enum, value_name = "MODE")]
    pub reset_to: Option<ResetBehavior>,

    /// Read configuration from PATH instead of the default location
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,
}

/// How the clock starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Launch {
    /// No arguments: paused stopwatch.
    Interactive,
    /// `--stopwatch`: running stopwatch.
    Stopwatch,
    /// Duration argument: running countdown.
    Countdown(Duration),
}

impl Cli {
    /// Parses the process arguments, exiting on clap errors.
    pub fn parse_args() -> Self {
        Self::try_parse_args(std::env::args_os()).unwrap_or_else(|err| err.exit())
    }

    /// Like [`Cli::try_parse_from`], except that a lone `--` is kept as the
    /// duration argument instead of being read as the end of options.
    pub fn try_parse_args<I, T>(args: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString>,
    {
        let args: Vec<OsString> = args.into_iter().map(Into::into).collect();
        let lone_separator = args.len() == 2 && args[1].to_str() == Some("--");
        let mut cli = Self::try_parse_from(args)?;
        if lone_separator {
            cli.duration = Some("--".to_string());
        }
        Ok(cli)
    }

    pub fn launch(&self) -> Result<Launch, DurationError> {
        if self.stopwatch {
            return Ok(Launch::Stopwatch);
        }
        match &self.duration {
            None => Ok(Launch::Interactive),
            Some(raw) => parse_duration(raw).map(Launch::Countdown),
        }
    }

    /// `--reset-to` wins over the config file.
    pub fn reset_behavior(&self, config: &Config) -> ResetBehavior {
        self.reset_to.unwrap_or(config.timer.reset)
    }
}

impl Launch {
    pub fn initial_state(self, now: Instant) -> TimerState {
        match self {
            Launch::Interactive => TimerState::stopwatch(false, now),
            Launch::Stopwatch => TimerState::stopwatch(true, now),
            Launch::Countdown(target) => TimerState::countdown(target, now),
        }
    }
}
