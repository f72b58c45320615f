//! Opt-in file logging.
//!
//! The clock owns the terminal, so nothing is ever logged to stderr. Setting
//! `TERMTIMER_LOG=<path>` writes one log file per run next to `<path>`.

use std::ffi::OsString;
use std::fs::File;
use std::path::PathBuf;
use std::sync::Mutex;
use std::time::{SystemTime, UNIX_EPOCH};
use tracing_subscriber::fmt::time::UtcTime;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Environment variable holding the log file path.
pub const LOG_ENV: &str = "TERMTIMER_LOG";

/// Clock events from the library and the `timer` binary; dependencies only
/// report warnings. `RUST_LOG` replaces it entirely.
pub const DEFAULT_FILTER: &str = "warn,termtimer=info,timer=info";

/// Per-run log file for the `TERMTIMER_LOG` value `base`: `{base}.{secs}.{pid}`.
///
/// Unset or empty `base` disables logging.
pub fn log_file_path(base: Option<OsString>, started: SystemTime, pid: u32) -> Option<PathBuf> {
    let mut name = base.filter(|base| !base.is_empty())?;
    let secs = started
        .duration_since(UNIX_EPOCH)
        .map(|since| since.as_secs())
        .unwrap_or(0);
    name.push(format!(".{secs}.{pid}"));
    Some(PathBuf::from(name))
}

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Installs the file subscriber when `TERMTIMER_LOG` is set.
///
/// Returns the file being written, or `None` when logging stays off.
pub fn init_tracing() -> Option<PathBuf> {
    let pid = std::process::id();
    let path = log_file_path(std::env::var_os(LOG_ENV), SystemTime::now(), pid)?;

    let file = match File::create(&path) {
        Ok(file) => file,
        Err(err) => {
            eprintln!("Warning: Failed to create log file {}: {err}", path.display());
            return None;
        }
    };

    tracing_subscriber::registry()
        .with(env_filter())
        .with(
            fmt::layer()
                .with_writer(Mutex::new(file))
                .with_ansi(false)
                .with_timer(UtcTime::rfc_3339()),
        )
        .init();

    tracing::info!(version = env!("CARGO_PKG_VERSION"), pid, "Timer log opened");
    Some(path)
}
