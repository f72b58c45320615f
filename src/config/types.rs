use serde::{Deserialize, Serialize};

/// Root configuration container.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub timer: TimerConfig,
}

/// Clock behaviour settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TimerConfig {
    /// What `r` does to a countdown.
    #[serde(default)]
    pub reset: ResetBehavior,
}

/// What a reset does to a countdown.
///
/// A stopwatch always resets to zero.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum ResetBehavior {
    /// Set the remaining time to zero.
    #[default]
    Zero,
    /// Restore the remaining time to the original target.
    Target,
}
