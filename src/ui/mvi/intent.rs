//! Base trait for intents (user/system events).

/// Marker trait for intent objects.
///
/// Intents represent key presses, terminal resizes and scheduler ticks.
/// They are processed by reducers to produce new states.
pub trait Intent: Send + 'static {}
