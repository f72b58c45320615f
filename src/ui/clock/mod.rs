//! Clock engine.
//!
//! Owns the timing state machine shared by both modes:
//!
//! ```text
//! Running ──toggle──▶ Paused ──toggle──▶ Running
//! Running ──remaining hits 0 (countdown)──▶ Finished ──reset──▶ Paused
//! ```
//!
//! - `state.rs` - `TimerState` and its enums
//! - `intent.rs` - input events and the effects handed back to the host
//! - `reducer.rs` - state transitions (pure, no side effects)

mod intent;
mod reducer;
mod state;

pub use intent::{ClockEffect, ClockIntent};
pub use reducer::ClockReducer;
pub use state::{Mode, Status, TimerState, Viewport};
