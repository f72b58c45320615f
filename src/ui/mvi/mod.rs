//! Model-View-Intent (MVI) primitives.
//!
//! The clock screen is driven by a single unidirectional loop:
//!
//! ```text
//! Intent ──→ Reducer ──→ (State, Effect) ──→ View
//!    ↑                         │
//!    └──── host scheduler ◄────┘
//! ```
//!
//! - **State**: everything the view needs to draw a frame
//! - **Intent**: a key press, a resize, or a tick from the scheduler
//! - **Reducer**: pure transition that may ask the host for a follow-up effect

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;
