//! Model-View-Intent primitives shared by every stateful widget.
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ View
//!    ↑                              │
//!    └──────────────────────────────┘
//! ```
//!
//! Reducers never touch timers, channels or the terminal. Components such as
//! the slideshow and the nav bar own those resources and feed the reducer the
//! intents they produce.

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::{dispatch, Reducer};
pub use state::UiState;
