//! Hero carousel state machine.
//!
//! Uses MVI (Model-View-Intent) pattern:
//! - `state.rs` - Playback phase, current index, transition flag
//! - `intent.rs` - Viewer gestures and timer events
//! - `reducer.rs` - State transitions (pure, no timers)
//!
//! Timers live in [`crate::slideshow`], which dispatches into this reducer.

mod intent;
mod reducer;
mod state;

pub use intent::CarouselIntent;
pub use reducer::CarouselReducer;
pub use state::{CarouselState, PlaybackPhase};
