//! Navigation header: scroll-reactive style and the drawer menu.
//!
//! - `state.rs` - `menu_open` / `scrolled` flags plus drawer focus
//! - `intent.rs` - Scroll offsets, hamburger, link and backdrop gestures
//! - `reducer.rs` - Pure transitions
//! - `bar.rs` - [`NavBar`], which owns the scroll subscription

mod bar;
mod intent;
mod reducer;
mod state;

pub use bar::NavBar;
pub use intent::NavIntent;
pub use reducer::NavReducer;
pub use state::{NavState, DEFAULT_SCROLL_THRESHOLD};
