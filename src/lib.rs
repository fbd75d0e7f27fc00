//! Escape Epic travel site rendered in the terminal.
//!
//! The two reusable pieces are the hero [`slideshow`] (auto-advancing
//! carousel with manual override) and the scroll-reactive navigation bar in
//! [`ui::nav`]. Both keep their state in pure reducers and hold timers or
//! subscriptions behind guards that release on drop.

pub mod cli;
pub mod config;
pub mod contact;
pub mod content;
pub mod error;
pub mod lifecycle;
pub mod logging;
pub mod scroll;
pub mod slideshow;
pub mod ui;
