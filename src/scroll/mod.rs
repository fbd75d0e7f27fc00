//! Injected viewport capabilities.
//!
//! The header and the section fade-in never read global scroll state. They
//! are handed a [`ScrollSignal`] or drive a [`VisibilityObserver`], which keeps
//! their logic testable without a terminal.

mod signal;
mod visibility;

pub use signal::{ScrollBus, ScrollSignal, ScrollSubscription};
pub use visibility::{SectionExtent, SectionRevealer, Viewport, VisibilityObserver};
