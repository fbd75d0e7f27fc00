//! Intents for the carousel.

use crate::ui::mvi::Intent;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CarouselIntent {
    /// Begin auto-advancing over `slide_count` slides. Ignored unless Idle.
    Start { slide_count: usize },
    Pause,
    Resume,
    /// Pause-on-click: pauses when playing, resumes when paused.
    TogglePause,
    Next,
    Previous,
    /// Jump to a slide. Out-of-range indices are ignored.
    GoTo { index: usize },
    /// Auto-advance timer fired.
    Advance,
    /// Transition timer fired.
    TransitionEnd,
    /// Component torn down. Terminal.
    Teardown,
}

impl Intent for CarouselIntent {}
