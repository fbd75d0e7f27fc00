//! State for the carousel.

use crate::ui::mvi::UiState;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlaybackPhase {
    /// Not started yet.
    #[default]
    Idle,
    /// Advance timer active.
    Playing,
    /// Advance timer suspended, index retained.
    Paused,
    /// Torn down. Every intent is a no-op from here.
    Stopped,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CarouselState {
    pub phase: PlaybackPhase,
    /// Always in `[0, slide_count)` once started.
    pub current_index: usize,
    /// Fixed at start.
    pub slide_count: usize,
    /// True between an index change and the matching `TransitionEnd`.
    pub is_transitioning: bool,
}

impl UiState for CarouselState {}

impl CarouselState {
    pub fn is_playing(&self) -> bool {
        self.phase == PlaybackPhase::Playing
    }

    pub fn is_paused(&self) -> bool {
        self.phase == PlaybackPhase::Paused
    }

    /// Playing or Paused: the states where navigation is accepted.
    pub fn is_active(&self) -> bool {
        matches!(self.phase, PlaybackPhase::Playing | PlaybackPhase::Paused)
    }

    pub fn is_stopped(&self) -> bool {
        self.phase == PlaybackPhase::Stopped
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_idle_at_zero() {
        let state = CarouselState::default();
        assert_eq!(state.phase, PlaybackPhase::Idle);
        assert_eq!(state.current_index, 0);
        assert_eq!(state.slide_count, 0);
        assert!(!state.is_transitioning);
    }

    #[test]
    fn phase_checks() {
        let mut state = CarouselState::default();
        assert!(!state.is_active());
        state.phase = PlaybackPhase::Playing;
        assert!(state.is_playing() && state.is_active());
        state.phase = PlaybackPhase::Paused;
        assert!(state.is_paused() && state.is_active());
        state.phase = PlaybackPhase::Stopped;
        assert!(state.is_stopped() && !state.is_active());
    }
}
