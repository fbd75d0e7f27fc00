//! Reducer for the carousel.

use crate::ui::mvi::Reducer;

use super::intent::CarouselIntent;
use super::state::{CarouselState, PlaybackPhase};

/// Pure carousel transitions. Timer arming and cancellation are done by the
/// caller after comparing the old and new state.
pub struct CarouselReducer;

impl Reducer for CarouselReducer {
    type State = CarouselState;
    type Intent = CarouselIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        if state.is_stopped() {
            return state;
        }

        match intent {
            CarouselIntent::Start { slide_count } => match state.phase {
                PlaybackPhase::Idle if slide_count > 0 => CarouselState {
                    phase: PlaybackPhase::Playing,
                    current_index: 0,
                    slide_count,
                    is_transitioning: false,
                },
                _ => state,
            },

            CarouselIntent::Pause => match state.phase {
                PlaybackPhase::Playing => CarouselState {
                    phase: PlaybackPhase::Paused,
                    ..state
                },
                _ => state,
            },

            CarouselIntent::Resume => match state.phase {
                PlaybackPhase::Paused => CarouselState {
                    phase: PlaybackPhase::Playing,
                    ..state
                },
                _ => state,
            },

            CarouselIntent::TogglePause => match state.phase {
                PlaybackPhase::Playing => Self::reduce(state, CarouselIntent::Pause),
                PlaybackPhase::Paused => Self::reduce(state, CarouselIntent::Resume),
                _ => state,
            },

            CarouselIntent::Next => {
                if !state.is_active() {
                    return state;
                }
                let target = (state.current_index + 1) % state.slide_count;
                move_to(state, target)
            }

            CarouselIntent::Previous => {
                if !state.is_active() {
                    return state;
                }
                let target = if state.current_index == 0 {
                    state.slide_count - 1
                } else {
                    state.current_index - 1
                };
                move_to(state, target)
            }

            CarouselIntent::GoTo { index } => {
                if !state.is_active() || index >= state.slide_count {
                    return state;
                }
                move_to(state, index)
            }

            CarouselIntent::Advance => {
                if !state.is_playing() {
                    return state;
                }
                let target = (state.current_index + 1) % state.slide_count;
                move_to(state, target)
            }

            CarouselIntent::TransitionEnd => CarouselState {
                is_transitioning: false,
                ..state
            },

            CarouselIntent::Teardown => CarouselState {
                phase: PlaybackPhase::Stopped,
                is_transitioning: false,
                ..state
            },
        }
    }
}

/// Moves to `target`, flagging a transition only if the index changed.
fn move_to(state: CarouselState, target: usize) -> CarouselState {
    if target == state.current_index {
        return state;
    }
    CarouselState {
        current_index: target,
        is_transitioning: true,
        ..state
    }
}
