use escape_epic::ui::carousel::{CarouselIntent, CarouselReducer, CarouselState, PlaybackPhase};
use escape_epic::ui::mvi::{dispatch, Reducer};

fn started(slide_count: usize) -> CarouselState {
    CarouselReducer::reduce(
        CarouselState::default(),
        CarouselIntent::Start { slide_count },
    )
}

/// Deterministic pseudo-random walk of next/previous/advance intents.
fn walk(seed: u64, steps: usize) -> Vec<CarouselIntent> {
    let mut x = seed;
    (0..steps)
        .map(|_| {
            x = x.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
            match (x >> 33) % 4 {
                0 => CarouselIntent::Next,
                1 => CarouselIntent::Previous,
                2 => CarouselIntent::Advance,
                _ => CarouselIntent::TransitionEnd,
            }
        })
        .collect()
}

#[test]
fn index_stays_in_range_for_any_navigation_sequence() {
    for slide_count in 1..=6 {
        for seed in 0..20 {
            let mut state = started(slide_count);
            for intent in walk(seed, 200) {
                state = CarouselReducer::reduce(state, intent);
                assert!(
                    state.current_index < slide_count,
                    "index {} escaped 0..{}",
                    state.current_index,
                    slide_count
                );
            }
        }
    }
}

#[test]
fn next_wraps_forward_and_previous_wraps_back() {
    let mut state = started(3);
    for expected in [1, 2, 0, 1] {
        state = CarouselReducer::reduce(state, CarouselIntent::Next);
        assert_eq!(state.current_index, expected);
    }
    let mut state = started(3);
    for expected in [2, 1, 0, 2] {
        state = CarouselReducer::reduce(state, CarouselIntent::Previous);
        assert_eq!(state.current_index, expected);
    }
}

#[test]
fn out_of_range_go_to_never_moves() {
    let mut state = started(3);
    state = CarouselReducer::reduce(state, CarouselIntent::GoTo { index: 1 });
    for index in [3, 4, 100, usize::MAX] {
        let changed = dispatch::<CarouselReducer>(&mut state, CarouselIntent::GoTo { index });
        assert!(!changed);
        assert_eq!(state.current_index, 1);
    }
}

#[test]
fn go_to_current_index_is_a_no_op() {
    let mut state = started(3);
    assert!(!dispatch::<CarouselReducer>(
        &mut state,
        CarouselIntent::GoTo { index: 0 }
    ));
    assert!(!state.is_transitioning);
}

#[test]
fn teardown_from_every_phase_stops() {
    let playing = started(2);
    let paused = CarouselReducer::reduce(playing.clone(), CarouselIntent::Pause);
    for state in [CarouselState::default(), playing, paused] {
        let stopped = CarouselReducer::reduce(state, CarouselIntent::Teardown);
        assert_eq!(stopped.phase, PlaybackPhase::Stopped);
        assert!(!stopped.is_transitioning);
    }
}

#[test]
fn pause_and_resume_are_idempotent() {
    let mut state = started(3);
    assert!(dispatch::<CarouselReducer>(&mut state, CarouselIntent::Pause));
    assert!(!dispatch::<CarouselReducer>(&mut state, CarouselIntent::Pause));
    assert!(dispatch::<CarouselReducer>(&mut state, CarouselIntent::Resume));
    assert!(!dispatch::<CarouselReducer>(&mut state, CarouselIntent::Resume));
    assert!(state.is_playing());
}
