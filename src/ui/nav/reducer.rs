use crate::ui::mvi::Reducer;

use super::intent::NavIntent;
use super::state::NavState;

pub struct NavReducer;

impl Reducer for NavReducer {
    type State = NavState;
    type Intent = NavIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            NavIntent::Scrolled { offset } => NavState {
                scrolled: state.is_scrolled_at(offset),
                ..state
            },
            NavIntent::ToggleMenu => {
                let menu_open = !state.menu_open;
                NavState {
                    menu_open,
                    // Reopening starts focus at the first link.
                    selected_link: if menu_open { 0 } else { state.selected_link },
                    ..state
                }
            }
            NavIntent::CloseMenu | NavIntent::BackdropClicked | NavIntent::LinkActivated => {
                NavState {
                    menu_open: false,
                    ..state
                }
            }
            NavIntent::MoveUp => {
                if !state.menu_open || state.link_count == 0 {
                    return state;
                }
                let selected_link = if state.selected_link == 0 {
                    state.link_count - 1
                } else {
                    state.selected_link - 1
                };
                NavState {
                    selected_link,
                    ..state
                }
            }
            NavIntent::MoveDown => {
                if !state.menu_open || state.link_count == 0 {
                    return state;
                }
                let selected_link = if state.selected_link + 1 >= state.link_count {
                    0
                } else {
                    state.selected_link + 1
                };
                NavState {
                    selected_link,
                    ..state
                }
            }
        }
    }
}
