use crate::contact::ContactField;
use crate::ui::mvi::Reducer;

use super::intent::ContactFormIntent;
use super::state::{ContactFormState, FormStatus};

pub struct ContactFormReducer;

impl Reducer for ContactFormReducer {
    type State = ContactFormState;
    type Intent = ContactFormIntent;

    fn reduce(mut state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            ContactFormIntent::Input(ch) => {
                state.values[state.focused.index()].push(ch);
                state.status = FormStatus::Editing;
                state
            }
            ContactFormIntent::Backspace => {
                state.values[state.focused.index()].pop();
                state.status = FormStatus::Editing;
                state
            }
            ContactFormIntent::NextField => {
                let next = (state.focused.index() + 1) % ContactField::ALL.len();
                state.focused = ContactField::ALL[next];
                state
            }
            ContactFormIntent::PrevField => {
                let len = ContactField::ALL.len();
                let prev = (state.focused.index() + len - 1) % len;
                state.focused = ContactField::ALL[prev];
                state
            }
            ContactFormIntent::ValidationFailed(field) => {
                state.focused = field;
                state.status = FormStatus::Invalid(field);
                state
            }
            ContactFormIntent::Sent(id) => ContactFormState {
                status: FormStatus::Sent(id),
                ..ContactFormState::default()
            },
            ContactFormIntent::Failed(message) => {
                state.status = FormStatus::Failed(message);
                state
            }
        }
    }
}
