use uuid::Uuid;

use crate::contact::ContactField;
use crate::ui::mvi::Intent;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContactFormIntent {
    Input(char),
    Backspace,
    NextField,
    PrevField,
    /// Submission rejected locally; focus jumps to the offending field.
    ValidationFailed(ContactField),
    Sent(Uuid),
    /// Submitter error, shown verbatim.
    Failed(String),
}

impl Intent for ContactFormIntent {}
