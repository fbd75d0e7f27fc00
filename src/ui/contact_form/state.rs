use uuid::Uuid;

use crate::contact::{ContactField, ContactRequest};
use crate::ui::mvi::UiState;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FormStatus {
    #[default]
    Editing,
    Invalid(ContactField),
    Sent(Uuid),
    Failed(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactFormState {
    /// Indexed by [`ContactField::index`].
    pub values: [String; 4],
    pub focused: ContactField,
    pub status: FormStatus,
}

impl Default for ContactFormState {
    fn default() -> Self {
        Self {
            values: Default::default(),
            focused: ContactField::Name,
            status: FormStatus::Editing,
        }
    }
}

impl UiState for ContactFormState {}

impl ContactFormState {
    pub fn value(&self, field: ContactField) -> &str {
        &self.values[field.index()]
    }

    pub fn request(&self) -> ContactRequest {
        ContactRequest {
            name: self.value(ContactField::Name).to_string(),
            email: self.value(ContactField::Email).to_string(),
            subject: self.value(ContactField::Subject).to_string(),
            message: self.value(ContactField::Message).to_string(),
        }
    }
}
