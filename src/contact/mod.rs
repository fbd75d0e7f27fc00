//! Contact form submission.
//!
//! The site has no backend. Submissions go through a [`ContactSubmitter`]:
//! [`LoggingSubmitter`] only records them in the log, [`OutboxSubmitter`]
//! appends them to a JSON-lines file for someone to pick up.

mod outbox;

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

pub use outbox::OutboxSubmitter;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContactField {
    Name,
    Email,
    Subject,
    Message,
}

impl ContactField {
    pub const ALL: [ContactField; 4] = [
        ContactField::Name,
        ContactField::Email,
        ContactField::Subject,
        ContactField::Message,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ContactField::Name => "Name",
            ContactField::Email => "Email",
            ContactField::Subject => "Subject",
            ContactField::Message => "Message",
        }
    }

    pub fn index(self) -> usize {
        match self {
            ContactField::Name => 0,
            ContactField::Email => 1,
            ContactField::Subject => 2,
            ContactField::Message => 3,
        }
    }
}

impl fmt::Display for ContactField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Error)]
pub enum ContactError {
    #[error("{0} is required")]
    MissingField(ContactField),

    #[error("Failed to write contact outbox: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to encode contact request: {0}")]
    Encode(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactRequest {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactRequest {
    pub fn field(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.name,
            ContactField::Email => &self.email,
            ContactField::Subject => &self.subject,
            ContactField::Message => &self.message,
        }
    }

    /// Every field must be present after trimming whitespace.
    pub fn validate(&self) -> Result<(), ContactError> {
        for field in ContactField::ALL {
            if self.field(field).trim().is_empty() {
                return Err(ContactError::MissingField(field));
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactReceipt {
    pub id: Uuid,
}

impl ContactReceipt {
    pub fn new() -> Self {
        Self { id: Uuid::new_v4() }
    }
}

impl Default for ContactReceipt {
    fn default() -> Self {
        Self::new()
    }
}

pub trait ContactSubmitter: Send + Sync {
    fn submit(&self, request: &ContactRequest) -> Result<ContactReceipt, ContactError>;
}

/// Validates and logs. Used when no outbox is configured.
#[derive(Debug, Default)]
pub struct LoggingSubmitter;

impl ContactSubmitter for LoggingSubmitter {
    fn submit(&self, request: &ContactRequest) -> Result<ContactReceipt, ContactError> {
        request.validate()?;
        let receipt = ContactReceipt::new();
        tracing::info!(
            id = %receipt.id,
            subject = %request.subject,
            "Contact request received (no outbox configured)"
        );
        Ok(receipt)
    }
}
