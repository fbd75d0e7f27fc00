use thiserror::Error;

use crate::config::ConfigError;
use crate::contact::ContactError;

/// Crate-level error for callers that do not care which subsystem failed.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Contact(#[from] ContactError),

    #[error("Page '{path}' not found")]
    PageNotFound { path: String },

    #[error("Terminal I/O failed: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contact::ContactField;

    #[test]
    fn subsystem_errors_keep_their_message() {
        let err: Error = ConfigError::ValidationError {
            message: "page.scroll_step must be in 1..=10000, got 0".to_string(),
        }
        .into();
        assert!(matches!(err, Error::Config(_)));
        assert!(err.to_string().contains("scroll_step"));

        let err: Error = ContactError::MissingField(ContactField::Email).into();
        assert!(matches!(err, Error::Contact(_)));
    }

    #[test]
    fn io_errors_are_terminal_failures() {
        let err: Error = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "gone").into();
        assert_eq!(err.to_string(), "Terminal I/O failed: gone");
    }
}
