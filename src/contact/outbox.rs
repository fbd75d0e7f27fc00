use std::fs::{self, File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use parking_lot::Mutex;
use serde::Serialize;

use super::{ContactError, ContactReceipt, ContactRequest, ContactSubmitter};

#[derive(Serialize)]
struct OutboxEntry<'a> {
    id: String,
    #[serde(flatten)]
    request: &'a ContactRequest,
}

/// Appends one JSON line per accepted request.
#[derive(Debug)]
pub struct OutboxSubmitter {
    path: PathBuf,
    file: Mutex<File>,
}

impl OutboxSubmitter {
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, ContactError> {
        let path = path.into();
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        let file = OpenOptions::new().create(true).append(true).open(&path)?;
        Ok(Self {
            path,
            file: Mutex::new(file),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ContactSubmitter for OutboxSubmitter {
    fn submit(&self, request: &ContactRequest) -> Result<ContactReceipt, ContactError> {
        request.validate()?;
        let receipt = ContactReceipt::new();
        let entry = OutboxEntry {
            id: receipt.id.to_string(),
            request,
        };
        let mut line = serde_json::to_string(&entry)?;
        line.push('\n');

        let mut file = self.file.lock();
        file.write_all(line.as_bytes())?;
        file.flush()?;
        tracing::info!(id = %receipt.id, path = %self.path.display(), "Contact request queued");
        Ok(receipt)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contact::tests::filled;

    #[test]
    fn appends_one_line_per_request() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("outbox").join("contact.jsonl");
        let outbox = OutboxSubmitter::open(&path).expect("open");

        let first = outbox.submit(&filled()).expect("submit");
        let second = outbox.submit(&filled()).expect("submit");

        let content = fs::read_to_string(&path).expect("read");
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines.len(), 2);

        let parsed: serde_json::Value = serde_json::from_str(lines[0]).expect("json");
        assert_eq!(parsed["id"], first.id.to_string());
        assert_eq!(parsed["email"], "ada@example.com");
        let parsed: serde_json::Value = serde_json::from_str(lines[1]).expect("json");
        assert_eq!(parsed["id"], second.id.to_string());
    }

    #[test]
    fn invalid_request_writes_nothing() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("contact.jsonl");
        let outbox = OutboxSubmitter::open(&path).expect("open");

        assert!(outbox.submit(&ContactRequest::default()).is_err());
        assert_eq!(fs::read_to_string(&path).expect("read"), "");
    }
}
