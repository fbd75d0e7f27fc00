//! Shared test utilities.

#![allow(dead_code, unused_imports)]

use escape_epic::config::Config;
use escape_epic::contact::{
    ContactError, ContactReceipt, ContactRequest, ContactSubmitter, LoggingSubmitter,
};
use escape_epic::content::{SiteCatalog, Slide};
use escape_epic::slideshow::{channel_sink, Slideshow, SlideshowEvent};
use escape_epic::ui::app::App;
use escape_epic::ui::events::AppEvent;
use parking_lot::Mutex;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tempfile::TempDir;
use tokio::sync::mpsc;

/// Three plain slides `A`, `B`, `C`.
pub fn abc_slides() -> Vec<Slide> {
    ["A", "B", "C"]
        .iter()
        .map(|title| Slide::new(format!("img/{}.jpg", title.to_lowercase()), *title))
        .collect()
}

/// Slideshow whose timer events land in the returned receiver.
pub fn slideshow(transition: Duration) -> (Slideshow, mpsc::UnboundedReceiver<SlideshowEvent>) {
    let (tx, rx) = mpsc::unbounded_channel();
    let sink = channel_sink(tx, |event| event);
    (Slideshow::new(sink, transition), rx)
}

/// Write `content` to a config file in a fresh temp dir.
pub fn temp_config(content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = temp_dir.path().join("config.toml");
    std::fs::write(&config_path, content).expect("Failed to write config");
    (temp_dir, config_path)
}

/// Submitter that records every accepted request.
#[derive(Default)]
pub struct SpySubmitter {
    pub requests: Mutex<Vec<ContactRequest>>,
}

impl ContactSubmitter for SpySubmitter {
    fn submit(&self, request: &ContactRequest) -> Result<ContactReceipt, ContactError> {
        request.validate()?;
        self.requests.lock().push(request.clone());
        Ok(ContactReceipt::new())
    }
}

/// App over the built-in catalog with a small terminal.
pub fn make_app() -> (App, mpsc::UnboundedReceiver<AppEvent>) {
    make_app_with(Config::default(), Arc::new(LoggingSubmitter))
}

pub fn make_app_with(
    config: Config,
    submitter: Arc<dyn ContactSubmitter>,
) -> (App, mpsc::UnboundedReceiver<AppEvent>) {
    let (tx, rx) = mpsc::unbounded_channel();
    let mut app = App::new(config, SiteCatalog::escape_epic(), submitter, tx);
    app.on_resize(40, 16);
    (app, rx)
}

/// Next slideshow event from the app channel, skipping anything else.
pub async fn next_slideshow_event(rx: &mut mpsc::UnboundedReceiver<AppEvent>) -> SlideshowEvent {
    loop {
        match rx.recv().await {
            Some(AppEvent::Slideshow(event)) => return event,
            Some(_) => continue,
            None => panic!("event channel closed"),
        }
    }
}
