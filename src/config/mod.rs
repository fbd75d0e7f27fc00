mod loader;
mod types;

pub use loader::{ConfigError, MAX_SCROLL_STEP};
pub use types::{Config, ContactConfig, HeaderConfig, PageConfig, SlideshowConfig};
