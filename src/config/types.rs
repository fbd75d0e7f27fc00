use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::content::Slide;

/// Root configuration container.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub slideshow: SlideshowConfig,
    #[serde(default)]
    pub header: HeaderConfig,
    #[serde(default)]
    pub page: PageConfig,
    #[serde(default)]
    pub contact: ContactConfig,
    /// Replaces the home page hero when non-empty.
    #[serde(default)]
    pub hero: Vec<Slide>,
}

/// Hero slideshow timing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SlideshowConfig {
    /// Auto-advance period in milliseconds (default: 4000).
    #[serde(default = "default_interval_ms")]
    pub interval_ms: u64,
    /// Visual transition window in milliseconds (default: 600).
    #[serde(default = "default_transition_ms")]
    pub transition_ms: u64,
}

/// Navigation header behaviour.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeaderConfig {
    /// Offset above which the header switches to its scrolled style (default: 50).
    #[serde(default = "default_scroll_threshold")]
    pub scroll_threshold: u32,
}

/// Body scrolling and reveal behaviour.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageConfig {
    /// Offset units per line scrolled (default: 20).
    #[serde(default = "default_scroll_step")]
    pub scroll_step: u32,
    /// Offset above which the go-top control appears (default: 300).
    #[serde(default = "default_go_top_threshold")]
    pub go_top_threshold: u32,
    /// Fraction of a section that must be on screen before it fades in (default: 0.1).
    #[serde(default = "default_reveal_ratio")]
    pub reveal_ratio: f32,
}

/// Contact form submission.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContactConfig {
    /// Append submissions as JSON lines to this file. Logged only when unset.
    #[serde(default)]
    pub outbox: Option<PathBuf>,
}

fn default_interval_ms() -> u64 {
    4000
}

fn default_transition_ms() -> u64 {
    600
}

fn default_scroll_threshold() -> u32 {
    50
}

fn default_scroll_step() -> u32 {
    20
}

fn default_go_top_threshold() -> u32 {
    300
}

fn default_reveal_ratio() -> f32 {
    0.1
}

impl Default for SlideshowConfig {
    fn default() -> Self {
        Self {
            interval_ms: default_interval_ms(),
            transition_ms: default_transition_ms(),
        }
    }
}

impl Default for HeaderConfig {
    fn default() -> Self {
        Self {
            scroll_threshold: default_scroll_threshold(),
        }
    }
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            scroll_step: default_scroll_step(),
            go_top_threshold: default_go_top_threshold(),
            reveal_ratio: default_reveal_ratio(),
        }
    }
}
