use serde::{Deserialize, Serialize};

/// Labelled link to another page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CallToAction {
    pub label: String,
    /// Logical path handed to the router (e.g. "/destinations/japan").
    pub target: String,
}

/// One promotional unit shown by a slideshow.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slide {
    /// URI of the display asset. Never fetched; rendered as a caption.
    pub image: String,
    pub title: String,
    #[serde(default)]
    pub subtitle: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub call_to_action: Option<CallToAction>,
}

impl Slide {
    pub fn new(image: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            image: image.into(),
            title: title.into(),
            subtitle: None,
            description: None,
            call_to_action: None,
        }
    }

    pub fn with_subtitle(mut self, subtitle: impl Into<String>) -> Self {
        self.subtitle = Some(subtitle.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_call_to_action(
        mut self,
        label: impl Into<String>,
        target: impl Into<String>,
    ) -> Self {
        self.call_to_action = Some(CallToAction {
            label: label.into(),
            target: target.into(),
        });
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageKind {
    Home,
    DestinationIndex,
    Destination,
    BlogIndex,
    Article,
    About,
    Contact,
    NotFound,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    pub heading: String,
    pub paragraphs: Vec<String>,
}

impl Section {
    pub fn new(heading: impl Into<String>, paragraphs: &[&str]) -> Self {
        Self {
            heading: heading.into(),
            paragraphs: paragraphs.iter().map(|p| p.to_string()).collect(),
        }
    }
}

/// Content rendered inside the shared layout's body slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    pub path: String,
    pub title: String,
    pub kind: PageKind,
    pub hero: Vec<Slide>,
    pub sections: Vec<Section>,
}

impl Page {
    pub fn has_hero(&self) -> bool {
        !self.hero.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavLink {
    pub label: String,
    pub path: String,
}

impl NavLink {
    pub fn new(label: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            path: path.into(),
        }
    }
}
