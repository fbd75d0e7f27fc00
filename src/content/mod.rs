//! Site content and the router seam.

mod catalog;
mod model;

pub use catalog::SiteCatalog;
pub use model::{CallToAction, NavLink, Page, PageKind, Section, Slide};

/// Resolves a logical navigation target to a page.
///
/// Call-to-action buttons and navigation links only carry a path; whatever
/// owns the pages decides what that path means.
pub trait Router {
    fn resolve(&self, path: &str) -> Option<&Page>;
}
