//! Site footer: a sitemap of the nav links, the agency contact line and the
//! key hints for whatever the current page offers.

use crate::content::NavLink;
use crate::ui::header::is_current;
use crate::ui::theme::{GLOBAL_BORDER, HEADER_SEPARATOR, HEADER_TEXT, SUNSET_ORANGE};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use unicode_width::UnicodeWidthStr;

const COPYRIGHT: &str = "© Escape Epic";
const SEPARATOR: &str = " · ";

/// Which controls the page in the body slot responds to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageControls {
    Hero,
    Form,
    Reading,
}

impl PageControls {
    fn hint(self) -> &'static str {
        match self {
            PageControls::Hero => "←/→ slide  space pause  q quit",
            PageControls::Form => "tab field  enter send  ^N menu",
            PageControls::Reading => "j/k scroll  g top  q quit",
        }
    }
}

pub struct Footer<'a> {
    links: &'a [NavLink],
    current_path: &'a str,
    contact_line: &'a str,
    controls: PageControls,
}

impl<'a> Footer<'a> {
    pub fn new(
        links: &'a [NavLink],
        current_path: &'a str,
        contact_line: &'a str,
        controls: PageControls,
    ) -> Self {
        Self {
            links,
            current_path,
            contact_line,
            controls,
        }
    }

    pub fn widget(&self, width: u16) -> Paragraph<'static> {
        Paragraph::new(Line::from(self.spans(usize::from(width.saturating_sub(2))))).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }

    /// Sitemap on the left, contact and copyright on the right. The hint goes
    /// first when space runs out, then the sitemap.
    fn spans(&self, width: usize) -> Vec<Span<'static>> {
        let text_style = Style::default().fg(HEADER_TEXT).add_modifier(Modifier::DIM);
        let separator_style = Style::default().fg(HEADER_SEPARATOR);
        let active_style = Style::default().fg(SUNSET_ORANGE);

        let mut sitemap = vec![Span::raw(" ")];
        for (idx, link) in self.links.iter().enumerate() {
            if idx > 0 {
                sitemap.push(Span::styled(SEPARATOR, separator_style));
            }
            let style = if is_current(&link.path, self.current_path) {
                active_style
            } else {
                text_style
            };
            sitemap.push(Span::styled(link.label.clone(), style));
        }

        let hint = Span::styled(format!("{}   ", self.controls.hint()), separator_style);
        let imprint = if self.contact_line.is_empty() {
            format!("{} ", COPYRIGHT)
        } else {
            format!("{}{}{} ", self.contact_line, SEPARATOR, COPYRIGHT)
        };
        let imprint = Span::styled(imprint, text_style);

        let sitemap_width: usize = sitemap.iter().map(|s| s.content.width()).sum();
        let mut right = vec![hint, imprint];
        let mut right_width: usize = right.iter().map(|s| s.content.width()).sum();
        if sitemap_width + right_width > width {
            let hint_width = right.remove(0).content.width();
            right_width -= hint_width;
        }

        let mut spans = Vec::new();
        if sitemap_width + right_width <= width {
            let padding = width - sitemap_width - right_width;
            spans.extend(sitemap);
            spans.push(Span::raw(" ".repeat(padding)));
        } else {
            spans.push(Span::raw(" ".repeat(width.saturating_sub(right_width))));
        }
        spans.extend(right);
        spans
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::SiteCatalog;

    fn text(spans: &[Span<'_>]) -> String {
        spans.iter().map(|s| s.content.as_ref()).collect()
    }

    fn footer(catalog: &SiteCatalog, path: &'static str, controls: PageControls) -> String {
        let footer = Footer::new(catalog.nav_links(), path, catalog.contact_line(), controls);
        text(&footer.spans(150))
    }

    #[test]
    fn wide_footer_shows_sitemap_hint_and_imprint() {
        let catalog = SiteCatalog::escape_epic();
        let line = footer(&catalog, "/", PageControls::Hero);
        assert!(line.starts_with(" Home · Destinations · Blog · About · Contact"));
        assert!(line.contains("←/→ slide"));
        assert!(line.ends_with("hello@escapeepic.travel · +1 555 0142 · © Escape Epic "));
        assert_eq!(line.width(), 150);
    }

    #[test]
    fn hint_follows_page_controls() {
        let catalog = SiteCatalog::escape_epic();
        assert!(footer(&catalog, "/contact", PageControls::Form).contains("enter send"));
        assert!(footer(&catalog, "/about", PageControls::Reading).contains("g top"));
    }

    #[test]
    fn current_page_is_highlighted() {
        let catalog = SiteCatalog::escape_epic();
        let footer = Footer::new(
            catalog.nav_links(),
            "/destinations/japan",
            catalog.contact_line(),
            PageControls::Hero,
        );
        let spans = footer.spans(150);
        let active = spans
            .iter()
            .find(|s| s.style.fg == Some(SUNSET_ORANGE))
            .expect("highlighted link");
        assert_eq!(active.content, "Destinations");
    }

    #[test]
    fn narrow_footer_drops_hint_then_sitemap() {
        let catalog = SiteCatalog::escape_epic();
        let footer = Footer::new(catalog.nav_links(), "/", catalog.contact_line(), PageControls::Hero);

        let medium = text(&footer.spans(100));
        assert!(medium.contains("Destinations"));
        assert!(!medium.contains("slide"));
        assert_eq!(medium.width(), 100);

        let narrow = text(&footer.spans(40));
        assert!(!narrow.contains("Destinations"));
        assert!(narrow.contains("© Escape Epic"));
    }

    #[test]
    fn empty_contact_line_leaves_copyright() {
        let catalog = SiteCatalog::escape_epic().with_contact_line("");
        assert!(footer(&catalog, "/", PageControls::Reading).ends_with("  © Escape Epic "));
    }
}
