use crate::content::NavLink;
use crate::ui::nav::NavState;
use crate::ui::theme::{
    BRAND_TEAL, GLOBAL_BORDER, HEADER_SEPARATOR, HEADER_TEXT, SCROLLED_HEADER_BG, SUNSET_ORANGE,
};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

/// Fixed navigation bar shared by every page.
pub struct Header<'a> {
    links: &'a [NavLink],
    current_path: &'a str,
}

impl<'a> Header<'a> {
    pub fn new(links: &'a [NavLink], current_path: &'a str) -> Self {
        Self {
            links,
            current_path,
        }
    }

    pub fn widget(&self, state: &NavState) -> Paragraph<'static> {
        let text_style = Style::default().fg(HEADER_TEXT);
        let separator_style = Style::default().fg(HEADER_SEPARATOR);
        let active_style = Style::default()
            .fg(SUNSET_ORANGE)
            .add_modifier(Modifier::BOLD);

        let mut spans = vec![
            Span::styled(
                "  Escape Epic",
                Style::default().fg(BRAND_TEAL).add_modifier(Modifier::BOLD),
            ),
            Span::styled("  │  ", separator_style),
        ];
        for (idx, link) in self.links.iter().enumerate() {
            if idx > 0 {
                spans.push(Span::styled("  ", separator_style));
            }
            let style = if is_current(&link.path, self.current_path) {
                active_style
            } else {
                text_style
            };
            spans.push(Span::styled(link.label.clone(), style));
        }
        let menu_hint = if state.menu_open { "  ✕ Close (m)" } else { "  ☰ Menu (m)" };
        spans.push(Span::styled("  │", separator_style));
        spans.push(Span::styled(menu_hint, text_style));

        let mut block = Block::default()
            .borders(Borders::TOP | Borders::BOTTOM)
            .border_style(Style::default().fg(GLOBAL_BORDER));
        let mut paragraph_style = Style::default();
        if state.scrolled {
            // Solid bar once the page has scrolled past the threshold.
            block = block.border_style(Style::default().fg(BRAND_TEAL));
            paragraph_style = paragraph_style.bg(SCROLLED_HEADER_BG);
        }

        Paragraph::new(Line::from(spans))
            .style(paragraph_style)
            .block(block)
    }
}

/// "/destinations" stays highlighted on "/destinations/japan".
pub(crate) fn is_current(link_path: &str, current_path: &str) -> bool {
    if link_path == "/" {
        return current_path == "/";
    }
    current_path == link_path || current_path.starts_with(&format!("{}/", link_path))
}
