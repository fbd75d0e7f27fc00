use crate::content::NavLink;
use crate::ui::nav::NavState;
use crate::ui::theme::{ACTIVE_HIGHLIGHT, DRAWER_BORDER, HEADER_SEPARATOR, HEADER_TEXT, SUNSET_ORANGE};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

/// Slide-in menu listing the same links as the header.
pub fn widget(links: &[NavLink], state: &NavState) -> Paragraph<'static> {
    let mut lines = Vec::with_capacity(links.len() + 3);
    lines.push(Line::from(""));
    for (idx, link) in links.iter().enumerate() {
        let mut line = Line::from(vec![
            Span::raw("  "),
            Span::styled(link.label.clone(), Style::default().fg(HEADER_TEXT)),
        ]);
        if idx == state.selected_link {
            line = line.style(Style::default().bg(ACTIVE_HIGHLIGHT).fg(SUNSET_ORANGE));
        }
        lines.push(line);
    }
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "  ↑/↓ Move  Enter: Go  Esc: Close",
        Style::default().fg(HEADER_SEPARATOR),
    )));

    Paragraph::new(lines).block(
        Block::default()
            .title(Span::styled(" Menu ", Style::default().fg(SUNSET_ORANGE)))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(DRAWER_BORDER)),
    )
}
