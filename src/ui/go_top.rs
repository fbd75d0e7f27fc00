use crate::ui::theme::{BRAND_TEAL, HEADER_TEXT};
use ratatui::style::{Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Paragraph};

pub const GO_TOP_WIDTH: u16 = 12;
pub const GO_TOP_HEIGHT: u16 = 3;

/// The go-top control is shown once `offset` exceeds `threshold`.
pub fn is_visible(offset: u32, threshold: u32) -> bool {
    offset > threshold
}

pub fn widget() -> Paragraph<'static> {
    Paragraph::new(Line::from(" ↑ Top (g)"))
        .style(Style::default().fg(HEADER_TEXT).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(BRAND_TEAL)),
        )
}

#[cfg(test)]
mod tests {
    use super::is_visible;

    #[test]
    fn hidden_at_threshold() {
        assert!(!is_visible(300, 300));
        assert!(is_visible(301, 300));
        assert!(!is_visible(0, 300));
    }
}
