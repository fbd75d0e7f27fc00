use crate::slideshow::Slideshow;
use crate::ui::theme::{BRAND_TEAL, GLOBAL_BORDER, HEADER_SEPARATOR, HEADER_TEXT, SUNSET_ORANGE};
use ratatui::layout::Alignment;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

/// Hero banner for the current slide.
pub struct Hero<'a> {
    slideshow: &'a Slideshow,
}

impl<'a> Hero<'a> {
    pub fn new(slideshow: &'a Slideshow) -> Self {
        Self { slideshow }
    }

    pub fn widget(&self) -> Paragraph<'static> {
        let state = self.slideshow.state();
        let Some(slide) = self.slideshow.current_slide() else {
            return Paragraph::new("");
        };

        // Dim while the transition timer runs, standing in for the fade.
        let fade = if state.is_transitioning {
            Modifier::DIM
        } else {
            Modifier::empty()
        };
        let title_style = Style::default()
            .fg(SUNSET_ORANGE)
            .add_modifier(Modifier::BOLD | fade);
        let text_style = Style::default().fg(HEADER_TEXT).add_modifier(fade);
        let muted = Style::default().fg(HEADER_SEPARATOR);

        let mut lines = vec![Line::from(Span::styled(slide.title.clone(), title_style))];
        if let Some(subtitle) = &slide.subtitle {
            lines.push(Line::from(Span::styled(subtitle.clone(), text_style)));
        }
        if let Some(description) = &slide.description {
            lines.push(Line::from(Span::styled(description.clone(), text_style)));
        }
        lines.push(Line::from(Span::styled(format!("[image: {}]", slide.image), muted)));
        if let Some(cta) = &slide.call_to_action {
            lines.push(Line::from(Span::styled(
                format!("[Enter] {} →", cta.label),
                Style::default().fg(BRAND_TEAL).add_modifier(Modifier::BOLD),
            )));
        }
        lines.push(Line::from(""));
        lines.push(indicator_line(
            state.current_index,
            self.slideshow.slides().len(),
            state.is_paused(),
        ));

        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .block(
                Block::default()
                    .borders(Borders::BOTTOM)
                    .border_style(Style::default().fg(GLOBAL_BORDER)),
            )
    }
}

fn indicator_line(current: usize, count: usize, paused: bool) -> Line<'static> {
    let mut spans = Vec::with_capacity(count + 1);
    for idx in 0..count {
        let (dot, style) = if idx == current {
            ("● ", Style::default().fg(SUNSET_ORANGE))
        } else {
            ("○ ", Style::default().fg(HEADER_SEPARATOR))
        };
        spans.push(Span::styled(dot, style));
    }
    let status = if paused { "  ⏸ paused" } else { "  ▶ playing" };
    spans.push(Span::styled(status, Style::default().fg(HEADER_SEPARATOR)));
    Line::from(spans)
}
