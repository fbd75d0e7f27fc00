//! Body slot content: page sections laid out for a given width.

use crate::content::{Page, PageKind};
use crate::scroll::SectionExtent;
use crate::ui::theme::{BRAND_TEAL, HEADER_SEPARATOR, HEADER_TEXT, SUNSET_ORANGE};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Wrapped page text plus where each section sits, in rows.
#[derive(Debug, Clone, Default)]
pub struct PageLayout {
    rows: Vec<Row>,
    extents: Vec<SectionExtent>,
}

#[derive(Debug, Clone)]
struct Row {
    text: String,
    kind: RowKind,
    section: Option<usize>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RowKind {
    Title,
    Heading,
    Body,
    Blank,
}

impl PageLayout {
    pub fn build(page: &Page, width: u16) -> Self {
        let width = width.max(10) as usize;
        let mut rows = Vec::new();
        let mut extents = Vec::with_capacity(page.sections.len());

        if page.kind != PageKind::Home {
            for text in wrap(&page.title, width) {
                rows.push(Row { text, kind: RowKind::Title, section: None });
            }
            rows.push(Row::blank(None));
        }

        for (idx, section) in page.sections.iter().enumerate() {
            let top = rows.len() as u32;
            for text in wrap(&section.heading, width) {
                rows.push(Row { text, kind: RowKind::Heading, section: Some(idx) });
            }
            for paragraph in &section.paragraphs {
                for text in wrap(paragraph, width) {
                    rows.push(Row { text, kind: RowKind::Body, section: Some(idx) });
                }
            }
            extents.push(SectionExtent {
                top,
                height: rows.len() as u32 - top,
            });
            rows.push(Row::blank(Some(idx)));
        }

        Self { rows, extents }
    }

    pub fn line_count(&self) -> usize {
        self.rows.len()
    }

    pub fn extents(&self) -> &[SectionExtent] {
        &self.extents
    }

    /// Rows `[start, start + height)`; sections for which `revealed` is false
    /// are drawn dim until they fade in.
    pub fn lines(
        &self,
        start: usize,
        height: usize,
        revealed: impl Fn(usize) -> bool,
    ) -> Vec<Line<'static>> {
        self.rows
            .iter()
            .skip(start)
            .take(height)
            .map(|row| {
                let hidden = row.section.is_some_and(|idx| !revealed(idx));
                let style = match row.kind {
                    RowKind::Title => Style::default()
                        .fg(BRAND_TEAL)
                        .add_modifier(Modifier::BOLD),
                    RowKind::Heading => Style::default()
                        .fg(SUNSET_ORANGE)
                        .add_modifier(Modifier::BOLD),
                    RowKind::Body => Style::default().fg(HEADER_TEXT),
                    RowKind::Blank => Style::default(),
                };
                let style = if hidden {
                    Style::default().fg(HEADER_SEPARATOR).add_modifier(Modifier::DIM)
                } else {
                    style
                };
                Line::from(Span::styled(format!(" {}", row.text), style))
            })
            .collect()
    }
}

impl Row {
    fn blank(section: Option<usize>) -> Self {
        Self {
            text: String::new(),
            kind: RowKind::Blank,
            section,
        }
    }
}

/// Greedy word wrap by display width. Words wider than `width` are split.
pub fn wrap(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        let mut word = word;
        while word.width() > width {
            if !current.is_empty() {
                lines.push(std::mem::take(&mut current));
            }
            let (head, tail) = split_at_width(word, width);
            lines.push(head.to_string());
            word = tail;
        }
        let needed = if current.is_empty() {
            word.width()
        } else {
            current.width() + 1 + word.width()
        };
        if needed > width && !current.is_empty() {
            lines.push(std::mem::take(&mut current));
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(word);
    }
    if !current.is_empty() || lines.is_empty() {
        lines.push(current);
    }
    lines
}

/// Longest prefix of `word` that fits in `width` columns. Always takes at
/// least one char so a glyph wider than `width` still makes progress.
fn split_at_width(word: &str, width: usize) -> (&str, &str) {
    let mut used = 0;
    let mut end = 0;
    for (idx, ch) in word.char_indices() {
        let w = ch.width().unwrap_or(0);
        if used + w > width && end > 0 {
            break;
        }
        used += w;
        end = idx + ch.len_utf8();
    }
    word.split_at(end)
}
