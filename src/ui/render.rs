use crate::contact::ContactField;
use crate::ui::app::App;
use crate::ui::contact_form::{ContactFormState, FormStatus};
use crate::ui::footer::{Footer, PageControls};
use crate::ui::go_top::{self, GO_TOP_HEIGHT, GO_TOP_WIDTH};
use crate::ui::header::Header;
use crate::ui::hero::Hero;
use crate::ui::layout::{body_regions, corner_rect, drawer_rect, layout_regions};
use crate::ui::theme::{
    ACTIVE_HIGHLIGHT, BRAND_TEAL, GLOBAL_BORDER, HEADER_SEPARATOR, HEADER_TEXT, STATUS_ERROR,
    STATUS_OK, SUNSET_ORANGE,
};
use crate::ui::drawer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();
    let (header, body, footer) = layout_regions(area);

    let nav = app.nav();
    let header_widget = Header::new(nav.links(), &app.page().path);
    frame.render_widget(header_widget.widget(nav.state()), header);

    frame.render_widget(Clear, body);
    let (hero, content, form) = body_regions(body, app.hero().is_some(), app.is_contact_page());
    if let Some(slideshow) = app.hero() {
        frame.render_widget(Hero::new(slideshow).widget(), hero);
    }
    draw_content(frame, app, content);
    if app.is_contact_page() {
        frame.render_widget(contact_form_widget(app.contact_form()), form);
    }

    let controls = if app.is_contact_page() {
        PageControls::Form
    } else if app.hero().is_some() {
        PageControls::Hero
    } else {
        PageControls::Reading
    };
    let footer_widget = Footer::new(
        nav.links(),
        &app.page().path,
        app.catalog().contact_line(),
        controls,
    );
    frame.render_widget(footer_widget.widget(footer.width), footer);

    if app.go_top_visible() {
        let corner = corner_rect(body, GO_TOP_WIDTH, GO_TOP_HEIGHT);
        frame.render_widget(Clear, corner);
        frame.render_widget(go_top::widget(), corner);
    }

    if nav.state().menu_open {
        let drawer_area = drawer_rect(body);
        frame.render_widget(Clear, drawer_area);
        frame.render_widget(drawer::widget(nav.links(), nav.state()), drawer_area);
    }
}

fn draw_content(frame: &mut Frame<'_>, app: &App, area: Rect) {
    if area.height == 0 {
        return;
    }
    let lines = app.layout().lines(
        usize::from(app.scroll_row()),
        usize::from(area.height),
        |section| app.is_revealed(section),
    );
    let block = Block::default()
        .borders(Borders::LEFT | Borders::RIGHT)
        .border_style(Style::default().fg(GLOBAL_BORDER));
    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn contact_form_widget(form: &ContactFormState) -> Paragraph<'static> {
    let label_style = Style::default().fg(HEADER_TEXT);
    let focused_style = Style::default()
        .fg(SUNSET_ORANGE)
        .bg(ACTIVE_HIGHLIGHT)
        .add_modifier(Modifier::BOLD);

    let mut lines = Vec::with_capacity(ContactField::ALL.len() + 3);
    for field in ContactField::ALL {
        let focused = field == form.focused;
        let marker = if focused { "▸ " } else { "  " };
        let cursor = if focused { "▏" } else { "" };
        lines.push(Line::from(vec![
            Span::styled(
                format!("{}{:<8}", marker, field.label()),
                if focused { focused_style } else { label_style },
            ),
            Span::styled(
                format!("{}{}", form.value(field), cursor),
                Style::default().fg(HEADER_TEXT),
            ),
        ]));
    }
    lines.push(Line::from(""));
    lines.push(status_line(&form.status));
    lines.push(Line::from(Span::styled(
        "  Tab/Shift+Tab: Field  Enter: Send  Ctrl+N: Menu",
        Style::default().fg(HEADER_SEPARATOR),
    )));

    Paragraph::new(lines).block(
        Block::default()
            .title(Span::styled(
                " Plan your trip ",
                Style::default().fg(BRAND_TEAL).add_modifier(Modifier::BOLD),
            ))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(GLOBAL_BORDER)),
    )
}

fn status_line(status: &FormStatus) -> Line<'static> {
    match status {
        FormStatus::Editing => Line::from(""),
        FormStatus::Invalid(field) => Line::from(Span::styled(
            format!("  {} is required", field.label()),
            Style::default().fg(STATUS_ERROR),
        )),
        FormStatus::Sent(id) => Line::from(Span::styled(
            format!("  Thanks! Reference {}", id),
            Style::default().fg(STATUS_OK),
        )),
        FormStatus::Failed(message) => Line::from(Span::styled(
            format!("  Could not send: {}", message),
            Style::default().fg(STATUS_ERROR),
        )),
    }
}
