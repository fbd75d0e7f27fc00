use crate::ui::app::App;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if is_ctrl_char(key, 'q') || is_ctrl_char(key, 'c') {
        app.request_quit();
        return;
    }

    if app.nav_state().menu_open {
        handle_drawer_key(app, key);
        return;
    }

    if app.is_contact_page() && handle_form_key(app, key) {
        return;
    }

    match key.code {
        KeyCode::Char('q') => app.request_quit(),
        KeyCode::Char('m') => app.toggle_menu(),
        KeyCode::Left => app.previous_slide(),
        KeyCode::Right => app.next_slide(),
        KeyCode::Char(' ') => app.toggle_slideshow(),
        KeyCode::Enter => app.activate_call_to_action(),
        KeyCode::Char(ch @ '1'..='9') => {
            let index = ch.to_digit(10).unwrap_or(1) as usize - 1;
            app.go_to_slide(index);
        }
        KeyCode::Char('j') | KeyCode::Down => app.scroll_by(1),
        KeyCode::Char('k') | KeyCode::Up => app.scroll_by(-1),
        KeyCode::PageDown => app.page_down(),
        KeyCode::PageUp => app.page_up(),
        KeyCode::Char('g') | KeyCode::Home => app.scroll_to_top(),
        _ => {}
    }
}

fn handle_drawer_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => app.close_menu(),
        KeyCode::Char('m') => app.toggle_menu(),
        KeyCode::Char('q') => app.request_quit(),
        KeyCode::Up | KeyCode::Char('k') => app.menu_up(),
        KeyCode::Down | KeyCode::Char('j') => app.menu_down(),
        KeyCode::Enter => app.activate_menu_selection(),
        KeyCode::Char(ch @ '1'..='9') => {
            let index = ch.to_digit(10).unwrap_or(1) as usize - 1;
            app.activate_nav_link(index);
        }
        _ => {}
    }
}

/// Form editing on the contact page. Plain characters are typed into the
/// focused field, so the drawer is toggled with Ctrl+N here.
fn handle_form_key(app: &mut App, key: KeyEvent) -> bool {
    if is_ctrl_char(key, 'n') {
        app.toggle_menu();
        return true;
    }
    match key.code {
        KeyCode::Tab => app.form_next_field(),
        KeyCode::BackTab => app.form_prev_field(),
        KeyCode::Backspace => app.form_backspace(),
        KeyCode::Enter => app.submit_contact(),
        KeyCode::Char(ch)
            if !key
                .modifiers
                .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
        {
            app.form_input(ch)
        }
        _ => return false,
    }
    true
}

fn is_ctrl_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && key.modifiers.contains(KeyModifiers::CONTROL)
        && !key.modifiers.contains(KeyModifiers::SHIFT)
}
