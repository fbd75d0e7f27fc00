use ratatui::layout::Rect;

/// Height of the fixed header bar.
pub const HEADER_HEIGHT: u16 = 3;
/// Height of the footer.
pub const FOOTER_HEIGHT: u16 = 3;
/// Rows reserved for the hero slideshow on pages that have one.
pub const HERO_HEIGHT: u16 = 9;
/// Rows reserved for the contact form.
pub const FORM_HEIGHT: u16 = 11;
/// Width of the drawer menu.
pub const DRAWER_WIDTH: u16 = 30;

pub fn layout_regions(area: Rect) -> (Rect, Rect, Rect) {
    let header_height = area.height.min(HEADER_HEIGHT);
    let footer_height = FOOTER_HEIGHT.min(area.height.saturating_sub(header_height));
    let header = Rect {
        x: area.x,
        y: area.y,
        width: area.width,
        height: header_height,
    };
    let footer = Rect {
        x: area.x,
        y: area.y + area.height.saturating_sub(footer_height),
        width: area.width,
        height: footer_height,
    };
    let body = Rect {
        x: area.x,
        y: area.y + header_height,
        width: area.width,
        height: area.height.saturating_sub(header_height + footer_height),
    };
    (header, body, footer)
}

pub fn body_rect(area: Rect) -> Rect {
    layout_regions(area).1
}

/// Splits the body into (hero, content, form). Missing parts get zero height.
pub fn body_regions(body: Rect, has_hero: bool, has_form: bool) -> (Rect, Rect, Rect) {
    let hero_height = if has_hero {
        HERO_HEIGHT.min(body.height)
    } else {
        0
    };
    let remaining = body.height - hero_height;
    let form_height = if has_form {
        FORM_HEIGHT.min(remaining)
    } else {
        0
    };
    let content_height = remaining - form_height;

    let hero = Rect {
        height: hero_height,
        ..body
    };
    let content = Rect {
        y: body.y + hero_height,
        height: content_height,
        ..body
    };
    let form = Rect {
        y: body.y + hero_height + content_height,
        height: form_height,
        ..body
    };
    (hero, content, form)
}

/// Panel docked to the right edge of `area`.
pub fn drawer_rect(area: Rect) -> Rect {
    let width = DRAWER_WIDTH.min(area.width);
    Rect {
        x: area.x + area.width - width,
        y: area.y,
        width,
        height: area.height,
    }
}

/// `width` x `height` box in the bottom-right corner of `area`.
pub fn corner_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + area.width - width,
        y: area.y + area.height - height,
        width,
        height,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn regions_cover_the_screen() {
        let area = Rect::new(0, 0, 80, 24);
        let (header, body, footer) = layout_regions(area);
        assert_eq!(header.height, 3);
        assert_eq!(footer.height, 3);
        assert_eq!(body.height, 18);
        assert_eq!(body.y, 3);
        assert_eq!(footer.y, 21);
    }

    #[test]
    fn tiny_screen_does_not_underflow() {
        let (header, body, footer) = layout_regions(Rect::new(0, 0, 10, 2));
        assert_eq!(header.height, 2);
        assert_eq!(body.height, 0);
        assert_eq!(footer.height, 0);
    }

    #[test]
    fn body_regions_stack_in_order() {
        let body = Rect::new(0, 3, 80, 30);
        let (hero, content, form) = body_regions(body, true, true);
        assert_eq!(hero.height, HERO_HEIGHT);
        assert_eq!(form.height, FORM_HEIGHT);
        assert_eq!(content.y, hero.y + hero.height);
        assert_eq!(form.y, content.y + content.height);
        assert_eq!(hero.height + content.height + form.height, body.height);
    }

    #[test]
    fn drawer_sits_on_the_right() {
        let area = Rect::new(0, 0, 100, 20);
        let drawer = drawer_rect(area);
        assert_eq!(drawer.x + drawer.width, 100);
        assert_eq!(drawer.width, DRAWER_WIDTH);
    }
}
