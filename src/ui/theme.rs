use ratatui::style::Color;

pub const BRAND_TEAL: Color = Color::Rgb(0x14, 0xb8, 0xa6);
pub const SUNSET_ORANGE: Color = Color::Rgb(0xf9, 0x73, 0x16);
pub const GLOBAL_BORDER: Color = Color::Rgb(0x40, 0x40, 0x40);
pub const HEADER_TEXT: Color = Color::Rgb(0xe5, 0xe5, 0xe5);
pub const HEADER_SEPARATOR: Color = Color::Rgb(0x6b, 0x72, 0x80);
pub const SCROLLED_HEADER_BG: Color = Color::Rgb(0x1f, 0x29, 0x37);
pub const DRAWER_BORDER: Color = Color::Rgb(0xe5, 0xe5, 0xe5);
pub const STATUS_OK: Color = Color::Rgb(0x22, 0xc5, 0x5e);
pub const STATUS_ERROR: Color = Color::Rgb(0xef, 0x44, 0x44);
pub const ACTIVE_HIGHLIGHT: Color = Color::Rgb(0x26, 0x26, 0x26);
