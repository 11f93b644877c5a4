//! Dark color scheme and the shared font/colors used by every screen.

use iced::theme::Palette;
use iced::{color, Border, Color, Font, Theme};

use crate::config::FONT_FAMILY;

pub const LEXEND: Font = Font::with_name(FONT_FAMILY);

pub const HEADER_BACKGROUND: Color = color!(0x0b0b0b);
pub const TILE_BACKGROUND: Color = color!(0x0a0a0a);
pub const FAVORITE_ON: Color = color!(0xff3b30);
pub const FAVORITE_OFF: Color = color!(0xffffff, 0.7);
pub const PLACEHOLDER_TEXT: Color = color!(0x9ca3af);

/// Translucent black used for overlays on top of images
pub fn scrim(alpha: f32) -> Color {
    Color { a: alpha, ..Color::BLACK }
}

pub fn rounded(radius: f32) -> Border {
    Border {
        radius: radius.into(),
        ..Border::default()
    }
}

/// Dark theme with a pure black background
pub fn app_theme() -> Theme {
    Theme::custom(
        "Wallpaper Dark".to_string(),
        Palette {
            background: Color::BLACK,
            ..Theme::Dark.palette()
        },
    )
}
