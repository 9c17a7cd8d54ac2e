//! Paper: white screen, white cards, dark text

use ratatui::style::Color;
use crate::theme::Theme;

pub fn default() -> Theme {
    Theme {
        background: Color::Rgb(0xff, 0xff, 0xff),
        card: Color::Rgb(0xff, 0xff, 0xff),
        text: Color::Rgb(0x1c, 0x1c, 0x1e),
        muted: Color::Rgb(0x6e, 0x6e, 0x73),
        accent: Color::Rgb(0xf5, 0xa6, 0x23),
        status_bg: Color::Rgb(0xf2, 0xf2, 0xf7),
        error: Color::Rgb(0xd7, 0x26, 0x3d),
    }
}
