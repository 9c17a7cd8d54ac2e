//! Gruvbox dark
//! https://github.com/morhetz/gruvbox

use ratatui::style::Color;
use crate::theme::Theme;

pub fn dark() -> Theme {
    Theme {
        background: Color::Rgb(0x28, 0x28, 0x28), // bg0
        card: Color::Rgb(0x32, 0x30, 0x2f),       // bg1
        text: Color::Rgb(0xd4, 0xbe, 0x98),       // fg0
        muted: Color::Rgb(0x92, 0x83, 0x74),      // grey1
        accent: Color::Rgb(0xd8, 0xa6, 0x57),     // yellow
        status_bg: Color::Rgb(0x45, 0x40, 0x3d),  // bg2
        error: Color::Rgb(0xea, 0x69, 0x62),      // red
    }
}
