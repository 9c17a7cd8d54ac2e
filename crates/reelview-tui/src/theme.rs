use ratatui::style::Color;

/// Runtime theme with configurable colors
#[derive(Debug, Clone)]
pub struct Theme {
    /// Screen background; the backdrop gradient fades into it
    pub background: Color,
    /// Card surface
    pub card: Color,
    pub text: Color,
    /// Description, genres, inactive borders
    pub muted: Color,
    /// Stars, centered card border
    pub accent: Color,
    pub status_bg: Color,
    pub error: Color,
}

impl Default for Theme {
    fn default() -> Self {
        crate::themes::default_theme()
    }
}

/// RGB components of a color; named colors map to their xterm values
pub fn rgb(color: Color) -> (u8, u8, u8) {
    match color {
        Color::Rgb(r, g, b) => (r, g, b),
        Color::Black => (0, 0, 0),
        Color::Red => (0xcd, 0, 0),
        Color::Green => (0, 0xcd, 0),
        Color::Yellow => (0xcd, 0xcd, 0),
        Color::Blue => (0, 0, 0xee),
        Color::Magenta => (0xcd, 0, 0xcd),
        Color::Cyan => (0, 0xcd, 0xcd),
        Color::Gray => (0xe5, 0xe5, 0xe5),
        Color::DarkGray => (0x7f, 0x7f, 0x7f),
        Color::White => (0xff, 0xff, 0xff),
        _ => (0xff, 0xff, 0xff),
    }
}

/// Mix `from` toward `to`; `alpha` 0.0 keeps `from`, 1.0 gives `to`
pub fn blend(from: (u8, u8, u8), to: (u8, u8, u8), alpha: f64) -> Color {
    let alpha = alpha.clamp(0.0, 1.0);
    let mix = |a: u8, b: u8| -> u8 { (a as f64 + (b as f64 - a as f64) * alpha).round() as u8 };
    Color::Rgb(mix(from.0, to.0), mix(from.1, to.1), mix(from.2, to.2))
}

const PLACEHOLDER_TINTS: [(u8, u8, u8); 6] = [
    (0xc0, 0x39, 0x2b),
    (0x27, 0xae, 0x60),
    (0x29, 0x80, 0xb9),
    (0x8e, 0x44, 0xad),
    (0xd3, 0x54, 0x00),
    (0x16, 0xa0, 0x85),
];

/// Stable tint for a movie whose image is missing or still loading
pub fn placeholder(key: &str, base: Color) -> Color {
    // FNV-1a
    let hash = key
        .bytes()
        .fold(0xcbf2_9ce4_8422_2325u64, |h, b| (h ^ b as u64).wrapping_mul(0x0100_0000_01b3));
    let tint = PLACEHOLDER_TINTS[(hash % PLACEHOLDER_TINTS.len() as u64) as usize];
    blend(rgb(base), tint, 0.35)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blend_endpoints() {
        assert_eq!(blend((0, 0, 0), (255, 255, 255), 0.0), Color::Rgb(0, 0, 0));
        assert_eq!(blend((0, 0, 0), (255, 255, 255), 1.0), Color::Rgb(255, 255, 255));
        assert_eq!(blend((0, 100, 200), (100, 100, 0), 0.5), Color::Rgb(50, 100, 100));
    }

    #[test]
    fn test_blend_clamps_alpha() {
        assert_eq!(blend((10, 10, 10), (20, 20, 20), 3.0), Color::Rgb(20, 20, 20));
    }

    #[test]
    fn test_placeholder_is_stable() {
        let base = Color::Rgb(255, 255, 255);
        assert_eq!(placeholder("550", base), placeholder("550", base));
        assert_ne!(placeholder("550", base), base);
    }

    #[test]
    fn test_rgb_of_named() {
        assert_eq!(rgb(Color::White), (255, 255, 255));
        assert_eq!(rgb(Color::Rgb(1, 2, 3)), (1, 2, 3));
    }
}
