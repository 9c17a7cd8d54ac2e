//! Theme registry and loader

mod gruvbox;
mod nord;
mod paper;

pub use paper::default as default_theme;

use reelview_core::config::{ThemeColorOverrides, ThemeConfig};
use ratatui::style::Color;

use crate::theme::Theme;

/// Built-in palettes: canonical name, aliases, constructor
const REGISTRY: &[(&str, &[&str], fn() -> Theme)] = &[
    ("paper", &["light"], paper::default),
    ("gruvbox-dark", &["gruvbox"], gruvbox::dark),
    ("nord", &[], nord::default),
];

/// `#RRGGBB` or `#RGB`, leading `#` optional
pub fn parse_hex_color(hex: &str) -> Option<Color> {
    let digits = hex.trim().trim_start_matches('#');
    if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    let value = u32::from_str_radix(digits, 16).ok()?;

    let (r, g, b) = match digits.len() {
        6 => (value >> 16, (value >> 8) & 0xff, value & 0xff),
        // Each shorthand nibble doubles: f -> ff
        3 => (
            ((value >> 8) & 0xf) * 0x11,
            ((value >> 4) & 0xf) * 0x11,
            (value & 0xf) * 0x11,
        ),
        _ => return None,
    };
    Some(Color::Rgb(r as u8, g as u8, b as u8))
}

/// Resolve `config.name` (case-insensitive, aliases allowed) and apply overrides
pub fn load_theme(config: &ThemeConfig) -> Theme {
    let wanted = config.name.to_lowercase();
    let found = REGISTRY
        .iter()
        .find(|(name, aliases, _)| *name == wanted || aliases.contains(&wanted.as_str()));

    let base = match found {
        Some((_, _, build)) => build(),
        None => {
            tracing::warn!(
                "Unknown theme '{}', using paper (available: {})",
                config.name,
                available_themes().join(", ")
            );
            paper::default()
        }
    };

    apply_overrides(base, &config.colors)
}

/// Apply user color overrides to a base theme
fn apply_overrides(mut theme: Theme, overrides: &ThemeColorOverrides) -> Theme {
    let slots: [(&Option<String>, &mut Color); 7] = [
        (&overrides.background, &mut theme.background),
        (&overrides.card, &mut theme.card),
        (&overrides.text, &mut theme.text),
        (&overrides.muted, &mut theme.muted),
        (&overrides.accent, &mut theme.accent),
        (&overrides.status_bg, &mut theme.status_bg),
        (&overrides.error, &mut theme.error),
    ];

    for (hex, slot) in slots {
        if let Some(color) = hex.as_deref().and_then(parse_hex_color) {
            *slot = color;
        }
    }

    theme
}

pub fn available_themes() -> Vec<&'static str> {
    REGISTRY.iter().map(|(name, _, _)| *name).collect()
}
