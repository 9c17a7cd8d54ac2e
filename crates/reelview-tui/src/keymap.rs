use std::collections::HashMap;

use crossterm::event::{KeyCode, KeyModifiers};
use reelview_core::config::KeymapConfig;
use tracing::warn;

use crate::input::Action;

/// Parsed key binding (key code + modifiers)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyBinding {
    pub code: KeyCode,
    pub modifiers: KeyModifiers,
}

impl KeyBinding {
    pub fn new(code: KeyCode, modifiers: KeyModifiers) -> Self {
        Self { code, modifiers }
    }

    pub fn simple(code: KeyCode) -> Self {
        Self::new(code, KeyModifiers::NONE)
    }

    pub fn ctrl(code: KeyCode) -> Self {
        Self::new(code, KeyModifiers::CONTROL)
    }

    pub fn shift(code: KeyCode) -> Self {
        Self::new(code, KeyModifiers::SHIFT)
    }
}

/// Runtime keymap for key-to-action lookup
pub struct Keymap {
    bindings: HashMap<KeyBinding, Action>,
    /// Action bound to the "gg" sequence, if any
    pending_g_action: Option<Action>,
}

impl Default for Keymap {
    fn default() -> Self {
        Self::from_config(&KeymapConfig::default())
    }
}

impl Keymap {
    pub fn from_config(config: &KeymapConfig) -> Self {
        let configured = [
            (config.quit.as_str(), Action::Quit),
            (config.next_item.as_str(), Action::NextItem),
            (config.prev_item.as_str(), Action::PrevItem),
            (config.nudge_right.as_str(), Action::NudgeRight),
            (config.nudge_left.as_str(), Action::NudgeLeft),
            (config.jump_to_first.as_str(), Action::JumpToFirst),
            (config.jump_to_last.as_str(), Action::JumpToLast),
            (config.refresh.as_str(), Action::Refresh),
            (config.open_browser.as_str(), Action::OpenInBrowser),
        ];

        let mut keymap = Self {
            bindings: HashMap::new(),
            pending_g_action: None,
        };

        for (notation, action) in configured {
            if notation.trim() == "gg" {
                keymap.pending_g_action = Some(action);
                continue;
            }
            let Some(binding) = parse_key_binding(notation) else {
                warn!("Invalid key binding '{}' for {:?}, ignoring", notation, action);
                continue;
            };
            match keymap.bindings.get(&binding) {
                Some(existing) => warn!(
                    "Key '{}' already bound to {:?}, ignoring binding to {:?}",
                    notation, existing, action
                ),
                None => {
                    keymap.bindings.insert(binding, action);
                }
            }
        }

        // Ctrl-C always quits; arrows and Home/End fill in unless taken
        keymap
            .bindings
            .insert(KeyBinding::ctrl(KeyCode::Char('c')), Action::Quit);
        let fallbacks = [
            (KeyBinding::simple(KeyCode::Right), Action::NextItem),
            (KeyBinding::simple(KeyCode::Left), Action::PrevItem),
            (KeyBinding::shift(KeyCode::Right), Action::NudgeRight),
            (KeyBinding::shift(KeyCode::Left), Action::NudgeLeft),
            (KeyBinding::simple(KeyCode::Home), Action::JumpToFirst),
            (KeyBinding::simple(KeyCode::End), Action::JumpToLast),
            (KeyBinding::simple(KeyCode::Enter), Action::OpenInBrowser),
        ];
        for (binding, action) in fallbacks {
            keymap.bindings.entry(binding).or_insert(action);
        }

        keymap
    }

    pub fn get(&self, binding: &KeyBinding) -> Option<&Action> {
        self.bindings.get(binding)
    }

    /// Action for a completed "gg" sequence
    pub fn get_pending_g_action(&self) -> Option<&Action> {
        self.pending_g_action.as_ref()
    }

    /// Whether a single 'g' press starts a pending sequence
    pub fn is_g_prefix(&self, binding: &KeyBinding) -> bool {
        self.pending_g_action.is_some()
            && binding.code == KeyCode::Char('g')
            && binding.modifiers == KeyModifiers::NONE
    }
}

/// Names accepted inside `<...>`, compared case-insensitively
const NAMED_KEYS: &[(&str, KeyCode)] = &[
    ("cr", KeyCode::Enter),
    ("enter", KeyCode::Enter),
    ("esc", KeyCode::Esc),
    ("tab", KeyCode::Tab),
    ("space", KeyCode::Char(' ')),
    ("left", KeyCode::Left),
    ("right", KeyCode::Right),
    ("up", KeyCode::Up),
    ("down", KeyCode::Down),
    ("home", KeyCode::Home),
    ("end", KeyCode::End),
    ("pageup", KeyCode::PageUp),
    ("pagedown", KeyCode::PageDown),
];

/// Parse Vim-style key notation into KeyBinding
///
/// `l`, `G` (Shift), `<C-n>`, `<S-Left>`, `<CR>`. Multi-key sequences other
/// than "gg" are rejected.
pub fn parse_key_binding(s: &str) -> Option<KeyBinding> {
    let s = s.trim();

    let Some(inner) = s.strip_prefix('<').and_then(|rest| rest.strip_suffix('>')) else {
        return single_char(s).map(|c| {
            if c.is_ascii_uppercase() {
                KeyBinding::shift(KeyCode::Char(c))
            } else {
                KeyBinding::simple(KeyCode::Char(c))
            }
        });
    };

    let (modifiers, name) = match inner.split_once('-') {
        Some(("C" | "c", name)) if !name.is_empty() => (KeyModifiers::CONTROL, name),
        Some(("S" | "s", name)) if !name.is_empty() => (KeyModifiers::SHIFT, name),
        _ => (KeyModifiers::NONE, inner),
    };

    let code = NAMED_KEYS
        .iter()
        .find(|(key, _)| key.eq_ignore_ascii_case(name))
        .map(|(_, code)| *code)
        .or_else(|| single_char(name).map(|c| KeyCode::Char(c.to_ascii_lowercase())))?;

    Some(KeyBinding::new(code, modifiers))
}

fn single_char(s: &str) -> Option<char> {
    let mut chars = s.chars();
    let c = chars.next()?;
    chars.next().is_none().then_some(c)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple_keys() {
        assert_eq!(parse_key_binding("l"), Some(KeyBinding::simple(KeyCode::Char('l'))));
        assert_eq!(parse_key_binding("G"), Some(KeyBinding::shift(KeyCode::Char('G'))));
        assert_eq!(parse_key_binding("<C-n>"), Some(KeyBinding::ctrl(KeyCode::Char('n'))));
        assert_eq!(parse_key_binding("<Right>"), Some(KeyBinding::simple(KeyCode::Right)));
        assert_eq!(parse_key_binding("<S-Left>"), Some(KeyBinding::shift(KeyCode::Left)));
        assert_eq!(parse_key_binding("xyz"), None);
        assert_eq!(parse_key_binding(""), None);
    }

    #[test]
    fn test_keymap_defaults() {
        let keymap = Keymap::default();
        assert_eq!(keymap.get(&KeyBinding::simple(KeyCode::Char('q'))), Some(&Action::Quit));
        assert_eq!(keymap.get(&KeyBinding::simple(KeyCode::Char('l'))), Some(&Action::NextItem));
        assert_eq!(keymap.get(&KeyBinding::shift(KeyCode::Char('H'))), Some(&Action::NudgeLeft));
        assert_eq!(keymap.get(&KeyBinding::simple(KeyCode::Left)), Some(&Action::PrevItem));
        assert_eq!(keymap.get(&KeyBinding::ctrl(KeyCode::Char('c'))), Some(&Action::Quit));
        assert_eq!(keymap.get_pending_g_action(), Some(&Action::JumpToFirst));
        assert!(keymap.is_g_prefix(&KeyBinding::simple(KeyCode::Char('g'))));
    }

    #[test]
    fn test_conflicting_binding_keeps_first() {
        let config = KeymapConfig {
            refresh: "q".to_string(),
            ..KeymapConfig::default()
        };
        let keymap = Keymap::from_config(&config);
        assert_eq!(keymap.get(&KeyBinding::simple(KeyCode::Char('q'))), Some(&Action::Quit));
    }
}
