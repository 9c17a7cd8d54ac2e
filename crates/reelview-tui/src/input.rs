use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::app::App;
use crate::keymap::{KeyBinding, Keymap};

/// Input action that can be performed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Quit,
    /// Snap to the next movie
    NextItem,
    /// Snap to the previous movie
    PrevItem,
    /// Drag right by a few columns; snaps after the idle delay
    NudgeRight,
    NudgeLeft,
    JumpToFirst,
    JumpToLast,
    PendingG, // First 'g' press, waiting for second 'g'
    Refresh,
    OpenInBrowser,
    None,
}

/// Handle a key event and return the corresponding action
pub fn handle_key_event(key: KeyEvent, app: &App, keymap: &Keymap) -> Action {
    // Crossterm reports Shift with uppercase chars on some terminals only
    let modifiers = match key.code {
        KeyCode::Char(c) if c.is_ascii_uppercase() => key.modifiers | KeyModifiers::SHIFT,
        _ => key.modifiers,
    };
    let binding = KeyBinding::new(key.code, modifiers);

    if keymap.is_g_prefix(&binding) {
        if app.pending_key == Some('g') {
            if let Some(action) = keymap.get_pending_g_action() {
                return action.clone();
            }
        }
        return Action::PendingG;
    }

    keymap.get(&binding).cloned().unwrap_or(Action::None)
}
