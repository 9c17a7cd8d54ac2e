use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyEvent, KeyEventKind, MouseEventKind};
use image::DynamicImage;
use reelview_core::config::UiConfig;
use reelview_core::MovieRecord;

use crate::scroll::ScrollConfigExt;

/// Event handler for terminal events
pub struct EventHandler {
    tick_rate: Duration,
    /// Poll interval while the carousel is moving
    animation_tick: Duration,
}

/// Result of an async image load operation
pub enum ImageLoadResult {
    Success { uri: String, image: DynamicImage },
    Failure { uri: String, error: String },
}

/// Result of an async movie list fetch
pub enum FetchResult {
    Success { movies: Vec<MovieRecord> },
    Failure { error: String },
}

impl EventHandler {
    pub fn new(tick_rate_ms: u64, animation_tick: Duration) -> Self {
        Self {
            tick_rate: Duration::from_millis(tick_rate_ms.max(1)),
            animation_tick,
        }
    }

    /// Idle tick from `ui.tick_rate_ms`, animation tick from `ui.scroll`
    pub fn from_config(ui: &UiConfig) -> Self {
        Self::new(ui.tick_rate_ms, ui.scroll.animation_tick_duration())
    }

    /// Poll for the next event
    pub fn next(&self) -> Result<Option<AppEvent>> {
        self.poll(self.tick_rate)
    }

    /// Poll with the animation frame interval
    pub fn next_animation(&self) -> Result<Option<AppEvent>> {
        self.poll(self.animation_tick)
    }

    fn poll(&self, timeout: Duration) -> Result<Option<AppEvent>> {
        if event::poll(timeout)? {
            Ok(translate(event::read()?))
        } else {
            Ok(Some(AppEvent::Tick))
        }
    }
}

/// Map a crossterm event to an app event
fn translate(event: Event) -> Option<AppEvent> {
    match event {
        Event::Key(key) => {
            // Only handle key press events, ignore release events
            // (crossterm 0.27+ sends release events on some systems)
            if key.kind == KeyEventKind::Press {
                Some(AppEvent::Key(key))
            } else {
                None
            }
        }
        Event::Mouse(mouse) => match mouse.kind {
            MouseEventKind::ScrollDown | MouseEventKind::ScrollRight => Some(AppEvent::Wheel(1)),
            MouseEventKind::ScrollUp | MouseEventKind::ScrollLeft => Some(AppEvent::Wheel(-1)),
            _ => None,
        },
        Event::Resize(w, h) => Some(AppEvent::Resize(w, h)),
        _ => None,
    }
}

/// Application events
#[derive(Debug)]
pub enum AppEvent {
    /// A key was pressed
    Key(KeyEvent),
    /// Wheel notch; positive scrolls toward later movies
    Wheel(i32),
    /// Terminal was resized
    Resize(u16, u16),
    /// Tick event for periodic updates
    Tick,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEventState, KeyModifiers, MouseEvent};

    fn mouse(kind: MouseEventKind) -> Event {
        Event::Mouse(MouseEvent {
            kind,
            column: 0,
            row: 0,
            modifiers: KeyModifiers::NONE,
        })
    }

    #[test]
    fn test_wheel_direction() {
        assert!(matches!(translate(mouse(MouseEventKind::ScrollDown)), Some(AppEvent::Wheel(1))));
        assert!(matches!(translate(mouse(MouseEventKind::ScrollRight)), Some(AppEvent::Wheel(1))));
        assert!(matches!(translate(mouse(MouseEventKind::ScrollUp)), Some(AppEvent::Wheel(-1))));
        assert!(matches!(translate(mouse(MouseEventKind::Moved)), None));
    }

    #[test]
    fn test_key_release_ignored() {
        let release = KeyEvent {
            code: KeyCode::Char('l'),
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        };
        assert!(translate(Event::Key(release)).is_none());

        let press = KeyEvent::new(KeyCode::Char('l'), KeyModifiers::NONE);
        assert!(matches!(translate(Event::Key(press)), Some(AppEvent::Key(_))));
    }

    #[test]
    fn test_ticks_from_config() {
        let mut ui = UiConfig::default();
        ui.tick_rate_ms = 250;
        ui.scroll.animation_fps = 50;
        let handler = EventHandler::from_config(&ui);
        assert_eq!(handler.tick_rate, Duration::from_millis(250));
        assert_eq!(handler.animation_tick, Duration::from_millis(20));

        assert_eq!(EventHandler::new(0, Duration::from_millis(5)).tick_rate, Duration::from_millis(1));
    }
}
