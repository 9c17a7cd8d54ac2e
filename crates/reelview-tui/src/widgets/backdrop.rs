//! Parallax backdrop layer
//!
//! Backdrops are drawn in display order so a later movie covers an earlier
//! one. Each is cut to its reveal width and faded into the background from
//! top to bottom.

use ratatui::{buffer::Buffer, layout::Rect, style::Color, Frame};

use crate::app::App;
use crate::theme::{blend, placeholder, rgb};

pub struct BackdropWidget;

impl BackdropWidget {
    /// Draw every revealed backdrop into `area` (the backdrop region)
    pub fn render(frame: &mut Frame, area: Rect, app: &mut App) {
        if area.width == 0 || area.height == 0 {
            return;
        }
        let Some(carousel) = app.frame.clone() else { return };
        let Some(list) = app.display_list.as_ref() else { return };

        let background = rgb(app.theme.background);
        let mut layers = Vec::with_capacity(carousel.backdrops.len());
        for reveal in &carousel.backdrops {
            let cols = reveal.visible_width(area.width as f64).round() as u16;
            if cols == 0 {
                continue;
            }
            let Some(entry) = list.get(reveal.index) else { continue };
            let (Some(uri), Some(movie)) = (entry.backdrop(), entry.movie()) else { continue };
            layers.push((cols, uri.to_string(), placeholder(&movie.key, app.theme.background)));
        }

        let buf = frame.buffer_mut();
        for (cols, uri, fallback) in layers {
            let raster = app.images.raster(&uri, area.width, area.height);
            for row in 0..area.height {
                for col in 0..cols.min(area.width) {
                    let (top, bottom) = match raster.as_ref().and_then(|r| r.cell(col, row)) {
                        Some(pair) => pair,
                        None => (rgb(fallback), rgb(fallback)),
                    };
                    paint(buf, area, col, row, top, bottom, background);
                }
            }
        }
    }
}

/// Opacity of the background overlay at a pixel row of a `pixel_rows` tall region
fn fade_alpha(pixel_row: u32, pixel_rows: u32) -> f64 {
    if pixel_rows <= 1 {
        return 1.0;
    }
    pixel_row as f64 / (pixel_rows - 1) as f64
}

fn paint(
    buf: &mut Buffer,
    area: Rect,
    col: u16,
    row: u16,
    top: (u8, u8, u8),
    bottom: (u8, u8, u8),
    background: (u8, u8, u8),
) {
    let pixel_rows = area.height as u32 * 2;
    let top_px = row as u32 * 2;
    let fg: Color = blend(top, background, fade_alpha(top_px, pixel_rows));
    let bg: Color = blend(bottom, background, fade_alpha(top_px + 1, pixel_rows));
    if let Some(cell) = buf.cell_mut((area.x + col, area.y + row)) {
        cell.set_symbol("▀").set_fg(fg).set_bg(bg);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use ratatui::{backend::TestBackend, Terminal};
    use reelview_core::{AppConfig, MovieRecord};

    use crate::theme::Theme;

    fn movie(key: &str) -> MovieRecord {
        MovieRecord {
            key: key.to_string(),
            title: key.to_string(),
            description: String::new(),
            rating: 5.0,
            genres: Vec::new(),
            poster: None,
            backdrop: Some(format!("bd-{key}")),
            release_date: None,
        }
    }

    #[test]
    fn test_fade_alpha() {
        assert_eq!(fade_alpha(0, 10), 0.0);
        assert_eq!(fade_alpha(9, 10), 1.0);
        assert_eq!(fade_alpha(0, 1), 1.0);
    }

    #[test]
    fn test_first_backdrop_fills_width_at_rest() {
        let mut app = App::new(Arc::new(AppConfig::default()), Theme::default());
        app.set_viewport(20, 10);
        app.set_movies(vec![movie("a"), movie("b")]);

        let backend = TestBackend::new(20, 4);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| BackdropWidget::render(f, Rect::new(0, 0, 20, 4), &mut app))
            .unwrap();

        let buffer = terminal.backend().buffer();
        // Movie at index 1 is fully revealed at offset 0; the top row is unfaded
        assert_eq!(buffer[(0, 0)].symbol(), "▀");
        assert_eq!(buffer[(19, 0)].symbol(), "▀");
        assert_ne!(buffer[(19, 0)].fg, app.theme.background);
        // Bottom pixel of the last row is fully faded
        assert_eq!(buffer[(10, 3)].bg, app.theme.background);
    }

    #[test]
    fn test_nothing_without_list() {
        let mut app = App::new(Arc::new(AppConfig::default()), Theme::default());
        app.set_viewport(20, 10);

        let backend = TestBackend::new(20, 4);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| BackdropWidget::render(f, Rect::new(0, 0, 20, 4), &mut app))
            .unwrap();
        assert_eq!(terminal.backend().buffer()[(0, 0)].symbol(), " ");
    }
}
