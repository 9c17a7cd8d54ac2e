use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use unicode_width::UnicodeWidthStr;

use super::truncate;
use crate::app::App;

pub struct StatusBarWidget;

impl StatusBarWidget {
    pub fn render(frame: &mut Frame, area: Rect, app: &App) {
        let theme = &app.theme;
        let base = Style::default().bg(theme.status_bg);

        let (status_text, status_style) = if let Some(error) = &app.fetch_error {
            (format!(" Fetch failed: {} (r to retry)", error), base.fg(theme.error))
        } else if let Some(msg) = &app.status_message {
            (format!(" {}", msg), base.fg(theme.text))
        } else if let Some(movie) = app.centered_movie() {
            let position = app.centered_index().unwrap_or(1);
            let year = movie
                .release_year()
                .map(|y| format!(" ({})", y))
                .unwrap_or_default();
            (
                format!(" {}{} | {}/{}", movie.title, year, position, app.movie_count()),
                base.fg(theme.text),
            )
        } else if app.is_fetching {
            (" Fetching movies…".to_string(), base.fg(theme.muted))
        } else {
            (String::new(), base)
        };

        let help_hint = " h/l:move o:open r:refresh q:quit ";
        let width = area.width as usize;
        let hint = if help_hint.width() + 10 <= width { help_hint } else { "" };
        let status_text = truncate(&status_text, width.saturating_sub(hint.width()));
        let padding = width.saturating_sub(status_text.width() + hint.width());

        let line = Line::from(vec![
            Span::styled(status_text, status_style),
            Span::styled(" ".repeat(padding), base),
            Span::styled(hint, base.fg(theme.muted)),
        ]);

        frame.render_widget(Paragraph::new(line).style(base), area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use ratatui::{backend::TestBackend, Terminal};
    use reelview_core::{AppConfig, MovieRecord};

    use crate::event::FetchResult;
    use crate::theme::Theme;

    fn draw(app: &App) -> String {
        let backend = TestBackend::new(60, 1);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| StatusBarWidget::render(f, f.area(), app))
            .unwrap();
        let buffer = terminal.backend().buffer();
        (0..60).map(|x| buffer[(x, 0)].symbol()).collect()
    }

    #[test]
    fn test_shows_centered_movie() {
        let mut app = App::new(Arc::new(AppConfig::default()), Theme::default());
        app.set_viewport(80, 30);
        app.set_movies(vec![MovieRecord {
            key: "1".to_string(),
            title: "Heat".to_string(),
            description: String::new(),
            rating: 8.0,
            genres: Vec::new(),
            poster: None,
            backdrop: None,
            release_date: None,
        }]);

        let row = draw(&app);
        assert!(row.contains("Heat | 1/1"));
        assert!(row.contains("q:quit"));
    }

    #[test]
    fn test_shows_fetch_error() {
        let mut app = App::new(Arc::new(AppConfig::default()), Theme::default());
        app.handle_fetch_result(FetchResult::Failure {
            error: "HTTP 401".to_string(),
        });
        let row = draw(&app);
        assert!(row.contains("Fetch failed: HTTP 401"));
    }
}
