use ratatui::{
    layout::{Alignment, Rect},
    style::Style,
    text::Line,
    widgets::Paragraph,
    Frame,
};

use crate::app::App;

/// Shown until the first movie list arrives
pub struct LoadingWidget;

impl LoadingWidget {
    pub fn render(frame: &mut Frame, area: Rect, app: &App) {
        if area.height == 0 {
            return;
        }
        let label = if app.is_fetching {
            format!("{} Loading…", app.spinner())
        } else {
            "Loading…".to_string()
        };
        let row = Rect::new(area.x, area.y + area.height / 2, area.width, 1);
        let paragraph = Paragraph::new(Line::from(label))
            .alignment(Alignment::Center)
            .style(Style::default().fg(app.theme.muted).bg(app.theme.background));
        frame.render_widget(paragraph, row);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use ratatui::{backend::TestBackend, Terminal};
    use reelview_core::AppConfig;

    use crate::event::FetchResult;
    use crate::theme::Theme;

    #[test]
    fn test_loading_text_survives_failure() {
        let mut app = App::new(Arc::new(AppConfig::default()), Theme::default());
        app.start_fetch();
        app.handle_fetch_result(FetchResult::Failure {
            error: "offline".to_string(),
        });

        let backend = TestBackend::new(20, 5);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| LoadingWidget::render(f, f.area(), &app))
            .unwrap();

        let buffer = terminal.backend().buffer();
        let row: String = (0..20).map(|x| buffer[(x, 2)].symbol()).collect();
        assert!(row.contains("Loading…"));
    }
}
