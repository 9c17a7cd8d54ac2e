use std::io;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen, SetTitle},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    widgets::Block,
    Terminal,
};
use tokio::sync::mpsc;
use tracing::{info, warn};

use reelview_core::{AppConfig, MovieProvider};
use reelview_tui::{
    app::App,
    event::{AppEvent, EventHandler, FetchResult, ImageLoadResult},
    images::{image_client, spawn_image_load},
    input::{handle_key_event, Action},
    keymap::Keymap,
    load_theme,
    widgets::{BackdropWidget, CarouselWidget, LoadingWidget, StatusBarWidget},
};

use super::build_provider;

const MOVIE_PAGE_URL: &str = "https://www.themoviedb.org/movie";

pub async fn run(config: Arc<AppConfig>, movies: Option<PathBuf>) -> Result<()> {
    // Fail before touching the terminal
    let provider = build_provider(&config, movies)?;
    let client = image_client(config.provider.request_timeout_secs)?;
    let keymap = Keymap::from_config(&config.keymap);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture, SetTitle("Reelview"))?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let theme = load_theme(&config.ui.theme);
    let mut app = App::new(config.clone(), theme);

    let result = main_loop(&mut terminal, &mut app, &keymap, provider, client).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    result
}

async fn main_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    keymap: &Keymap,
    provider: Arc<dyn MovieProvider>,
    client: reqwest::Client,
) -> Result<()> {
    let event_handler = EventHandler::from_config(&app.config.ui);

    let (fetch_tx, mut fetch_rx) = mpsc::unbounded_channel::<FetchResult>();
    let (img_tx, mut img_rx) = mpsc::unbounded_channel::<ImageLoadResult>();

    // Checked at the end of each iteration to pick the next poll interval
    let mut needs_fast_update = false;

    loop {
        while let Ok(result) = fetch_rx.try_recv() {
            app.handle_fetch_result(result);
        }

        while let Ok(result) = img_rx.try_recv() {
            app.handle_image_result(result);
        }

        if app.needs_fetch() {
            spawn_fetch(app, provider.clone(), fetch_tx.clone());
        }

        app.update();

        for uri in app.images_to_load() {
            app.images.start_loading(&uri);
            spawn_image_load(client.clone(), uri, img_tx.clone());
        }

        terminal.draw(|frame| {
            let size = frame.area();
            let background = Style::default().bg(app.theme.background);
            frame.render_widget(Block::default().style(background), size);

            let main_layout = Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Min(1), Constraint::Length(1)])
                .split(size);
            let carousel_area = main_layout[0];

            app.set_viewport(carousel_area.width, carousel_area.height);

            if app.display_list.is_some() {
                let backdrop_rows = (app.metrics().backdrop_height.round() as u16)
                    .min(carousel_area.height);
                let backdrop_area = Rect::new(
                    carousel_area.x,
                    carousel_area.y,
                    carousel_area.width,
                    backdrop_rows,
                );
                BackdropWidget::render(frame, backdrop_area, app);
                CarouselWidget::render(frame, carousel_area, app);
            } else {
                LoadingWidget::render(frame, carousel_area, app);
            }

            StatusBarWidget::render(frame, main_layout[1], app);
        })?;

        let event = if needs_fast_update {
            event_handler.next_animation()?
        } else {
            event_handler.next()?
        };
        if let Some(event) = event {
            match event {
                AppEvent::Key(key) => {
                    let action = handle_key_event(key, app, keymap);
                    handle_action(app, action, provider.clone(), fetch_tx.clone());
                }
                AppEvent::Wheel(notches) => app.wheel(notches),
                AppEvent::Resize(_, _) => {
                    // Viewport is picked up on the next draw
                }
                AppEvent::Tick => app.tick_spinner(),
            }
        }

        needs_fast_update = app.needs_fast_update();

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

fn handle_action(
    app: &mut App,
    action: Action,
    provider: Arc<dyn MovieProvider>,
    fetch_tx: mpsc::UnboundedSender<FetchResult>,
) {
    // Any key other than the second 'g' cancels a pending sequence
    if action != Action::PendingG {
        app.pending_key = None;
    }

    match action {
        Action::Quit => app.should_quit = true,
        Action::NextItem => app.next_item(),
        Action::PrevItem => app.prev_item(),
        Action::NudgeRight => app.nudge(1.0),
        Action::NudgeLeft => app.nudge(-1.0),
        Action::JumpToFirst => app.jump_to_first(),
        Action::JumpToLast => app.jump_to_last(),
        Action::PendingG => app.pending_key = Some('g'),
        Action::Refresh => {
            if app.is_fetching {
                app.status_message = Some("Already fetching…".to_string());
            } else {
                spawn_fetch(app, provider, fetch_tx);
            }
        }
        Action::OpenInBrowser => open_in_browser(app),
        Action::None => {}
    }
}

/// Fetch the movie list on a tokio task; the result arrives on `tx`
fn spawn_fetch(
    app: &mut App,
    provider: Arc<dyn MovieProvider>,
    tx: mpsc::UnboundedSender<FetchResult>,
) {
    app.start_fetch();
    info!("Fetching movies from {}", provider.name());

    tokio::spawn(async move {
        let result = match provider.fetch_movies().await {
            Ok(movies) => FetchResult::Success { movies },
            Err(e) => FetchResult::Failure {
                error: e.to_string(),
            },
        };
        let _ = tx.send(result);
    });
}

fn open_in_browser(app: &mut App) {
    let Some(movie) = app.centered_movie() else {
        return;
    };
    let url = format!("{}/{}", MOVIE_PAGE_URL, movie.key);
    let title = movie.title.clone();

    match open::that(&url) {
        Ok(()) => app.status_message = Some(format!("Opened {}", title)),
        Err(e) => {
            warn!("Failed to open {}: {}", url, e);
            app.status_message = Some(format!("Could not open browser: {}", e));
        }
    }
}
