use std::sync::Arc;

use reelview_core::{
    scroll_offset, AppConfig, CarouselFrame, CarouselMetrics, DisplayList, MovieRecord,
    ScrollOffsetReader,
};
use tracing::{debug, info, warn};

use crate::event::{FetchResult, ImageLoadResult};
use crate::images::ImageCache;
use crate::scroll::{ScrollAnimator, ScrollBounds, ScrollConfigExt};
use crate::theme::Theme;

/// Movies on each side of the centered one whose images are fetched
const PRELOAD_RADIUS: usize = 2;

/// Share of an item a nudge drags the carousel
const NUDGE_FRACTION: f64 = 0.25;

const SPINNER_FRAMES: [&str; 4] = ["⠋", "⠙", "⠹", "⠸"];

/// Application state
pub struct App {
    pub config: Arc<AppConfig>,
    pub theme: Theme,
    /// Fetched movies padded with sentinels; `None` until the first fetch lands
    pub display_list: Option<DisplayList>,
    pub is_fetching: bool,
    /// Error from the last fetch, shown in the status bar
    pub fetch_error: Option<String>,
    /// Sole writer of the scroll offset
    pub scroll: ScrollAnimator,
    offset: ScrollOffsetReader,
    /// Transforms derived from the last seen offset
    pub frame: Option<CarouselFrame>,
    /// Size of the carousel area (terminal minus status bar)
    pub viewport: (u16, u16),
    pub images: ImageCache,
    pub status_message: Option<String>,
    pub should_quit: bool,
    /// Pending key for multi-key sequences (e.g., 'gg')
    pub pending_key: Option<char>,
    spinner_frame: usize,
}

impl App {
    pub fn new(config: Arc<AppConfig>, theme: Theme) -> Self {
        let (writer, reader) = scroll_offset();
        let scroll = ScrollAnimator::new(config.ui.scroll.clone(), writer);
        Self {
            config,
            theme,
            display_list: None,
            is_fetching: false,
            fetch_error: None,
            scroll,
            offset: reader,
            frame: None,
            viewport: (0, 0),
            images: ImageCache::new(),
            status_message: None,
            should_quit: false,
            pending_key: None,
            spinner_frame: 0,
        }
    }

    /// A clone of the offset reader for additional observers
    pub fn offset_reader(&self) -> ScrollOffsetReader {
        self.offset.clone()
    }

    pub fn metrics(&self) -> CarouselMetrics {
        CarouselMetrics::from_ui_config(self.viewport.0, self.viewport.1, &self.config.ui)
    }

    pub fn movie_count(&self) -> usize {
        self.display_list.as_ref().map_or(0, |l| l.movie_count())
    }

    pub fn bounds(&self) -> ScrollBounds {
        let metrics = self.metrics();
        ScrollBounds::new(metrics.max_offset(self.movie_count()), metrics.item_size)
    }

    /// Whether the list still needs fetching (first mount or after a failure)
    pub fn needs_fetch(&self) -> bool {
        self.display_list.is_none() && !self.is_fetching && self.fetch_error.is_none()
    }

    pub fn start_fetch(&mut self) {
        self.is_fetching = true;
        self.fetch_error = None;
        self.status_message = None;
    }

    pub fn handle_fetch_result(&mut self, result: FetchResult) {
        self.is_fetching = false;
        match result {
            FetchResult::Success { movies } => {
                info!("Loaded {} movies", movies.len());
                self.set_movies(movies);
            }
            FetchResult::Failure { error } => {
                warn!("Movie fetch failed: {}", error);
                self.fetch_error = Some(error);
            }
        }
    }

    /// Replace the list; the carousel starts at the first movie
    pub fn set_movies(&mut self, movies: Vec<MovieRecord>) {
        self.display_list = Some(DisplayList::new(movies));
        self.fetch_error = None;
        self.images.clear();
        let bounds = self.bounds();
        self.scroll.jump_to(0.0, bounds);
        self.frame = None;
        self.refresh_frame();
    }

    /// Record a new carousel size, keeping the same movie centered
    pub fn set_viewport(&mut self, width: u16, height: u16) {
        if self.viewport == (width, height) {
            return;
        }
        let old_step = self.metrics().item_size;
        let slot = if old_step > 0.0 {
            self.scroll.current() / old_step
        } else {
            0.0
        };
        self.viewport = (width, height);
        // Card and backdrop sizes follow the viewport
        self.images.drop_rasters();

        let bounds = self.bounds();
        self.scroll.jump_to(slot * bounds.step, bounds);
        self.refresh_frame();
    }

    /// Advance the animator by one frame and re-derive transforms if needed
    pub fn update(&mut self) {
        let bounds = self.bounds();
        self.scroll.update(bounds);
        self.refresh_frame();
    }

    /// Recompute the frame when the offset or the viewport changed
    pub fn refresh_frame(&mut self) {
        let Some(list) = self.display_list.as_ref() else {
            self.frame = None;
            return;
        };
        let metrics = self.metrics();
        let stale = match &self.frame {
            Some(frame) => frame.metrics != metrics || self.offset.has_changed(),
            None => true,
        };
        if stale {
            let offset = self.offset.mark_seen();
            self.frame = Some(CarouselFrame::compute(list, metrics, offset));
        }
    }

    /// Display index of the centered movie
    pub fn centered_index(&self) -> Option<usize> {
        self.frame.as_ref().and_then(|f| f.centered)
    }

    pub fn centered_movie(&self) -> Option<&MovieRecord> {
        let index = self.centered_index()?;
        self.display_list.as_ref()?.get(index)?.movie()
    }

    /// Index whose snap point the carousel is heading to
    fn target_index(&self) -> Option<usize> {
        self.metrics()
            .centered_index(self.scroll.target(), self.movie_count())
    }

    pub fn next_item(&mut self) {
        if let Some(index) = self.target_index() {
            self.snap_to(index + 1);
        }
    }

    pub fn prev_item(&mut self) {
        if let Some(index) = self.target_index() {
            self.snap_to(index.saturating_sub(1).max(1));
        }
    }

    pub fn jump_to_first(&mut self) {
        if self.movie_count() > 0 {
            self.snap_to(1);
        }
    }

    pub fn jump_to_last(&mut self) {
        let count = self.movie_count();
        if count > 0 {
            self.snap_to(count);
        }
    }

    /// Free drag by a fraction of an item; `direction` is +1 or -1
    pub fn nudge(&mut self, direction: f64) {
        let step = self.metrics().item_size;
        self.scroll.scroll_by(direction * (step * NUDGE_FRACTION).max(1.0));
    }

    /// Free drag from the mouse wheel
    pub fn wheel(&mut self, notches: i32) {
        let delta = self.config.ui.scroll.wheel_delta(notches);
        self.scroll.scroll_by(delta);
    }

    fn snap_to(&mut self, display_index: usize) {
        let metrics = self.metrics();
        let bounds = self.bounds();
        self.scroll.scroll_to(metrics.snap_offset(display_index), bounds);
    }

    /// Whether the loop should poll at the animation frame rate
    pub fn needs_fast_update(&self) -> bool {
        self.scroll.needs_update()
    }

    /// Image URIs near the centered movie that were never requested
    pub fn images_to_load(&self) -> Vec<String> {
        if !self.config.ui.image_preview {
            return Vec::new();
        }
        let (Some(list), Some(center)) = (self.display_list.as_ref(), self.centered_index()) else {
            return Vec::new();
        };

        let first = center.saturating_sub(PRELOAD_RADIUS);
        let last = (center + PRELOAD_RADIUS).min(list.len() - 1);
        let mut uris = Vec::new();
        for index in first..=last {
            let Some(entry) = list.get(index) else { continue };
            for uri in [entry.poster(), entry.backdrop()].into_iter().flatten() {
                if self.images.is_unrequested(uri) && !uris.iter().any(|u| u == uri) {
                    uris.push(uri.to_string());
                }
            }
        }
        uris
    }

    pub fn handle_image_result(&mut self, result: ImageLoadResult) {
        match result {
            ImageLoadResult::Success { uri, image } => {
                debug!("Image loaded: {} ({}x{})", uri, image.width(), image.height());
                self.images.set_loaded(&uri, image);
            }
            ImageLoadResult::Failure { uri, error } => {
                debug!("Image failed: {}: {}", uri, error);
                self.images.set_failed(&uri, error);
            }
        }
    }

    pub fn tick_spinner(&mut self) {
        if self.is_fetching {
            self.spinner_frame = (self.spinner_frame + 1) % SPINNER_FRAMES.len();
        }
    }

    pub fn spinner(&self) -> &'static str {
        SPINNER_FRAMES[self.spinner_frame]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reelview_core::config::ScrollConfig;

    fn movie(key: &str) -> MovieRecord {
        MovieRecord {
            key: key.to_string(),
            title: format!("Movie {key}"),
            description: "A film".to_string(),
            rating: 7.0,
            genres: vec!["Drama".to_string()],
            poster: Some(format!("poster-{key}")),
            backdrop: Some(format!("backdrop-{key}")),
            release_date: None,
        }
    }

    fn app_with(count: usize) -> App {
        let mut config = AppConfig::default();
        config.ui.scroll = ScrollConfig {
            smooth_enabled: false,
            snap_delay_ms: 0,
            ..ScrollConfig::default()
        };
        config.ui.item_ratio = 0.5;
        let mut app = App::new(Arc::new(config), Theme::default());
        app.set_viewport(100, 40);
        app.set_movies((0..count).map(|i| movie(&i.to_string())).collect());
        app
    }

    #[test]
    fn test_initial_state() {
        let app = App::new(Arc::new(AppConfig::default()), Theme::default());
        assert!(app.needs_fetch());
        assert!(app.frame.is_none());
        assert!(app.centered_movie().is_none());
    }

    #[test]
    fn test_set_movies_centers_first() {
        let app = app_with(3);
        assert_eq!(app.centered_index(), Some(1));
        assert_eq!(app.centered_movie().map(|m| m.key.as_str()), Some("0"));
        assert!(!app.needs_fetch());
    }

    #[test]
    fn test_next_and_prev() {
        let mut app = app_with(3);
        app.next_item();
        app.update();
        assert_eq!(app.scroll.current(), 50.0);
        assert_eq!(app.centered_index(), Some(2));

        app.next_item();
        app.next_item();
        app.update();
        // No overscroll past the last movie
        assert_eq!(app.scroll.current(), 100.0);
        assert_eq!(app.centered_index(), Some(3));

        app.prev_item();
        app.update();
        assert_eq!(app.centered_index(), Some(2));
    }

    #[test]
    fn test_jump_first_last() {
        let mut app = app_with(5);
        app.jump_to_last();
        app.update();
        assert_eq!(app.centered_index(), Some(5));
        app.jump_to_first();
        app.update();
        assert_eq!(app.scroll.current(), 0.0);
    }

    #[test]
    fn test_nudge_snaps_back() {
        let mut app = app_with(3);
        app.nudge(1.0);
        app.update();
        assert!((app.scroll.current() - 12.5).abs() < 1e-9);
        // Idle past the zero snap delay
        app.update();
        assert_eq!(app.scroll.current(), 0.0);
    }

    #[test]
    fn test_frame_tracks_offset() {
        let mut app = app_with(3);
        app.next_item();
        app.update();
        let frame = app.frame.as_ref().unwrap();
        assert_eq!(frame.offset, 50.0);
        assert_eq!(frame.item(2).unwrap().translate_y, 50.0);
    }

    #[test]
    fn test_resize_keeps_centered_movie() {
        let mut app = app_with(4);
        app.jump_to_last();
        app.update();
        assert_eq!(app.centered_index(), Some(4));

        app.set_viewport(60, 30);
        assert_eq!(app.scroll.current(), 90.0);
        assert_eq!(app.centered_index(), Some(4));
    }

    #[test]
    fn test_resize_drops_stale_rasters() {
        let mut app = app_with(2);
        app.images
            .set_loaded("poster-0", image::DynamicImage::new_rgb8(4, 4));
        app.images.raster("poster-0", 20, 10);
        assert_eq!(app.images.raster_count(), 1);

        // Same size: nothing to redo
        app.set_viewport(100, 40);
        assert_eq!(app.images.raster_count(), 1);

        app.set_viewport(80, 30);
        assert_eq!(app.images.raster_count(), 0);
        assert!(app.images.raster("poster-0", 16, 8).is_some());
    }

    #[test]
    fn test_external_reader_sees_offset() {
        let mut app = app_with(3);
        let mut reader = app.offset_reader();
        reader.mark_seen();

        app.next_item();
        assert!(reader.has_changed());
        assert_eq!(reader.get(), 50.0);
    }

    #[test]
    fn test_images_to_load_window() {
        let mut app = app_with(6);
        let uris = app.images_to_load();
        // Center is display index 1: movies at 1..=3
        assert_eq!(
            uris,
            vec!["poster-0", "backdrop-0", "poster-1", "backdrop-1", "poster-2", "backdrop-2"]
        );

        for uri in &uris {
            app.images.start_loading(uri);
        }
        assert!(app.images_to_load().is_empty());
    }

    #[test]
    fn test_fetch_failure_keeps_loading_view() {
        let mut app = App::new(Arc::new(AppConfig::default()), Theme::default());
        app.start_fetch();
        app.handle_fetch_result(FetchResult::Failure {
            error: "timeout".to_string(),
        });
        assert!(app.display_list.is_none());
        assert_eq!(app.fetch_error.as_deref(), Some("timeout"));
        assert!(!app.needs_fetch());
    }
}
