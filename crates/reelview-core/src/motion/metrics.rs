use crate::config::{is_valid_ratio, UiConfig};
use crate::movie::DisplayEntry;

/// Default share of the viewport taken by one item
pub const DEFAULT_ITEM_RATIO: f64 = 0.72;
/// Default share of the viewport height taken by the backdrop
pub const DEFAULT_BACKDROP_RATIO: f64 = 0.65;

/// Carousel geometry derived from the viewport, in terminal cells
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CarouselMetrics {
    pub viewport_width: f64,
    pub viewport_height: f64,
    /// Width of one movie item (ITEM_SIZE)
    pub item_size: f64,
    /// Width of a spacer (sentinels and movies without a poster)
    pub empty_item_size: f64,
    pub backdrop_height: f64,
}

impl CarouselMetrics {
    pub fn new(viewport_width: f64, viewport_height: f64, item_ratio: f64, backdrop_ratio: f64) -> Self {
        let item_ratio = sanitize_ratio(item_ratio, DEFAULT_ITEM_RATIO);
        let backdrop_ratio = sanitize_ratio(backdrop_ratio, DEFAULT_BACKDROP_RATIO);
        let viewport_width = viewport_width.max(0.0);
        let viewport_height = viewport_height.max(0.0);
        let item_size = viewport_width * item_ratio;

        Self {
            viewport_width,
            viewport_height,
            item_size,
            empty_item_size: (viewport_width - item_size) / 2.0,
            backdrop_height: viewport_height * backdrop_ratio,
        }
    }

    /// Metrics for a terminal area using the configured ratios
    pub fn from_ui_config(width: u16, height: u16, ui: &UiConfig) -> Self {
        Self::new(width as f64, height as f64, ui.item_ratio, ui.backdrop_ratio)
    }

    /// Columns an entry takes in the list; only poster cards are full width
    pub fn entry_width(&self, entry: &DisplayEntry) -> f64 {
        if entry.poster().is_some() {
            self.item_size
        } else {
            self.empty_item_size
        }
    }

    /// Offset at which the movie at `index` is centered
    pub fn snap_offset(&self, index: usize) -> f64 {
        index.saturating_sub(1) as f64 * self.item_size
    }

    /// Largest reachable offset for `movie_count` movies (no overscroll)
    pub fn max_offset(&self, movie_count: usize) -> f64 {
        movie_count.saturating_sub(1) as f64 * self.item_size
    }

    /// Display index of the movie closest to the center at `offset`
    pub fn centered_index(&self, offset: f64, movie_count: usize) -> Option<usize> {
        if movie_count == 0 || self.item_size <= 0.0 {
            return None;
        }
        let slot = (offset / self.item_size).round().max(0.0) as usize;
        Some(slot.min(movie_count - 1) + 1)
    }

    /// Nearest snap point to `offset`, within `[0, max_offset]`
    pub fn nearest_snap(&self, offset: f64, movie_count: usize) -> f64 {
        match self.centered_index(offset, movie_count) {
            Some(index) => self.snap_offset(index),
            None => 0.0,
        }
    }
}

/// Config loading already warned about bad ratios; stay quiet here
fn sanitize_ratio(ratio: f64, fallback: f64) -> f64 {
    if is_valid_ratio(ratio) {
        ratio
    } else {
        fallback
    }
}
