//! Derived transforms for one scroll offset
//!
//! The renderer recomputes a `CarouselFrame` whenever the offset or the
//! viewport changes and draws from it, so the mapping stays testable on its
//! own.

use super::mapper::{arc_translate_y, backdrop_reveal_width};
use super::metrics::CarouselMetrics;
use crate::movie::DisplayList;

/// Arc position of one poster card
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ItemTransform {
    pub index: usize,
    pub translate_y: f64,
}

/// Reveal width of one backdrop (unclamped)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BackdropReveal {
    pub index: usize,
    pub width: f64,
}

impl BackdropReveal {
    /// Width actually drawn inside a viewport of `viewport_width` cells
    pub fn visible_width(&self, viewport_width: f64) -> f64 {
        if self.width.is_nan() {
            return 0.0;
        }
        self.width.clamp(0.0, viewport_width.max(0.0))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CarouselFrame {
    pub offset: f64,
    pub metrics: CarouselMetrics,
    /// One entry per movie that has a poster, in display order
    pub items: Vec<ItemTransform>,
    /// One entry per movie that has a backdrop, in display (stacking) order
    pub backdrops: Vec<BackdropReveal>,
    /// Display index of the movie nearest the center
    pub centered: Option<usize>,
    /// Left edge of each entry in content coordinates, plus the total width
    lefts: Vec<f64>,
}

impl CarouselFrame {
    pub fn compute(list: &DisplayList, metrics: CarouselMetrics, offset: f64) -> Self {
        let items = list
            .iter()
            .filter(|(_, entry)| entry.poster().is_some())
            .map(|(index, _)| ItemTransform {
                index,
                translate_y: arc_translate_y(index, offset, &metrics),
            })
            .collect();

        let backdrops = list
            .iter()
            .filter(|(_, entry)| entry.backdrop().is_some())
            .map(|(index, _)| BackdropReveal {
                index,
                width: backdrop_reveal_width(index, offset, &metrics),
            })
            .collect();

        let mut lefts = Vec::with_capacity(list.len() + 1);
        let mut x = 0.0;
        lefts.push(x);
        for (_, entry) in list.iter() {
            x += metrics.entry_width(entry);
            lefts.push(x);
        }

        Self {
            offset,
            metrics,
            items,
            backdrops,
            centered: metrics.centered_index(offset, list.movie_count()),
            lefts,
        }
    }

    /// Arc translation for a display index, if that entry is animated
    pub fn item(&self, index: usize) -> Option<&ItemTransform> {
        self.items.iter().find(|t| t.index == index)
    }

    pub fn backdrop(&self, index: usize) -> Option<&BackdropReveal> {
        self.backdrops.iter().find(|b| b.index == index)
    }

    /// Screen x of a display entry's left edge; past the end means the list end
    pub fn screen_x(&self, index: usize) -> f64 {
        let last = self.lefts.len().saturating_sub(1);
        self.lefts.get(index.min(last)).copied().unwrap_or(0.0) - self.offset
    }
}
