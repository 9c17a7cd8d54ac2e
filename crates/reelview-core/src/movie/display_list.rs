//! Padded list rendered by the carousel
//!
//! The fetched movies are wrapped between two empty sentinel entries so the
//! first and last movie can be centered under the viewport.

use super::models::MovieRecord;

pub const LEADING_SENTINEL_KEY: &str = "left_space";
pub const TRAILING_SENTINEL_KEY: &str = "right_side";

/// One slot of the carousel
#[derive(Debug, Clone, PartialEq)]
pub enum DisplayEntry {
    /// Blank spacer with no poster or backdrop
    Sentinel { key: &'static str },
    Movie(MovieRecord),
}

impl DisplayEntry {
    pub fn key(&self) -> &str {
        match self {
            DisplayEntry::Sentinel { key } => key,
            DisplayEntry::Movie(movie) => &movie.key,
        }
    }

    pub fn is_sentinel(&self) -> bool {
        matches!(self, DisplayEntry::Sentinel { .. })
    }

    pub fn movie(&self) -> Option<&MovieRecord> {
        match self {
            DisplayEntry::Movie(movie) => Some(movie),
            DisplayEntry::Sentinel { .. } => None,
        }
    }

    /// Poster URI; never present on a sentinel
    pub fn poster(&self) -> Option<&str> {
        self.movie().and_then(|m| m.poster.as_deref())
    }

    /// Backdrop URI; never present on a sentinel
    pub fn backdrop(&self) -> Option<&str> {
        self.movie().and_then(|m| m.backdrop.as_deref())
    }
}

/// Fetched movies padded with a leading and trailing sentinel
#[derive(Debug, Clone, PartialEq)]
pub struct DisplayList {
    entries: Vec<DisplayEntry>,
}

impl DisplayList {
    pub fn new(movies: Vec<MovieRecord>) -> Self {
        let mut entries = Vec::with_capacity(movies.len() + 2);
        entries.push(DisplayEntry::Sentinel {
            key: LEADING_SENTINEL_KEY,
        });
        entries.extend(movies.into_iter().map(DisplayEntry::Movie));
        entries.push(DisplayEntry::Sentinel {
            key: TRAILING_SENTINEL_KEY,
        });
        Self { entries }
    }

    /// Number of entries, sentinels included
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// A display list always holds its two sentinels
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Number of real movies
    pub fn movie_count(&self) -> usize {
        self.entries.len() - 2
    }

    pub fn get(&self, index: usize) -> Option<&DisplayEntry> {
        self.entries.get(index)
    }

    pub fn entries(&self) -> &[DisplayEntry] {
        &self.entries
    }

    pub fn iter(&self) -> impl Iterator<Item = (usize, &DisplayEntry)> {
        self.entries.iter().enumerate()
    }

    /// Movie entries with their display indices
    pub fn movies(&self) -> impl Iterator<Item = (usize, &MovieRecord)> {
        self.iter().filter_map(|(i, e)| e.movie().map(|m| (i, m)))
    }
}
