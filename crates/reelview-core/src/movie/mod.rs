mod display_list;
mod models;
mod provider;
mod tmdb;

pub use display_list::{DisplayEntry, DisplayList, LEADING_SENTINEL_KEY, TRAILING_SENTINEL_KEY};
pub use models::{MovieRecord, MAX_RATING};
pub use provider::{FileProvider, MovieProvider, StaticProvider};
pub use tmdb::{genre_name, TmdbProvider};
