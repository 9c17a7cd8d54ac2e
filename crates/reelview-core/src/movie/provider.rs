use std::path::PathBuf;

use super::models::MovieRecord;
use crate::{Error, Result};

/// Source of the movie list shown by the carousel
#[async_trait::async_trait]
pub trait MovieProvider: Send + Sync {
    /// Short name used in logs and the status bar
    fn name(&self) -> &str;

    /// Fetch the ordered movie list
    async fn fetch_movies(&self) -> Result<Vec<MovieRecord>>;
}

/// Reads a JSON array of movie records from disk
pub struct FileProvider {
    path: PathBuf,
}

impl FileProvider {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait::async_trait]
impl MovieProvider for FileProvider {
    fn name(&self) -> &str {
        "file"
    }

    async fn fetch_movies(&self) -> Result<Vec<MovieRecord>> {
        let content = tokio::fs::read_to_string(&self.path).await?;
        let movies: Vec<MovieRecord> = serde_json::from_str(&content)?;
        tracing::debug!(path = %self.path.display(), count = movies.len(), "Loaded movies from file");
        Ok(movies)
    }
}

/// Serves a fixed list, or a fixed error
pub struct StaticProvider {
    movies: std::result::Result<Vec<MovieRecord>, String>,
}

impl StaticProvider {
    pub fn new(movies: Vec<MovieRecord>) -> Self {
        Self { movies: Ok(movies) }
    }

    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            movies: Err(message.into()),
        }
    }
}

#[async_trait::async_trait]
impl MovieProvider for StaticProvider {
    fn name(&self) -> &str {
        "static"
    }

    async fn fetch_movies(&self) -> Result<Vec<MovieRecord>> {
        self.movies.clone().map_err(Error::Provider)
    }
}
