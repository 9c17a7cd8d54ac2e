pub mod config;
pub mod list;
pub mod run;

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{anyhow, Result};
use reelview_core::movie::{FileProvider, TmdbProvider};
use reelview_core::{AppConfig, MovieProvider};

/// The JSON file when one is given, the TMDB API otherwise
pub fn build_provider(config: &AppConfig, movies: Option<PathBuf>) -> Result<Arc<dyn MovieProvider>> {
    if let Some(path) = movies {
        return Ok(Arc::new(FileProvider::new(path)));
    }

    TmdbProvider::new(&config.provider)
        .map(|p| Arc::new(p) as Arc<dyn MovieProvider>)
        .map_err(|e| {
            anyhow!(
                "{}\nSet provider.api_key in {} or pass --movies FILE.",
                e,
                AppConfig::config_path().display()
            )
        })
}
