use std::path::PathBuf;

use anyhow::Result;
use tracing::info;

use reelview_core::AppConfig;

use super::build_provider;

pub async fn run(config: &AppConfig, movies: Option<PathBuf>) -> Result<()> {
    let provider = build_provider(config, movies)?;
    info!("Fetching movies from {}", provider.name());
    let movies = provider.fetch_movies().await?;

    if movies.is_empty() {
        println!("No movies returned by {}.", provider.name());
        return Ok(());
    }

    println!("Movies ({}):\n", movies.len());

    for movie in &movies {
        let year = movie
            .release_year()
            .map(|y| format!(" ({})", y))
            .unwrap_or_default();

        println!("  {}{} - {:.1}/10", movie.title, year, movie.clamped_rating());
        if !movie.genres.is_empty() {
            println!("    {}", movie.genres.join(", "));
        }
        if let Some(poster) = &movie.poster {
            println!("    Poster: {}", poster);
        }
        println!();
    }

    Ok(())
}
