use std::time::Duration;

use chrono::NaiveDate;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, USER_AGENT};
use reqwest::{Client, Proxy};
use serde::Deserialize;
use url::Url;

use super::models::MovieRecord;
use super::provider::MovieProvider;
use crate::config::ProviderConfig;
use crate::{Error, Result};

const DISCOVER_PATH: &str = "discover/movie";
const SORT_BY: &str = "popularity.desc";

/// TMDB movie genre ids
const GENRES: &[(u32, &str)] = &[
    (12, "Adventure"),
    (14, "Fantasy"),
    (16, "Animation"),
    (18, "Drama"),
    (27, "Horror"),
    (28, "Action"),
    (35, "Comedy"),
    (36, "History"),
    (37, "Western"),
    (53, "Thriller"),
    (80, "Crime"),
    (99, "Documentary"),
    (878, "Science Fiction"),
    (9648, "Mystery"),
    (10402, "Music"),
    (10749, "Romance"),
    (10751, "Family"),
    (10752, "War"),
    (10770, "TV Movie"),
];

/// Look up a genre name by TMDB id
pub fn genre_name(id: u32) -> Option<&'static str> {
    GENRES
        .iter()
        .find(|(genre_id, _)| *genre_id == id)
        .map(|(_, name)| *name)
}

#[derive(Debug, Deserialize)]
struct DiscoverResponse {
    #[serde(default)]
    results: Vec<TmdbMovie>,
}

#[derive(Debug, Deserialize)]
struct TmdbMovie {
    id: u64,
    #[serde(default)]
    original_title: Option<String>,
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    overview: String,
    #[serde(default)]
    vote_average: f64,
    #[serde(default)]
    genre_ids: Vec<u32>,
    #[serde(default)]
    poster_path: Option<String>,
    #[serde(default)]
    backdrop_path: Option<String>,
    #[serde(default)]
    release_date: Option<String>,
}

/// Fetches popular movies from a TMDB-compatible API
pub struct TmdbProvider {
    client: Client,
    api_base_url: String,
    api_key: String,
    language: Option<String>,
    poster_base_url: String,
    backdrop_base_url: String,
}

impl TmdbProvider {
    /// Create a provider from configuration; fails without an API key
    pub fn new(config: &ProviderConfig) -> Result<Self> {
        let api_key = config
            .api_key
            .clone()
            .filter(|k| !k.trim().is_empty())
            .ok_or_else(|| {
                Error::Config("provider.api_key is not set (or pass --movies FILE)".to_string())
            })?;

        let client = Self::build_client(config.request_timeout_secs, &config.proxy_url)?;

        Ok(Self {
            client,
            api_base_url: config.api_base_url.clone(),
            api_key,
            language: config.language.clone(),
            poster_base_url: config.poster_base_url.clone(),
            backdrop_base_url: config.backdrop_base_url.clone(),
        })
    }

    /// Build HTTP client with optional proxy
    fn build_client(timeout_secs: u64, proxy_url: &Option<String>) -> Result<Client> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers.insert(
            USER_AGENT,
            HeaderValue::from_static(concat!("reelview/", env!("CARGO_PKG_VERSION"))),
        );

        let mut builder = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .default_headers(headers)
            .gzip(true)
            .redirect(reqwest::redirect::Policy::limited(10));

        if let Some(ref proxy) = proxy_url {
            let proxy = Proxy::all(proxy)
                .map_err(|e| Error::Config(format!("Invalid proxy URL: {}", e)))?;
            builder = builder.proxy(proxy);
            tracing::info!("Using HTTP proxy for movie requests");
        }

        builder.build().map_err(Error::Http)
    }

    /// URL of the discover endpoint with query parameters
    pub fn discover_url(&self) -> Result<Url> {
        let base = format!("{}/", self.api_base_url.trim_end_matches('/'));
        let mut url = Url::parse(&base)?.join(DISCOVER_PATH)?;
        {
            let mut query = url.query_pairs_mut();
            query.append_pair("api_key", &self.api_key);
            query.append_pair("sort_by", SORT_BY);
            if let Some(ref language) = self.language {
                query.append_pair("language", language);
            }
        }
        Ok(url)
    }

    /// Map a discover response body to movie records
    pub fn parse_response(&self, body: &str) -> Result<Vec<MovieRecord>> {
        let response: DiscoverResponse = serde_json::from_str(body)?;
        Ok(response
            .results
            .into_iter()
            .map(|movie| self.to_record(movie))
            .collect())
    }

    fn to_record(&self, movie: TmdbMovie) -> MovieRecord {
        let title = movie
            .original_title
            .or(movie.title)
            .unwrap_or_else(|| format!("#{}", movie.id));

        MovieRecord {
            key: movie.id.to_string(),
            title,
            description: movie.overview,
            rating: movie.vote_average,
            genres: movie
                .genre_ids
                .iter()
                .filter_map(|id| genre_name(*id))
                .map(str::to_string)
                .collect(),
            poster: movie
                .poster_path
                .map(|path| join_image_url(&self.poster_base_url, &path)),
            backdrop: movie
                .backdrop_path
                .map(|path| join_image_url(&self.backdrop_base_url, &path)),
            release_date: movie
                .release_date
                .and_then(|d| NaiveDate::parse_from_str(&d, "%Y-%m-%d").ok()),
        }
    }
}

fn join_image_url(base: &str, path: &str) -> String {
    format!("{}/{}", base.trim_end_matches('/'), path.trim_start_matches('/'))
}

#[async_trait::async_trait]
impl MovieProvider for TmdbProvider {
    fn name(&self) -> &str {
        "tmdb"
    }

    async fn fetch_movies(&self) -> Result<Vec<MovieRecord>> {
        let url = self.discover_url()?;
        tracing::debug!(endpoint = DISCOVER_PATH, "Fetching movies");

        let response = self.client.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(Error::Provider(format!("HTTP {}", status)));
        }

        let body = response.text().await?;
        let movies = self.parse_response(&body)?;
        tracing::info!(count = movies.len(), "Fetched movies");
        Ok(movies)
    }
}
