use thiserror::Error;

/// Errors raised by configuration, providers and motion math
#[derive(Error, Debug)]
pub enum Error {
    #[error("Request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Bad URL: {0}")]
    UrlParse(#[from] url::ParseError),

    #[error("Malformed JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Movie provider error: {0}")]
    Provider(String),

    #[error("Invalid interpolation: {0}")]
    Interpolation(String),

    #[error("{0}")]
    Other(String),
}

pub type Result<T> = std::result::Result<T, Error>;
