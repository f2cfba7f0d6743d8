//! # OMDb lookup client
//!
//! Looks a movie up by exact title against the OMDb API (`GET ?t=<title>&apikey=<key>`) and decodes
//! the response into a [`Movie`]. Every failure is a [`LookupError`]; callers that do not care why a
//! lookup failed can treat any `Err` as "lookup failed" and use [`LookupError::kind`] for logging.
//!
//! ## Example
//!
//! ```rust,no_run
//! use omdb_client::{MovieLookup, OmdbClient};
//!
//! async fn example() {
//!     let client = OmdbClient::new("your-api-key".to_string());
//!     match client.lookup("Titanic").await {
//!         Ok(movie) => println!("{} ({})", movie.title, movie.year),
//!         Err(e) => eprintln!("lookup failed: {}", e),
//!     }
//! }
//! ```

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use thiserror::Error;
use tracing::{info, instrument, warn};

/// Default OMDb endpoint.
pub const OMDB_API_BASE: &str = "http://www.omdbapi.com/";

/// Placeholder OMDb uses for any missing value, including posters.
pub const NOT_AVAILABLE: &str = "N/A";

/// Masks an API key for logging. Keys of length ≤ 11 become `***`; longer keys keep the first 7 and last 4 chars.
pub fn mask_token(token: &str) -> String {
    let len = token.len();
    if len <= 11 || !token.is_ascii() {
        "***".to_string()
    } else {
        format!("{}***{}", &token[..7], &token[len - 4..])
    }
}

/// A successfully looked-up movie. Fields OMDb omitted are [`NOT_AVAILABLE`]; `poster` is the raw value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Movie {
    pub title: String,
    pub year: String,
    pub imdb_rating: String,
    pub genre: String,
    pub plot: String,
    pub director: String,
    pub poster: Option<String>,
}

/// Why a lookup failed.
#[derive(Error, Debug)]
pub enum LookupError {
    #[error("OMDb request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("OMDb returned HTTP {0}")]
    Status(StatusCode),

    #[error("Malformed OMDb response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("No match for '{title}': {reason}")]
    NoMatch { title: String, reason: String },
}

impl LookupError {
    /// Short label for structured logs.
    pub fn kind(&self) -> &'static str {
        match self {
            LookupError::Transport(_) => "transport",
            LookupError::Status(_) => "status",
            LookupError::Decode(_) => "decode",
            LookupError::NoMatch { .. } => "no_match",
        }
    }
}

/// Title lookup against a movie database. Implemented by [`OmdbClient`]; tests provide stubs.
#[async_trait]
pub trait MovieLookup: Send + Sync {
    /// Looks up exactly one title. One network round trip, no retry.
    async fn lookup(&self, title: &str) -> Result<Movie, LookupError>;
}

/// Wire shape of an OMDb `?t=` response. Only `Response` is guaranteed.
#[derive(Debug, Deserialize)]
struct OmdbResponse {
    #[serde(rename = "Response")]
    response: String,
    #[serde(rename = "Error")]
    error: Option<String>,
    #[serde(rename = "Title")]
    title: Option<String>,
    #[serde(rename = "Year")]
    year: Option<String>,
    #[serde(rename = "imdbRating")]
    imdb_rating: Option<String>,
    #[serde(rename = "Genre")]
    genre: Option<String>,
    #[serde(rename = "Plot")]
    plot: Option<String>,
    #[serde(rename = "Director")]
    director: Option<String>,
    #[serde(rename = "Poster")]
    poster: Option<String>,
}

impl OmdbResponse {
    fn into_movie(self, requested: &str) -> Result<Movie, LookupError> {
        if self.response != "True" {
            return Err(LookupError::NoMatch {
                title: requested.to_string(),
                reason: self.error.unwrap_or_else(|| "unknown error".to_string()),
            });
        }
        let or_na = |v: Option<String>| v.unwrap_or_else(|| NOT_AVAILABLE.to_string());
        Ok(Movie {
            title: or_na(self.title),
            year: or_na(self.year),
            imdb_rating: or_na(self.imdb_rating),
            genre: or_na(self.genre),
            plot: or_na(self.plot),
            director: or_na(self.director),
            poster: self.poster,
        })
    }
}

/// OMDb HTTP client. Cheap to clone; holds the key for the lifetime of the process.
#[derive(Debug, Clone)]
pub struct OmdbClient {
    client: Client,
    base_url: String,
    api_key: String,
}

impl OmdbClient {
    /// Creates a client against [`OMDB_API_BASE`].
    pub fn new(api_key: String) -> Self {
        Self {
            client: Client::new(),
            base_url: OMDB_API_BASE.to_string(),
            api_key,
        }
    }

    /// Points the client at a different endpoint (e.g. a mock server in tests).
    pub fn with_base_url(mut self, base_url: String) -> Self {
        self.base_url = base_url;
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[async_trait]
impl MovieLookup for OmdbClient {
    #[instrument(skip(self))]
    async fn lookup(&self, title: &str) -> Result<Movie, LookupError> {
        info!(
            base_url = %self.base_url,
            api_key = %mask_token(&self.api_key),
            "step: OMDb lookup request"
        );

        let response = self
            .client
            .get(&self.base_url)
            .query(&[("t", title), ("apikey", self.api_key.as_str())])
            .send()
            .await?;
        let status = response.status();
        let body = response.text().await?;

        // OMDb reports a bad key as 401 with a regular `Response: False` body, so try the body first.
        let parsed: OmdbResponse = match serde_json::from_str(&body) {
            Ok(parsed) => parsed,
            Err(_) if !status.is_success() => return Err(LookupError::Status(status)),
            Err(e) => return Err(LookupError::Decode(e)),
        };

        let result = parsed.into_movie(title);
        match &result {
            Ok(movie) => info!(found = %movie.title, year = %movie.year, "step: OMDb lookup done"),
            Err(e) => warn!(error = %e, kind = e.kind(), "step: OMDb lookup failed"),
        }
        result
    }
}
