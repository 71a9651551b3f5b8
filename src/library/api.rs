use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::config::Config;
use crate::constants::service::{LIBRARY_ROUTE, LYRICS_ROUTE};
use crate::error::{Error, Result};
use crate::library::types::{LibraryListing, LyricsResult};

/// Read access to a music-library service.
///
/// The scanner only talks to the service through this trait, so any source
/// of tracks and lyrics can stand in for the HTTP client.
#[async_trait]
pub trait LibraryApi: Send + Sync {
    /// Fetch the library listing, in the service's order
    async fn fetch_library(&self) -> Result<LibraryListing>;

    /// Fetch lyrics for the track stored at `path`
    async fn fetch_lyrics(&self, path: &str) -> Result<LyricsResult>;
}

/// Client for the library service's HTTP API
#[derive(Clone)]
pub struct LibraryClient {
    base_url: String,
    client: Client,
}

impl LibraryClient {
    /// Create a new library client from config
    pub fn new(config: &Config) -> Self {
        Self {
            base_url: config.base_url(),
            client: Client::builder()
                .timeout(config.request_timeout)
                .build()
                .unwrap_or_default(),
        }
    }

    /// Base URL requests are issued against
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Full lyrics URL for a track path.
    ///
    /// The path is embedded as a single segment, so every reserved character
    /// including `/` is percent-encoded.
    pub fn lyrics_url(&self, path: &str) -> String {
        format!("{}{}{}", self.base_url, LYRICS_ROUTE, urlencoding::encode(path))
    }

    /// Make a GET request and decode the JSON body
    async fn get<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        tracing::debug!("GET {url}");
        let resp = self.client
            .get(url)
            .send()
            .await
            .map_err(|e| Error::Network(format!("Request to {url} failed: {e}")))?;

        let status = resp.status();
        if !status.is_success() {
            return Err(Error::status(
                format!("Request to {url} returned {status}"),
                status.as_u16(),
            ));
        }

        resp.json().await
            .map_err(|e| Error::parse(format!("Invalid JSON from {url}: {e}")))
    }
}

#[async_trait]
impl LibraryApi for LibraryClient {
    async fn fetch_library(&self) -> Result<LibraryListing> {
        let url = format!("{}{}", self.base_url, LIBRARY_ROUTE);
        let body: Value = self.get(&url).await?;
        LibraryListing::from_body(&body)
    }

    async fn fetch_lyrics(&self, path: &str) -> Result<LyricsResult> {
        let url = self.lyrics_url(path);
        self.get(&url).await
    }
}
