//! HTTP client for the PokeAPI.

use pokedex_types::{Document, RosterRef};
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::time::Duration;
use thiserror::Error;

use crate::roster::{GenerationResponse, PokedexResponse};
use crate::url::{self, BASE_URL};

/// Configuration for the PokeAPI client.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the API, without a trailing slash.
    pub base_url: String,
    /// Request timeout.
    pub timeout: Duration,
    /// User agent string.
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: BASE_URL.to_string(),
            timeout: Duration::from_secs(60),
            user_agent: format!("pokedex/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

/// Errors that can occur while fetching from the PokeAPI.
#[derive(Error, Debug)]
pub enum FetchError {
    /// HTTP request failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Server returned a non-success status.
    #[error("Server returned {status} for {url}")]
    Status {
        /// The requested URL.
        url: String,
        /// HTTP status code.
        status: u16,
    },

    /// Response body was not valid JSON for the expected shape.
    #[error("Malformed payload from {url}: {source}")]
    Decode {
        /// The requested URL.
        url: String,
        /// The underlying JSON error.
        source: serde_json::Error,
    },

    /// Response body was JSON but not an object.
    #[error("Payload from {url} is not a JSON object")]
    NotAnObject {
        /// The requested URL.
        url: String,
    },
}

/// Result type for fetch operations.
pub type Result<T> = std::result::Result<T, FetchError>;

/// HTTP client for rosters and entity payloads.
///
/// Every call is a single GET. Failures are returned, never retried.
#[derive(Debug, Clone)]
pub struct PokeApiClient {
    client: Client,
    config: ClientConfig,
}

impl PokeApiClient {
    /// Creates a new client with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be created.
    pub fn new(config: ClientConfig) -> std::result::Result<Self, reqwest::Error> {
        let client = Client::builder()
            .timeout(config.timeout)
            .connect_timeout(Duration::from_secs(10))
            .user_agent(&config.user_agent)
            .gzip(true)
            .build()?;
        Ok(Self { client, config })
    }

    /// Creates a client with default configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be created.
    pub fn with_defaults() -> std::result::Result<Self, reqwest::Error> {
        Self::new(ClientConfig::default())
    }

    /// Returns the client configuration.
    #[must_use]
    pub const fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Fetches the entries of a regional Pokédex, in entry order.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the payload is malformed.
    pub async fn pokedex_roster(&self, pokedex_id: u32) -> Result<Vec<RosterRef>> {
        let url = url::pokedex_url(&self.config.base_url, pokedex_id);
        let response: PokedexResponse = self.get_json(&url).await?;
        Ok(response.into_roster())
    }

    /// Fetches the moves introduced in a generation.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the payload is malformed.
    pub async fn generation_moves(&self, generation: u32) -> Result<Vec<RosterRef>> {
        let url = url::generation_url(&self.config.base_url, generation);
        let response: GenerationResponse = self.get_json(&url).await?;
        Ok(response.into_roster())
    }

    /// Fetches a Pokémon's full detail record by name.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the payload is not a JSON object.
    pub async fn pokemon_document(&self, name: &str) -> Result<Document> {
        let url = url::pokemon_url(&self.config.base_url, name);
        self.fetch_document(&url).await
    }

    /// Fetches any entity payload as a generic document.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the payload is not a JSON object.
    pub async fn fetch_document(&self, url: &str) -> Result<Document> {
        match self.get_json::<Value>(url).await? {
            Value::Object(document) => Ok(document),
            _ => Err(FetchError::NotAnObject {
                url: url.to_string(),
            }),
        }
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        let response = self.client.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let body = response.bytes().await?;
        serde_json::from_slice(&body).map_err(|source| FetchError::Decode {
            url: url.to_string(),
            source,
        })
    }
}
