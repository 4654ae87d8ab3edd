//! HTTP client for the character endpoints

use rickdex_core::prelude::*;
use rickdex_core::{Character, CharacterPage};
use serde::de::DeserializeOwned;
use url::Url;

use crate::endpoints::{character_collection_url, character_url};

/// Public Rick and Morty API
pub const DEFAULT_BASE_URL: &str = "https://rickandmortyapi.com/api";

const USER_AGENT: &str = concat!("rickdex/", env!("CARGO_PKG_VERSION"));

/// A source of character data.
///
/// The TUI spawns one task per fetch, so the `Send` variant
/// ([`CharacterSource`]) is the one implementations provide.
#[trait_variant::make(CharacterSource: Send)]
pub trait LocalCharacterSource {
    /// Fetch one page of the character collection (1-based)
    async fn fetch_page(&self, page: u32) -> Result<CharacterPage>;

    /// Fetch a single character by id
    async fn fetch_character(&self, id: u32) -> Result<Character>;
}

/// `reqwest`-backed client for the remote API
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: Url,
}

impl ApiClient {
    /// Create a client rooted at `base_url` (e.g. `https://rickandmortyapi.com/api`)
    pub fn new(base_url: &str) -> Result<Self> {
        let http = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| Error::config(format!("Failed to build HTTP client: {}", e)))?;

        Self::with_http_client(base_url, http)
    }

    /// Create a client that sends requests through a preconfigured `reqwest::Client`
    pub fn with_http_client(base_url: &str, http: reqwest::Client) -> Result<Self> {
        let base_url = Url::parse(base_url)
            .map_err(|e| Error::config(format!("Invalid API base URL '{}': {}", base_url, e)))?;
        if base_url.cannot_be_a_base() {
            return Err(Error::config(format!(
                "API base URL must be hierarchical: {}",
                base_url
            )));
        }

        Ok(Self { http, base_url })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// GET `url` and decode the body as `T`
    async fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<T> {
        debug!("GET {}", url);

        let response = self
            .http
            .get(url.clone())
            .send()
            .await
            .map_err(|e| Error::remote(format!("GET {}: {}", url, e)))?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::remote(format!("GET {}: HTTP {}", url, status)));
        }

        response
            .json::<T>()
            .await
            .map_err(|e| Error::remote(format!("GET {}: malformed payload: {}", url, e)))
    }
}

impl CharacterSource for ApiClient {
    async fn fetch_page(&self, page: u32) -> Result<CharacterPage> {
        let url = character_collection_url(&self.base_url, page)?;
        let page_data: CharacterPage = self.get_json(url).await?;
        trace!(
            "Page {} decoded: {} characters, {} pages total",
            page,
            page_data.results.len(),
            page_data.info.pages
        );
        Ok(page_data)
    }

    async fn fetch_character(&self, id: u32) -> Result<Character> {
        let url = character_url(&self.base_url, id)?;
        self.get_json(url).await
    }
}
