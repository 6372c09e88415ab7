//! Catalog API Client
//!
//! Fetches PokeAPI resources through the response cache. A cache hit is
//! treated exactly like re-fetching the same payload over the network.

use std::sync::Arc;

use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::cache::ResponseCache;
use crate::error::{PokedexError, Result};
use crate::models::{LocationArea, LocationAreaPage, Pokemon};

/// Client for the catalog API with a shared response cache in front of it.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: Client,
    cache: Arc<ResponseCache>,
    base_url: String,
    page_size: usize,
}

impl ApiClient {
    /// Creates a new client rooted at `base_url`.
    ///
    /// # Arguments
    /// * `base_url` - API root such as `https://pokeapi.co/api/v2`
    /// * `cache` - Response cache shared with anything else hitting the same API
    pub fn new(base_url: impl Into<String>, cache: Arc<ResponseCache>) -> Self {
        Self::with_client(Client::new(), base_url, cache)
    }

    /// Creates a new client with a custom HTTP client.
    pub fn with_client(http: Client, base_url: impl Into<String>, cache: Arc<ResponseCache>) -> Self {
        Self {
            http,
            cache,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            page_size: 20,
        }
    }

    /// Sets how many location areas a listing page holds.
    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size;
        self
    }

    /// Returns the response cache backing this client.
    pub fn cache(&self) -> &ResponseCache {
        &self.cache
    }

    /// URL of the first page of the location area listing.
    pub fn first_page_url(&self) -> String {
        format!(
            "{}/location-area?offset=0&limit={}",
            self.base_url, self.page_size
        )
    }

    // == Fetch ==
    /// Returns the raw payload for `url`, from the cache when possible.
    ///
    /// On a miss the URL is fetched and a 200 body is cached under the exact
    /// URL string before being returned. Failed responses are never cached.
    ///
    /// # Errors
    /// * `Http` if the request or body read fails
    /// * `Status` if the server answers with anything but 200
    pub async fn fetch(&self, url: &str) -> Result<Vec<u8>> {
        if let Some(body) = self.cache.get(url).await {
            debug!("Cache hit: {}", url);
            return Ok(body);
        }
        debug!("Cache miss: {}", url);

        let response = self.http.get(url).send().await?;
        let status = response.status();
        if status != StatusCode::OK {
            return Err(PokedexError::Status {
                url: url.to_string(),
                status,
            });
        }

        let body = response.bytes().await?;
        self.cache.add(url, &body).await;
        Ok(body.to_vec())
    }

    /// Fetches `url` and decodes the JSON payload.
    async fn fetch_json<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        let body = self.fetch(url).await?;
        Ok(serde_json::from_slice(&body)?)
    }

    /// Fetches one page of the location area listing.
    ///
    /// `url` is either [`ApiClient::first_page_url`] or a `next`/`previous`
    /// link taken from an earlier page.
    pub async fn location_areas(&self, url: &str) -> Result<LocationAreaPage> {
        self.fetch_json(url).await
    }

    /// Fetches a single location area by name or id.
    pub async fn location_area(&self, name: &str) -> Result<LocationArea> {
        let url = format!("{}/location-area/{}", self.base_url, name);
        self.fetch_json(&url).await
    }

    /// Fetches a Pokemon by name or id.
    pub async fn pokemon(&self, name: &str) -> Result<Pokemon> {
        let url = format!("{}/pokemon/{}", self.base_url, name);
        self.fetch_json(&url).await
    }
}
