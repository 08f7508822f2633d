//! The fetch layer: GET, parse, select, shape.
//!
//! # Design
//! `SwapiClient` holds `base_url` plus the two injected seams (transport and
//! random source) and no mutable state; every call owns its request/response
//! pair, so concurrent calls never contend. All failures propagate to the
//! caller as `ApiError` — no retries, no local recovery.

use futures::future;

use crate::error::ApiError;
use crate::random::RandomSource;
use crate::shaper::{card_cleaner, Card, Category};
use crate::transport::Transport;
use crate::types::{Film, FilmCrawl, Page, ResourceIndex};

/// One URL or an ordered batch of URLs for `fetch_property`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UrlSelector {
    Single(String),
    Many(Vec<String>),
}

impl From<&str> for UrlSelector {
    fn from(url: &str) -> Self {
        UrlSelector::Single(url.to_string())
    }
}

impl From<String> for UrlSelector {
    fn from(url: String) -> Self {
        UrlSelector::Single(url)
    }
}

impl From<Vec<String>> for UrlSelector {
    fn from(urls: Vec<String>) -> Self {
        UrlSelector::Many(urls)
    }
}

impl From<&[String]> for UrlSelector {
    fn from(urls: &[String]) -> Self {
        UrlSelector::Many(urls.to_vec())
    }
}

/// Result of `fetch_property`, mirroring the shape of its input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Fetched {
    One(serde_json::Value),
    Many(Vec<serde_json::Value>),
}

/// Client for the SWAPI-shaped REST API.
#[derive(Debug, Clone)]
pub struct SwapiClient<T, R> {
    base_url: String,
    transport: T,
    random: R,
}

impl<T: Transport, R: RandomSource> SwapiClient<T, R> {
    pub fn new(base_url: &str, transport: T, random: R) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            transport,
            random,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// GET `url` verbatim and parse the body as JSON.
    pub async fn fetch_data(&self, url: &str) -> Result<serde_json::Value, ApiError> {
        log::debug!("GET {url}");
        let response = self.transport.get(url).await?;
        if !(200..300).contains(&response.status) {
            log::warn!("GET {url} returned {}", response.status);
            return Err(ApiError::Http {
                status: response.status,
                body: response.body,
            });
        }
        serde_json::from_str(&response.body).map_err(|e| ApiError::Parse(e.to_string()))
    }

    /// Fetch the root index mapping each category to its collection URL.
    pub async fn fetch_resource_index(&self) -> Result<ResourceIndex, ApiError> {
        let body = self.fetch_data(&self.base_url).await?;
        serde_json::from_value(body).map_err(|e| ApiError::Parse(e.to_string()))
    }

    /// Fetch the films collection and return the crawl of one film chosen
    /// uniformly at random.
    pub async fn get_random_film_crawl(&self) -> Result<FilmCrawl, ApiError> {
        let url = format!("{}/films", self.base_url);
        let body = self.fetch_data(&url).await?;
        let page: Page =
            serde_json::from_value(body).map_err(|e| ApiError::Parse(e.to_string()))?;
        if page.results.is_empty() {
            return Err(ApiError::EmptyCollection);
        }

        // Any draw in [0, 1) lands the index inside the list.
        let index = (self.random.next() * page.results.len() as f64).floor() as usize;
        let film: Film = serde_json::from_value(page.results[index].clone())
            .map_err(|e| ApiError::Parse(e.to_string()))?;
        Ok(FilmCrawl {
            crawl: film.opening_crawl,
            title: film.title,
            episode: film.episode_id,
        })
    }

    /// Fetch the collection for a bare category name and shape its records
    /// into display-ready cards.
    ///
    /// An unrecognized selection fails before any network call.
    pub async fn fetch_by_menu(&self, selection: &str) -> Result<Vec<Card>, ApiError> {
        let category: Category = selection.parse()?;
        let url = format!("{}/{}", self.base_url, category.as_str());
        let body = self.fetch_data(&url).await?;
        let page: Page =
            serde_json::from_value(body).map_err(|e| ApiError::Parse(e.to_string()))?;
        card_cleaner(&page.results, category)
    }

    /// Resolve one URL, or an ordered batch of URLs, to parsed bodies.
    ///
    /// A single URL behaves exactly like `fetch_data`. A batch issues one
    /// independent fetch per URL concurrently and returns the bodies in input
    /// order regardless of completion order; the first failure rejects the
    /// whole call, so there is no partial success.
    pub async fn fetch_property(
        &self,
        urls: impl Into<UrlSelector>,
    ) -> Result<Fetched, ApiError> {
        match urls.into() {
            UrlSelector::Single(url) => self.fetch_data(&url).await.map(Fetched::One),
            UrlSelector::Many(urls) => {
                let fetches = urls.iter().map(|url| self.fetch_data(url));
                let bodies = future::try_join_all(fetches).await?;
                Ok(Fetched::Many(bodies))
            }
        }
    }
}
