//! Wire types for the SWAPI endpoints.
//!
//! # Design
//! List endpoints all share the `Page` envelope, but the records inside vary
//! per category, so `results` stays `serde_json::Value` until the shaper (or
//! a typed extraction like `Film`) narrows it. These types mirror the
//! mock-server's schema but are defined independently; integration tests
//! catch drift between the two crates.

use serde::{Deserialize, Serialize};

/// The root index: one collection URL per category. Fetched once at startup
/// and read-only thereafter.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ResourceIndex {
    pub films: String,
    pub people: String,
    pub planets: String,
    pub species: String,
    pub vehicles: String,
    pub starships: String,
}

/// Envelope returned by every list endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct Page {
    pub count: u64,
    #[serde(default)]
    pub next: Option<String>,
    #[serde(default)]
    pub previous: Option<String>,
    pub results: Vec<serde_json::Value>,
}

/// The film-record subset needed to build a crawl.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct Film {
    pub title: String,
    pub episode_id: i64,
    pub opening_crawl: String,
}

/// A film's opening text plus enough metadata to caption it.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct FilmCrawl {
    pub crawl: String,
    pub title: String,
    pub episode: i64,
}
