//! Asynchronous fetch/shape core for a SWAPI-style REST API.
//!
//! # Overview
//! Fetches the root resource index, category collections, and arbitrary
//! entity URLs, then shapes raw records into display-ready cards. The UI
//! layer owns rendering and interaction; this crate owns the data-fetch and
//! data-shape contract only.
//!
//! # Design
//! - `SwapiClient` is stateless — it holds `base_url` plus two injected
//!   seams: a `Transport` (the network primitive) and a `RandomSource` (the
//!   film-selection draw). Tests substitute both deterministically.
//! - Every fetch owns its request/response pair; batch fetches run
//!   concurrently but share nothing.
//! - `card_cleaner` is a pure function, kept apart from the client so it can
//!   be exercised without any transport at all.

pub mod client;
pub mod error;
pub mod random;
pub mod shaper;
pub mod transport;
pub mod types;

pub use client::{Fetched, SwapiClient, UrlSelector};
pub use error::ApiError;
pub use random::{FixedRandom, RandomSource, ThreadRandom};
pub use shaper::{card_cleaner, Card, Category};
pub use transport::{HttpResponse, Transport, TransportError, UreqTransport};
pub use types::{Film, FilmCrawl, Page, ResourceIndex};
