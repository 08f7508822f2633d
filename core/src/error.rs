//! Error types for the SWAPI fetch layer.
//!
//! # Design
//! `EmptyCollection` and `UnknownCategory` get dedicated variants because
//! callers hit them before or instead of any HTTP failure and react
//! differently (re-roll the crawl vs. reject the menu selection). All
//! non-2xx responses land in `Http` with the raw status code and body for
//! debugging.

use std::fmt;

/// Errors returned by `SwapiClient` operations.
#[derive(Debug)]
pub enum ApiError {
    /// The transport failed before a response was produced.
    Network(String),

    /// The server returned a non-2xx status.
    Http { status: u16, body: String },

    /// The response body could not be parsed into the expected shape.
    Parse(String),

    /// Random selection was attempted over an empty results list.
    EmptyCollection,

    /// The menu selection does not name one of the known categories.
    UnknownCategory(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Network(msg) => write!(f, "network failure: {msg}"),
            ApiError::Http { status, body } => {
                write!(f, "HTTP {status}: {body}")
            }
            ApiError::Parse(msg) => write!(f, "parse failed: {msg}"),
            ApiError::EmptyCollection => write!(f, "collection has no results"),
            ApiError::UnknownCategory(name) => {
                write!(f, "unknown category: {name}")
            }
        }
    }
}

impl std::error::Error for ApiError {}
