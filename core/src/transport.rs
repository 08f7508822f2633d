//! HTTP transport seam for the fetch layer.
//!
//! # Design
//! `SwapiClient` never touches the network directly; it goes through an
//! injected `Transport`. Production wiring supplies `UreqTransport`, tests
//! supply stubs. The seam is an explicit constructor argument, never a
//! process-wide override.
//!
//! Responses are plain data (`status` + `body`). Non-2xx statuses are never
//! transport errors — the client interprets them — so a stub can hand back a
//! 404 as easily as a 200.

use std::future::Future;
use std::time::Duration;

use crate::error::ApiError;

/// An HTTP response described as plain data.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

/// A transport-level failure (connection refused, DNS, timeout).
#[derive(Debug, Clone)]
pub struct TransportError(pub String);

impl From<TransportError> for ApiError {
    fn from(err: TransportError) -> Self {
        ApiError::Network(err.0)
    }
}

/// Executes a single GET request. The URL is passed through verbatim; the
/// transport must not rewrite it.
pub trait Transport: Send + Sync {
    fn get(
        &self,
        url: &str,
    ) -> impl Future<Output = Result<HttpResponse, TransportError>> + Send;
}

/// Production transport backed by a blocking `ureq` agent.
///
/// Each call runs on tokio's blocking pool, so independent fetches issued
/// concurrently by the client proceed in parallel. The agent carries a
/// bounded global timeout per request.
#[derive(Debug, Clone)]
pub struct UreqTransport {
    agent: ureq::Agent,
}

impl UreqTransport {
    pub fn new() -> Self {
        Self::with_timeout(Duration::from_secs(10))
    }

    pub fn with_timeout(timeout: Duration) -> Self {
        let agent = ureq::Agent::config_builder()
            .http_status_as_error(false)
            .timeout_global(Some(timeout))
            .build()
            .new_agent();
        Self { agent }
    }
}

impl Default for UreqTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl Transport for UreqTransport {
    async fn get(&self, url: &str) -> Result<HttpResponse, TransportError> {
        let agent = self.agent.clone();
        let url = url.to_string();
        let result = tokio::task::spawn_blocking(move || {
            let mut response = agent
                .get(&url)
                .call()
                .map_err(|e| TransportError(e.to_string()))?;
            let status = response.status().as_u16();
            let body = response
                .body_mut()
                .read_to_string()
                .map_err(|e| TransportError(e.to_string()))?;
            Ok(HttpResponse { status, body })
        })
        .await;

        match result {
            Ok(inner) => inner,
            Err(join) => Err(TransportError(join.to_string())),
        }
    }
}
