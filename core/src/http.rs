//! HTTP transport types and the `Transport` seam.
//!
//! # Design
//! Requests and responses are plain data. `ApiClient` builds an `HttpRequest`,
//! hands it to a `Transport`, and decodes the returned `HttpResponse`. Tests
//! and hosts can swap the transport without touching request building or
//! decoding.
//!
//! `UreqTransport` is the production transport. ureq is blocking, so each
//! call runs on tokio's blocking pool and the awaiting task is suspended
//! rather than blocked.

use std::future::Future;

use tracing::debug;

use crate::error::TransportError;

/// HTTP method for a request. Only GET is exercised by the recipes API.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum HttpMethod {
    #[default]
    Get,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
        }
    }
}

/// An HTTP request described as plain data, with a fully resolved URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub url: String,
    pub headers: Vec<(String, String)>,
}

/// An HTTP response described as plain data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: String,
}

/// Executes one HTTP round-trip.
///
/// Implementations must not interpret the status code: a 404 with a body is
/// a successful round-trip as far as the transport is concerned.
pub trait Transport: Send + Sync {
    fn execute(
        &self,
        request: HttpRequest,
    ) -> impl Future<Output = Result<HttpResponse, TransportError>> + Send;
}

/// Blocking ureq agent driven from tokio's blocking pool.
#[derive(Debug, Clone)]
pub struct UreqTransport {
    agent: ureq::Agent,
}

impl UreqTransport {
    pub fn new() -> Self {
        let agent = ureq::Agent::config_builder()
            .http_status_as_error(false)
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
    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        let agent = self.agent.clone();
        tokio::task::spawn_blocking(move || call(&agent, request))
            .await
            .map_err(|e| TransportError(e.to_string()))?
    }
}

fn call(agent: &ureq::Agent, request: HttpRequest) -> Result<HttpResponse, TransportError> {
    debug!(method = request.method.as_str(), url = %request.url, "sending request");

    let mut builder = match request.method {
        HttpMethod::Get => agent.get(&request.url),
    };
    for (name, value) in &request.headers {
        builder = builder.header(name.as_str(), value.as_str());
    }

    let mut response = builder.call().map_err(|e| TransportError(e.to_string()))?;

    let status = response.status().as_u16();
    let headers = response
        .headers()
        .iter()
        .filter_map(|(name, value)| {
            value
                .to_str()
                .ok()
                .map(|v| (name.as_str().to_string(), v.to_string()))
        })
        .collect();
    let body = response
        .body_mut()
        .read_to_string()
        .map_err(|e| TransportError(e.to_string()))?;

    debug!(status, bytes = body.len(), "received response");

    Ok(HttpResponse {
        status,
        headers,
        body,
    })
}
