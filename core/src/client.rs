//! HTTP client for the recipes API.
//!
//! # Design
//! `ApiClient` holds a `base_url` and a `Transport` and carries no mutable
//! state between calls. A call is split into `build_request` (URL and header
//! construction), the transport round-trip, and `parse_response` (JSON
//! decoding). Status codes are not inspected: a non-2xx body that does not
//! match the expected shape surfaces as `DecodingError`. There is no retry.

use std::future::Future;
use std::sync::Arc;

use serde::de::DeserializeOwned;
use tracing::{debug, warn};
use url::Url;

use crate::config::ClientConfig;
use crate::error::ApiError;
use crate::http::{HttpRequest, HttpResponse, Transport, UreqTransport};
use crate::request::Request;

/// Header name and value sent with every request.
pub const ACCEPT_HEADER: (&str, &str) = ("Accept", "application/json");

/// Performs typed requests. View-models depend on this, not on `ApiClient`.
pub trait ApiService: Send + Sync {
    fn perform_request<T>(
        &self,
        request: &Request<T>,
    ) -> impl Future<Output = Result<T, ApiError>> + Send
    where
        T: DeserializeOwned + Send;
}

impl<S: ApiService> ApiService for Arc<S> {
    fn perform_request<T>(
        &self,
        request: &Request<T>,
    ) -> impl Future<Output = Result<T, ApiError>> + Send
    where
        T: DeserializeOwned + Send,
    {
        (**self).perform_request(request)
    }
}

#[derive(Debug, Clone)]
pub struct ApiClient<X = UreqTransport> {
    base_url: String,
    transport: X,
}

impl ApiClient<UreqTransport> {
    pub fn new(base_url: &str) -> Self {
        Self::with_transport(base_url, UreqTransport::new())
    }

    pub fn from_config(config: &ClientConfig) -> Self {
        Self::new(&config.base_url)
    }
}

impl<X> ApiClient<X> {
    pub fn with_transport(base_url: &str, transport: X) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            transport,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Resolve `base_url + path`, append query parameters in order, and set
    /// the `Accept` header.
    pub fn build_request<T>(&self, request: &Request<T>) -> Result<HttpRequest, ApiError> {
        let endpoint = format!("{}{}", self.base_url, request.path);
        let mut url = Url::parse(&endpoint).map_err(|_| ApiError::InvalidUrl)?;
        if url.cannot_be_a_base() {
            return Err(ApiError::InvalidUrl);
        }

        if !request.params.is_empty() {
            let mut pairs = url.query_pairs_mut();
            for (key, value) in &request.params {
                pairs.append_pair(key, value);
            }
        }

        Ok(HttpRequest {
            method: request.method,
            url: url.into(),
            headers: vec![(ACCEPT_HEADER.0.to_string(), ACCEPT_HEADER.1.to_string())],
        })
    }

    pub fn parse_response<T: DeserializeOwned>(&self, response: HttpResponse) -> Result<T, ApiError> {
        serde_json::from_str(&response.body).map_err(|e| ApiError::DecodingError(e.to_string()))
    }
}

impl<X: Transport> ApiService for ApiClient<X> {
    async fn perform_request<T>(&self, request: &Request<T>) -> Result<T, ApiError>
    where
        T: DeserializeOwned + Send,
    {
        let http_request = self.build_request(request)?;
        debug!(url = %http_request.url, "performing request");

        let response = self.transport.execute(http_request).await.map_err(|e| {
            warn!(path = %request.path, error = %e, "transport failed");
            ApiError::NetworkError(e.to_string())
        })?;

        self.parse_response(response).inspect_err(|e| {
            warn!(path = %request.path, error = %e, "failed to decode response");
        })
    }
}
