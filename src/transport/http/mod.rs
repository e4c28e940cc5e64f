use std::time::Duration;

use reqwest::Method;
use reqwest::header::{AUTHORIZATION, HeaderMap, HeaderValue};

use crate::core::error::ConfigError;
use crate::core::types::{BearerToken, RequestContext, ResponseContext};

/// Round-trip bound shared by the token and translate legs.
pub const DEFAULT_TIMEOUT_MS: u64 = 10_000;

/// A fully assembled outbound request: method, endpoint, query string,
/// headers, and an optional JSON body.
#[derive(Debug, Clone)]
pub struct WireRequest {
    pub method: Method,
    pub url: String,
    pub query: Vec<(String, String)>,
    pub headers: HeaderMap,
    pub bearer: Option<BearerToken>,
    pub body: Option<serde_json::Value>,
}

impl WireRequest {
    pub fn new(method: Method, url: impl Into<String>) -> Self {
        Self {
            method,
            url: url.into(),
            query: Vec::new(),
            headers: HeaderMap::new(),
            bearer: None,
            body: None,
        }
    }

    /// Diagnostic snapshot attached to errors raised for this request.
    pub fn context(&self) -> RequestContext {
        RequestContext::new(self.method.as_str(), self.url.clone())
    }
}

/// Transport outcome short of a parsed body: either the request never
/// completed (timeout, connection failure) or the provider answered with a
/// non-success status. The caller decides which error kind each maps to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum TransportFailure {
    Timeout {
        request: RequestContext,
        message: String,
    },
    Status {
        request: RequestContext,
        response: ResponseContext,
    },
}

/// Thin wrapper over `reqwest::Client` with a validated per-request
/// timeout. No retries: each call is exactly one round-trip, and retry
/// policy belongs to the caller.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
    timeout_ms: u64,
}

impl HttpTransport {
    pub fn new(timeout_ms: u64) -> Result<Self, ConfigError> {
        Self::with_client(reqwest::Client::new(), timeout_ms)
    }

    pub fn with_client(client: reqwest::Client, timeout_ms: u64) -> Result<Self, ConfigError> {
        Self::validate_timeout(timeout_ms)?;
        Ok(Self { client, timeout_ms })
    }

    pub fn timeout_ms(&self) -> u64 {
        self.timeout_ms
    }

    pub(crate) async fn execute(
        &self,
        request: &WireRequest,
    ) -> Result<ResponseContext, TransportFailure> {
        let context = request.context();
        tracing::debug!(method = %request.method, url = %request.url, "dispatching request");

        let mut headers = request.headers.clone();
        if let Some(token) = &request.bearer {
            // Tokens are opaque bytes from the provider; one that cannot be
            // carried in a header means the request cannot be sent at all.
            let value = HeaderValue::from_str(&token.authorization_value()).map_err(|error| {
                TransportFailure::Timeout {
                    request: context.clone(),
                    message: format!("invalid authorization header value: {error}"),
                }
            })?;
            headers.insert(AUTHORIZATION, value);
        }

        let mut builder = self
            .client
            .request(request.method.clone(), &request.url)
            .timeout(Duration::from_millis(self.timeout_ms))
            .headers(headers);

        if !request.query.is_empty() {
            builder = builder.query(&request.query);
        }
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        match builder.send().await {
            Ok(response) => {
                let status_code = response.status().as_u16();
                let success = response.status().is_success();
                let body = match response.text().await {
                    Ok(body) => body,
                    Err(error) => {
                        tracing::warn!(status_code, %error, "failed to read response body");
                        return Err(TransportFailure::Timeout {
                            request: context,
                            message: format!("failed to read response body: {error}"),
                        });
                    }
                };

                if success {
                    tracing::debug!(status_code, "request completed");
                    Ok(ResponseContext::new(status_code, body))
                } else {
                    tracing::warn!(status_code, "request rejected");
                    Err(TransportFailure::Status {
                        request: context,
                        response: ResponseContext::new(status_code, body),
                    })
                }
            }
            Err(error) => {
                tracing::warn!(%error, "request did not complete");
                Err(TransportFailure::Timeout {
                    request: context,
                    message: error.to_string(),
                })
            }
        }
    }

    fn validate_timeout(timeout_ms: u64) -> Result<(), ConfigError> {
        if timeout_ms == 0 {
            return Err(ConfigError::InvalidTimeout { timeout_ms });
        }
        Ok(())
    }
}
