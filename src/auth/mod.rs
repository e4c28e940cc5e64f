use async_trait::async_trait;
use reqwest::Method;
use reqwest::header::{ACCEPT, CONTENT_TYPE, HeaderName, HeaderValue};

use crate::core::error::{ConfigError, TranslateError};
use crate::core::traits::TokenProvider;
use crate::core::types::BearerToken;
use crate::transport::http::{DEFAULT_TIMEOUT_MS, HttpTransport, TransportFailure, WireRequest};

/// Fixed STS endpoint exchanging a subscription key for a bearer token.
pub const TOKEN_URL: &str = "https://api.cognitive.microsoft.com/sts/v1.0/issueToken";

const SUBSCRIPTION_KEY_HEADER: &str = "ocp-apim-subscription-key";

/// Exchanges the long-lived subscription key for a short-lived bearer
/// token, one POST per call. The response body is returned verbatim; no
/// expiry tracking, no caching.
#[derive(Debug)]
pub struct SubscriptionKeyAuthenticator {
    transport: HttpTransport,
    token_url: String,
    api_key_header: HeaderValue,
}

impl SubscriptionKeyAuthenticator {
    pub fn new(api_key: impl Into<String>) -> Result<Self, ConfigError> {
        Self::with_token_url(api_key, TOKEN_URL)
    }

    /// Points the authenticator at a non-default STS endpoint (regional
    /// deployments, local test servers).
    pub fn with_token_url(
        api_key: impl Into<String>,
        token_url: impl Into<String>,
    ) -> Result<Self, ConfigError> {
        let transport = HttpTransport::new(DEFAULT_TIMEOUT_MS)?;
        Self::with_transport(api_key, token_url, transport)
    }

    pub(crate) fn with_transport(
        api_key: impl Into<String>,
        token_url: impl Into<String>,
        transport: HttpTransport,
    ) -> Result<Self, ConfigError> {
        let api_key = api_key.into();
        if api_key.trim().is_empty() {
            return Err(ConfigError::MissingApiKey);
        }
        let api_key_header =
            HeaderValue::from_str(&api_key).map_err(|_| ConfigError::InvalidApiKey)?;

        Ok(Self {
            transport,
            token_url: token_url.into(),
            api_key_header,
        })
    }

    pub fn token_url(&self) -> &str {
        &self.token_url
    }
}

#[async_trait]
impl TokenProvider for SubscriptionKeyAuthenticator {
    async fn get_access_token(&self) -> Result<BearerToken, TranslateError> {
        let mut wire = WireRequest::new(Method::POST, &self.token_url);
        wire.headers
            .insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        wire.headers
            .insert(ACCEPT, HeaderValue::from_static("application/jwt"));
        wire.headers.insert(
            HeaderName::from_static(SUBSCRIPTION_KEY_HEADER),
            self.api_key_header.clone(),
        );

        tracing::debug!(url = %self.token_url, "requesting access token");

        match self.transport.execute(&wire).await {
            Ok(response) => Ok(BearerToken::new(response.body)),
            Err(TransportFailure::Timeout { request, message }) => {
                Err(TranslateError::TokenTimeout { request, message })
            }
            Err(TransportFailure::Status { request, response }) => {
                Err(TranslateError::token_acquisition(request, response))
            }
        }
    }
}
