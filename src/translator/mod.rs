use std::sync::Arc;

use crate::auth::{SubscriptionKeyAuthenticator, TOKEN_URL};
use crate::core::error::{ConfigError, TranslateError};
use crate::core::traits::TokenProvider;
use crate::core::types::{ApiGeneration, TranslationRequest};
use crate::protocol::{WireProtocol, wire_protocol};
use crate::transport::http::{DEFAULT_TIMEOUT_MS, HttpTransport, TransportFailure};

/// Client for the translate endpoint. Each call independently fetches a
/// fresh bearer token, performs one translate round-trip, and decodes the
/// body; retry policy is the caller's concern.
///
/// The client holds no mutable state and is safe to share across tasks.
pub struct Translator {
    token_provider: Arc<dyn TokenProvider>,
    transport: HttpTransport,
    protocol: &'static dyn WireProtocol,
    translate_url: String,
}

impl std::fmt::Debug for Translator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Translator")
            .field("transport", &self.transport)
            .field("translate_url", &self.translate_url)
            .finish_non_exhaustive()
    }
}

pub struct TranslatorBuilder {
    api_key: String,
    generation: ApiGeneration,
    timeout_ms: u64,
    token_url: String,
    translate_url: Option<String>,
    token_provider: Option<Arc<dyn TokenProvider>>,
}

impl Translator {
    /// Client with defaults: v3 JSON generation, production endpoints,
    /// 10 second timeout on both network legs.
    pub fn new(api_key: impl Into<String>) -> Result<Self, ConfigError> {
        Self::builder(api_key).build()
    }

    pub fn builder(api_key: impl Into<String>) -> TranslatorBuilder {
        TranslatorBuilder {
            api_key: api_key.into(),
            generation: ApiGeneration::default(),
            timeout_ms: DEFAULT_TIMEOUT_MS,
            token_url: TOKEN_URL.to_string(),
            translate_url: None,
            token_provider: None,
        }
    }

    pub fn translate_url(&self) -> &str {
        &self.translate_url
    }

    /// Translates `text` into the default target language ("en").
    pub async fn translate_text(&self, text: impl Into<String>) -> Result<String, TranslateError> {
        self.translate(&TranslationRequest::new(text)).await
    }

    /// Runs one full translation call: validate, fetch a token, one
    /// translate round-trip, decode. Token acquisition failures surface
    /// unwrapped; the translate leg maps to its own error kinds.
    pub async fn translate(&self, request: &TranslationRequest) -> Result<String, TranslateError> {
        request.validate()?;

        let token = self.token_provider.get_access_token().await?;
        let wire = self
            .protocol
            .encode_request(request, &self.translate_url, &token);

        tracing::debug!(url = %wire.url, to = %request.to, "sending translate request");

        let response = match self.transport.execute(&wire).await {
            Ok(response) => response,
            Err(TransportFailure::Timeout { request, message }) => {
                return Err(TranslateError::TranslationTimeout { request, message });
            }
            Err(TransportFailure::Status { request, response }) => {
                return Err(TranslateError::translation_api(request, response));
            }
        };

        match self.protocol.decode_response(&response.body) {
            Ok(text) => Ok(text),
            Err(decode) => Err(TranslateError::MalformedResponse {
                request: wire.context(),
                response,
                message: decode.message,
            }),
        }
    }
}

impl TranslatorBuilder {
    /// Wire generation of the translate endpoint; defaults to v3 JSON.
    pub fn generation(mut self, generation: ApiGeneration) -> Self {
        self.generation = generation;
        self
    }

    /// Round-trip bound applied to both the token and translate legs.
    pub fn timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.timeout_ms = timeout_ms;
        self
    }

    pub fn token_url(mut self, token_url: impl Into<String>) -> Self {
        self.token_url = token_url.into();
        self
    }

    pub fn translate_url(mut self, translate_url: impl Into<String>) -> Self {
        self.translate_url = Some(translate_url.into());
        self
    }

    /// Replaces the subscription-key authenticator with a caller-supplied
    /// credential source.
    pub fn token_provider(mut self, token_provider: Arc<dyn TokenProvider>) -> Self {
        self.token_provider = Some(token_provider);
        self
    }

    pub fn build(self) -> Result<Translator, ConfigError> {
        let transport = HttpTransport::new(self.timeout_ms)?;
        let token_provider: Arc<dyn TokenProvider> = match self.token_provider {
            Some(provider) => provider,
            None => Arc::new(SubscriptionKeyAuthenticator::with_transport(
                self.api_key,
                self.token_url,
                transport.clone(),
            )?),
        };

        let protocol = wire_protocol(self.generation);
        let translate_url = self
            .translate_url
            .unwrap_or_else(|| protocol.translate_url().to_string());

        Ok(Translator {
            token_provider,
            transport,
            protocol,
            translate_url,
        })
    }
}
