use thiserror::Error;

use crate::core::types::{RequestContext, ResponseContext};

const MSG_SEPARATOR: &str = "; ";

/// Construction-time validation failures, kept separate from the runtime
/// error taxonomy so callers can distinguish "client built wrong" from
/// "call failed".
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("invalid timeout: {timeout_ms} ms")]
    InvalidTimeout { timeout_ms: u64 },
    #[error("missing subscription api key")]
    MissingApiKey,
    #[error("subscription api key is not a valid header value")]
    InvalidApiKey,
    #[error("invalid language code for {field}: {value:?}")]
    InvalidLanguageCode { field: String, value: String },
}

/// Runtime error taxonomy for a translation call.
///
/// Every variant carries the originating wire request, and where a response
/// was received, its status and raw body, so the caller can log or retry
/// with full context. Nothing is retried or swallowed internally.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TranslateError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(
        "token request timed out{context}: {message}",
        context = format_context(.request, None)
    )]
    TokenTimeout {
        request: RequestContext,
        message: String,
    },
    #[error(
        "token request rejected{context}: {message}",
        context = format_context(.request, Some(.response))
    )]
    TokenAcquisition {
        request: RequestContext,
        response: ResponseContext,
        message: String,
    },
    #[error(
        "translate request timed out{context}: {message}",
        context = format_context(.request, None)
    )]
    TranslationTimeout {
        request: RequestContext,
        message: String,
    },
    #[error(
        "translate request failed{context}: {message}",
        context = format_context(.request, Some(.response))
    )]
    TranslationApi {
        request: RequestContext,
        response: ResponseContext,
        message: String,
    },
    #[error(
        "malformed translate response{context}: {message}",
        context = format_context(.request, Some(.response))
    )]
    MalformedResponse {
        request: RequestContext,
        response: ResponseContext,
        message: String,
    },
}

impl TranslateError {
    pub(crate) fn token_acquisition(request: RequestContext, response: ResponseContext) -> Self {
        let message = enrich_status_message(
            response.status_code,
            &response.body,
            &generic_status_message(response.status_code),
        );
        Self::TokenAcquisition {
            request,
            response,
            message,
        }
    }

    pub(crate) fn translation_api(request: RequestContext, response: ResponseContext) -> Self {
        let message = enrich_status_message(
            response.status_code,
            &response.body,
            &generic_status_message(response.status_code),
        );
        Self::TranslationApi {
            request,
            response,
            message,
        }
    }
}

/// Best-effort extraction of a readable message from a structured error
/// body. The provider's error pages are XML/HTML documents; when the body
/// parses, the message becomes the HTTP status followed by every text
/// fragment of the document, separator-joined and with embedded line breaks
/// flattened. When it does not parse, the fallback is returned unchanged.
/// This helper never fails.
pub(crate) fn enrich_status_message(status_code: u16, body: &str, fallback: &str) -> String {
    match roxmltree::Document::parse(body) {
        Ok(document) => {
            let fragments: Vec<&str> = document
                .root()
                .descendants()
                .filter_map(|node| if node.is_text() { node.text() } else { None })
                .collect();
            format!("HTTP status: {status_code}; {}", fragments.join(MSG_SEPARATOR))
                .replace("\r\n", MSG_SEPARATOR)
        }
        Err(_) => fallback.to_string(),
    }
}

pub(crate) fn generic_status_message(status_code: u16) -> String {
    format!("http status {status_code}")
}

fn format_context(request: &RequestContext, response: Option<&ResponseContext>) -> String {
    let mut context = vec![
        format!("method={}", request.method),
        format!("url={}", request.url),
    ];

    if let Some(response) = response {
        context.push(format!("status_code={}", response.status_code));
    }

    format!(" [{}]", context.join(", "))
}
