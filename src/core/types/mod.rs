use serde::{Deserialize, Serialize};

use crate::core::error::ConfigError;

pub const DEFAULT_TARGET_LANGUAGE: &str = "en";

/// Short-lived opaque credential returned by the token endpoint.
///
/// The token is never parsed or inspected; it is forwarded verbatim as an
/// `Authorization: Bearer <token>` header value.
#[derive(Clone, PartialEq, Eq)]
pub struct BearerToken(String);

impl BearerToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn authorization_value(&self) -> String {
        format!("Bearer {}", self.0)
    }
}

impl std::fmt::Debug for BearerToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("BearerToken(<redacted>)")
    }
}

/// A single translation call: the text to translate, the target language,
/// and an optional source language. When `from` is absent the provider
/// detects the source language itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TranslationRequest {
    pub text: String,
    pub to: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from: Option<String>,
}

impl TranslationRequest {
    /// Request targeting the default language ("en").
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            to: DEFAULT_TARGET_LANGUAGE.to_string(),
            from: None,
        }
    }

    pub fn to(mut self, to: impl Into<String>) -> Self {
        self.to = to.into();
        self
    }

    pub fn from(mut self, from: impl Into<String>) -> Self {
        self.from = Some(from.into());
        self
    }

    /// Target language must be present; source language, when supplied,
    /// must be a non-empty code.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.to.trim().is_empty() {
            return Err(ConfigError::InvalidLanguageCode {
                field: "to".to_string(),
                value: self.to.clone(),
            });
        }
        if let Some(from) = &self.from
            && from.trim().is_empty()
        {
            return Err(ConfigError::InvalidLanguageCode {
                field: "from".to_string(),
                value: from.clone(),
            });
        }
        Ok(())
    }
}

/// Diagnostic snapshot of the wire request that triggered a failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RequestContext {
    pub method: String,
    pub url: String,
}

impl RequestContext {
    pub fn new(method: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            method: method.into(),
            url: url.into(),
        }
    }
}

/// Status and raw body of the response attached to a failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ResponseContext {
    pub status_code: u16,
    pub body: String,
}

impl ResponseContext {
    pub fn new(status_code: u16, body: impl Into<String>) -> Self {
        Self {
            status_code,
            body: body.into(),
        }
    }
}

/// Wire generation of the translate endpoint, chosen at construction time.
///
/// The provider has shipped both shapes over the API's lifetime; the v3
/// JSON protocol is canonical and the XML path exists only for callers
/// still pinned to the legacy service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ApiGeneration {
    #[default]
    V3Json,
    LegacyXml,
}

#[cfg(test)]
mod tests;
