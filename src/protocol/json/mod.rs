use reqwest::Method;
use reqwest::header::{ACCEPT, HeaderValue};
use serde_json::{Value, json};

use super::{DecodeError, WireProtocol};
use crate::core::types::{BearerToken, TranslationRequest};
use crate::transport::http::WireRequest;

pub(crate) const TRANSLATE_URL: &str = "https://api.cognitive.microsofttranslator.com/translate";
const API_VERSION: &str = "3.0";

/// Current v3 generation: JSON batch body with a single element, JSON
/// response of per-input translation lists.
pub(crate) struct JsonProtocol;

impl WireProtocol for JsonProtocol {
    fn translate_url(&self) -> &'static str {
        TRANSLATE_URL
    }

    fn encode_request(
        &self,
        req: &TranslationRequest,
        url: &str,
        token: &BearerToken,
    ) -> WireRequest {
        let mut wire = WireRequest::new(Method::POST, url);
        wire.query
            .push(("api-version".to_string(), API_VERSION.to_string()));
        wire.query.push(("to".to_string(), req.to.clone()));
        if let Some(from) = &req.from {
            wire.query.push(("from".to_string(), from.clone()));
        }
        wire.headers
            .insert(ACCEPT, HeaderValue::from_static("application/json"));
        wire.bearer = Some(token.clone());
        wire.body = Some(json!([{ "text": req.text }]));
        wire
    }

    fn decode_response(&self, body: &str) -> Result<String, DecodeError> {
        let payload: Value = serde_json::from_str(body)
            .map_err(|error| DecodeError::new(format!("body is not valid JSON: {error}")))?;
        let items = payload
            .as_array()
            .ok_or_else(|| DecodeError::new("body is not a JSON array"))?;
        let first = items
            .first()
            .ok_or_else(|| DecodeError::new("translation array is empty"))?;
        let translations = first
            .get("translations")
            .and_then(Value::as_array)
            .ok_or_else(|| DecodeError::new("first element is missing a translations array"))?;
        let translation = translations
            .first()
            .ok_or_else(|| DecodeError::new("translations array is empty"))?;
        let text = translation
            .get("text")
            .and_then(Value::as_str)
            .ok_or_else(|| DecodeError::new("translation entry is missing a text string"))?;
        Ok(text.to_string())
    }
}
