use reqwest::Method;
use reqwest::header::{ACCEPT, HeaderValue};

use super::{DecodeError, WireProtocol};
use crate::core::types::{BearerToken, TranslationRequest};
use crate::transport::http::WireRequest;

pub(crate) const TRANSLATE_URL: &str =
    "https://api.microsofttranslator.com/v2/http.svc/Translate";

/// Legacy v2 generation: plain GET with the text in the query string, XML
/// document response whose root text node is the translation.
pub(crate) struct XmlProtocol;

impl WireProtocol for XmlProtocol {
    fn translate_url(&self) -> &'static str {
        TRANSLATE_URL
    }

    fn encode_request(
        &self,
        req: &TranslationRequest,
        url: &str,
        token: &BearerToken,
    ) -> WireRequest {
        let mut wire = WireRequest::new(Method::GET, url);
        wire.query.push(("text".to_string(), req.text.clone()));
        wire.query.push(("to".to_string(), req.to.clone()));
        if let Some(from) = &req.from {
            wire.query.push(("from".to_string(), from.clone()));
        }
        wire.headers
            .insert(ACCEPT, HeaderValue::from_static("application/xml"));
        wire.bearer = Some(token.clone());
        wire
    }

    fn decode_response(&self, body: &str) -> Result<String, DecodeError> {
        let document = roxmltree::Document::parse(body)
            .map_err(|error| DecodeError::new(format!("body is not valid XML: {error}")))?;
        // An empty root text node is a legitimate empty translation.
        Ok(document.root_element().text().unwrap_or_default().to_string())
    }
}
