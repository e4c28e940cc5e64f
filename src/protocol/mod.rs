pub(crate) mod json;
pub(crate) mod xml;

use crate::core::types::{ApiGeneration, BearerToken, TranslationRequest};
use crate::transport::http::WireRequest;

/// Reason a 2xx body could not be decoded into a translation. The caller
/// attaches the raw response and wraps this into the public error taxonomy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct DecodeError {
    pub message: String,
}

impl DecodeError {
    pub(crate) fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Wire-generation contract: encodes a translation request into an outbound
/// HTTP request and decodes a success body into the translated text.
///
/// The generation is a construction-time choice on the client; responses
/// are never sniffed to guess which shape came back.
pub(crate) trait WireProtocol: Send + Sync {
    /// Fixed translate endpoint for this generation.
    fn translate_url(&self) -> &'static str;

    fn encode_request(
        &self,
        req: &TranslationRequest,
        url: &str,
        token: &BearerToken,
    ) -> WireRequest;

    fn decode_response(&self, body: &str) -> Result<String, DecodeError>;
}

pub(crate) fn wire_protocol(generation: ApiGeneration) -> &'static dyn WireProtocol {
    match generation {
        ApiGeneration::V3Json => &json::JsonProtocol,
        ApiGeneration::LegacyXml => &xml::XmlProtocol,
    }
}
