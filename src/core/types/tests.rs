use super::*;

#[test]
fn test_translation_request_defaults_to_english() {
    let req = TranslationRequest::new("Je suis fatigué");
    assert_eq!(req.text, "Je suis fatigué");
    assert_eq!(req.to, DEFAULT_TARGET_LANGUAGE);
    assert_eq!(req.from, None);
    assert!(req.validate().is_ok());
}

#[test]
fn test_translation_request_builder_setters() {
    let req = TranslationRequest::new("tired").to("fr").from("en");
    assert_eq!(req.to, "fr");
    assert_eq!(req.from.as_deref(), Some("en"));
    assert!(req.validate().is_ok());
}

#[test]
fn test_translation_request_rejects_empty_target() {
    let req = TranslationRequest::new("hello").to("  ");
    let error = req.validate().expect_err("blank target should be rejected");
    assert_eq!(
        error,
        ConfigError::InvalidLanguageCode {
            field: "to".to_string(),
            value: "  ".to_string(),
        }
    );
}

#[test]
fn test_translation_request_rejects_empty_source() {
    let req = TranslationRequest::new("hello").from("");
    let error = req.validate().expect_err("blank source should be rejected");
    assert_eq!(
        error,
        ConfigError::InvalidLanguageCode {
            field: "from".to_string(),
            value: String::new(),
        }
    );
}

#[test]
fn test_bearer_token_renders_authorization_value() {
    let token = BearerToken::new("super-token");
    assert_eq!(token.as_str(), "super-token");
    assert_eq!(token.authorization_value(), "Bearer super-token");
}

#[test]
fn test_bearer_token_debug_redacts_value() {
    let token = BearerToken::new("secret-bytes");
    let rendered = format!("{token:?}");
    assert!(!rendered.contains("secret-bytes"));
    assert_eq!(rendered, "BearerToken(<redacted>)");
}

#[test]
fn test_api_generation_default_is_json() {
    assert_eq!(ApiGeneration::default(), ApiGeneration::V3Json);
}

#[test]
fn test_request_serialization_omits_absent_source() {
    let req = TranslationRequest::new("hello");
    let json = serde_json::to_string(&req).expect("serialize request");
    assert!(!json.contains("from"));

    let req = req.from("fr");
    let json = serde_json::to_string(&req).expect("serialize request");
    assert!(json.contains("\"from\":\"fr\""));
}
