use std::sync::Arc;

use async_trait::async_trait;

use super::TokenProvider;
use crate::core::error::TranslateError;
use crate::core::types::{BearerToken, RequestContext};

struct FixedTokenProvider;

#[async_trait]
impl TokenProvider for FixedTokenProvider {
    async fn get_access_token(&self) -> Result<BearerToken, TranslateError> {
        Ok(BearerToken::new("fixed-token"))
    }
}

struct FailingTokenProvider;

#[async_trait]
impl TokenProvider for FailingTokenProvider {
    async fn get_access_token(&self) -> Result<BearerToken, TranslateError> {
        Err(TranslateError::TokenTimeout {
            request: RequestContext::new("POST", "https://sts.example/issueToken"),
            message: "timed out".to_string(),
        })
    }
}

#[tokio::test]
async fn test_token_provider_usable_as_trait_object() {
    let provider: Arc<dyn TokenProvider> = Arc::new(FixedTokenProvider);
    let token = provider
        .get_access_token()
        .await
        .expect("fixed provider should succeed");
    assert_eq!(token.as_str(), "fixed-token");
}

#[tokio::test]
async fn test_token_provider_failure_surfaces_unwrapped() {
    let provider: Arc<dyn TokenProvider> = Arc::new(FailingTokenProvider);
    let error = provider
        .get_access_token()
        .await
        .expect_err("failing provider should fail");
    assert!(matches!(error, TranslateError::TokenTimeout { .. }));
}
