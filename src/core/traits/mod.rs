use async_trait::async_trait;

use crate::core::error::TranslateError;
use crate::core::types::BearerToken;

/// Credential acquisition contract.
///
/// Each translation call asks its provider for a fresh token; nothing in
/// this crate caches or rotates credentials. Implementations other than
/// [`crate::auth::SubscriptionKeyAuthenticator`] exist mainly so tests can
/// inject canned tokens or failures.
#[async_trait]
pub trait TokenProvider: Send + Sync {
    /// Returns a bearer token valid for the translate endpoint.
    async fn get_access_token(&self) -> Result<BearerToken, TranslateError>;
}

#[cfg(test)]
mod tests;
