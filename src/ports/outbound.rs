//! Outbound ports. Application calls into infrastructure.
//!
//! Implemented by adapters.

use crate::domain::{CompletionRequest, Credential, UpstreamError};

/// Chat-completion API. One request in, one reply text out.
#[async_trait::async_trait]
pub trait ChatCompletionPort: Send + Sync {
    /// Submit `request` once. No retry.
    ///
    /// Returns the first choice's text unmodified.
    async fn complete(
        &self,
        credential: &Credential,
        request: &CompletionRequest,
    ) -> Result<String, UpstreamError>;
}

/// One place an API key may come from (env var, secrets file, ...).
///
/// Tried in order by `CredentialChain`; lookups are cheap and synchronous.
pub trait CredentialSource: Send + Sync {
    /// Short description for diagnostics, e.g. "env OPENAI_API_KEY". Never the value.
    fn describe(&self) -> String;

    /// The raw value, if this source has one.
    fn lookup(&self) -> Option<String>;
}
