//! Domain errors. Used by ports and use cases.
//!
//! Adapters map infrastructure errors into these. Every message is safe to show
//! to the end user and never contains the API key.

use std::fmt;
use thiserror::Error;

/// Why a `respond` call failed.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RespondError {
    /// Persona key not in the catalog (caller bug: the UI only offers valid keys).
    #[error("Unknown persona '{0}'")]
    UnknownPersona(String),

    #[error("Please enter a question.")]
    EmptyInput,

    /// `key_name` is the variable the operator configured (e.g. OPENAI_API_KEY).
    #[error(
        "API key is not configured (checked: {}). Set {key_name} in the environment or .env, \
         or add it to the secrets file.",
        .tried.join(", ")
    )]
    MissingCredential { key_name: String, tried: Vec<String> },

    #[error(transparent)]
    Upstream(#[from] UpstreamError),
}

/// Failure category of the chat-completion call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpstreamErrorKind {
    /// Request never completed (connect, DNS, TLS, timeout).
    Network,
    /// HTTP 401/403.
    Authentication,
    /// HTTP 429 (rate limit or quota).
    RateLimited,
    /// Any other non-success status.
    Api { status: u16 },
    /// Body could not be decoded or held no reply text.
    MalformedResponse,
}

impl fmt::Display for UpstreamErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UpstreamErrorKind::Network => f.write_str("network error"),
            UpstreamErrorKind::Authentication => f.write_str("authentication failed"),
            UpstreamErrorKind::RateLimited => f.write_str("rate limited"),
            UpstreamErrorKind::Api { status } => write!(f, "API error (status {})", status),
            UpstreamErrorKind::MalformedResponse => f.write_str("malformed response"),
        }
    }
}

/// The chat-completion call failed. `message` carries the underlying description.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Chat API {kind}: {message}")]
pub struct UpstreamError {
    pub kind: UpstreamErrorKind,
    pub message: String,
}

impl UpstreamError {
    pub fn new(kind: UpstreamErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Terminal prompt failure (not a cancel).
#[derive(Error, Debug)]
#[error("Terminal UI error: {0}")]
pub struct UiError(pub String);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_credential_lists_sources() {
        let err = RespondError::MissingCredential {
            key_name: "OPENAI_API_KEY".into(),
            tried: vec!["env OPENAI_API_KEY".into(), "secrets file secrets.toml".into()],
        };
        let msg = err.to_string();
        assert!(msg.contains("env OPENAI_API_KEY, secrets file secrets.toml"));
        assert!(msg.contains("Set OPENAI_API_KEY in the environment"));
    }

    #[test]
    fn test_missing_credential_names_configured_variable() {
        let err = RespondError::MissingCredential {
            key_name: "AZURE_OPENAI_KEY".into(),
            tried: vec!["env AZURE_OPENAI_KEY".into()],
        };
        let msg = err.to_string();
        assert!(msg.contains("Set AZURE_OPENAI_KEY in the environment"));
        assert!(!msg.contains("OPENAI_API_KEY"));
    }

    #[test]
    fn test_upstream_message_is_transparent() {
        let err: RespondError =
            UpstreamError::new(UpstreamErrorKind::RateLimited, "quota exceeded").into();
        assert_eq!(err.to_string(), "Chat API rate limited: quota exceeded");
    }

    #[test]
    fn test_api_kind_display_includes_status() {
        assert_eq!(
            UpstreamErrorKind::Api { status: 503 }.to_string(),
            "API error (status 503)"
        );
    }
}
