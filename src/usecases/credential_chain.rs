//! Ordered credential resolution. First non-empty source wins.
//!
//! Runs once at startup; the result is handed to the `Responder`.

use crate::domain::Credential;
use crate::ports::CredentialSource;
use tracing::debug;

/// Outcome of walking the chain.
#[derive(Debug, Clone, Default)]
pub struct CredentialResolution {
    /// Name operators set the key under (e.g. OPENAI_API_KEY); used in error hints.
    pub key_name: String,
    pub credential: Option<Credential>,
    /// Description of the source that supplied the credential.
    pub source: Option<String>,
    /// Every source consulted, in order (including the winner).
    pub tried: Vec<String>,
}

impl CredentialResolution {
    /// A resolution with a known credential and no lookup history.
    pub fn provided(key_name: impl Into<String>, credential: Credential) -> Self {
        Self {
            key_name: key_name.into(),
            credential: Some(credential),
            source: Some("provided".to_string()),
            tried: vec!["provided".to_string()],
        }
    }

    pub fn is_missing(&self) -> bool {
        self.credential.is_none()
    }
}

/// Lookup strategies tried in sequence.
pub struct CredentialChain {
    key_name: String,
    sources: Vec<Box<dyn CredentialSource>>,
}

impl CredentialChain {
    /// `key_name` is the variable name shown to the operator when nothing is found.
    pub fn new(key_name: impl Into<String>) -> Self {
        Self {
            key_name: key_name.into(),
            sources: Vec::new(),
        }
    }

    /// Append a source; it is tried after all sources added before it.
    pub fn with_source(mut self, source: impl CredentialSource + 'static) -> Self {
        self.sources.push(Box::new(source));
        self
    }

    pub fn resolve(&self) -> CredentialResolution {
        let mut tried = Vec::with_capacity(self.sources.len());
        for source in &self.sources {
            let name = source.describe();
            tried.push(name.clone());
            match source.lookup().as_deref().and_then(Credential::new) {
                Some(credential) => {
                    debug!(source = %name, "credential resolved");
                    return CredentialResolution {
                        key_name: self.key_name.clone(),
                        credential: Some(credential),
                        source: Some(name),
                        tried,
                    };
                }
                None => debug!(source = %name, "no credential in source"),
            }
        }
        CredentialResolution {
            key_name: self.key_name.clone(),
            credential: None,
            source: None,
            tried,
        }
    }
}
