//! Responder. Persona + question in, one chat-completion call, reply text out.
//!
//! Validation runs before any I/O: unknown persona, blank input and a missing
//! API key never reach the network.

use crate::domain::{ChatExchange, CompletionRequest, ModelSettings, PersonaCatalog, RespondError};
use crate::ports::ChatCompletionPort;
use crate::usecases::CredentialResolution;
use std::sync::Arc;
use tracing::{info, warn};

/// Stateless per call; safe to share across tasks.
pub struct Responder {
    catalog: Arc<PersonaCatalog>,
    chat: Arc<dyn ChatCompletionPort>,
    credential: CredentialResolution,
    settings: ModelSettings,
}

impl Responder {
    /// Create a new responder.
    ///
    /// # Arguments
    /// * `catalog` - Persona catalog (read-only)
    /// * `chat` - Chat-completion adapter (OpenAI, Mock, etc.)
    /// * `credential` - Result of startup credential resolution
    /// * `settings` - Fixed model id and temperature
    pub fn new(
        catalog: Arc<PersonaCatalog>,
        chat: Arc<dyn ChatCompletionPort>,
        credential: CredentialResolution,
        settings: ModelSettings,
    ) -> Self {
        Self {
            catalog,
            chat,
            credential,
            settings,
        }
    }

    pub fn catalog(&self) -> &PersonaCatalog {
        &self.catalog
    }

    /// Ask the persona `persona_key` the question `user_text`.
    ///
    /// Returns the model's reply unmodified. `user_text` is sent verbatim; it is
    /// only trimmed for the emptiness check.
    pub async fn respond(&self, persona_key: &str, user_text: &str) -> Result<String, RespondError> {
        let entry = self.catalog.lookup(persona_key).ok_or_else(|| {
            warn!(persona = persona_key, "unknown persona requested");
            RespondError::UnknownPersona(persona_key.to_string())
        })?;

        if user_text.trim().is_empty() {
            return Err(RespondError::EmptyInput);
        }

        let credential = self.credential.credential.as_ref().ok_or_else(|| {
            warn!(tried = ?self.credential.tried, "no API key configured");
            RespondError::MissingCredential {
                key_name: self.credential.key_name.clone(),
                tried: self.credential.tried.clone(),
            }
        })?;

        let request =
            CompletionRequest::persona_exchange(&self.settings, &entry.instruction, user_text);

        // Logged fields: persona, model, lengths, error kind/message. Never the
        // credential or the user's text.
        info!(
            persona = persona_key,
            model = %self.settings.model,
            input_len = user_text.len(),
            "sending question to chat-completion API"
        );

        match self.chat.complete(credential, &request).await {
            Ok(reply) => {
                info!(persona = persona_key, reply_len = reply.len(), "reply received");
                Ok(reply)
            }
            Err(e) => {
                warn!(persona = persona_key, kind = %e.kind, error = %e.message, "chat-completion call failed");
                Err(e.into())
            }
        }
    }

    /// Same as [`respond`](Self::respond), packaged as a [`ChatExchange`] for display.
    pub async fn exchange(&self, persona_key: &str, user_text: &str) -> ChatExchange {
        let instruction = self
            .catalog
            .lookup(persona_key)
            .map(|e| e.instruction.clone());
        let outcome = self.respond(persona_key, user_text).await;
        ChatExchange {
            persona_key: persona_key.to_string(),
            user_text: user_text.to_string(),
            instruction,
            outcome,
        }
    }
}
