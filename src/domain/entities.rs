//! Domain entities. Pure data structures for the core business.
//!
//! No HTTP/IO types here; adapters map these to their wire formats.

use crate::domain::{Persona, RespondError};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    System,
    User,
}

/// A single role-tagged message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: ChatRole,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: ChatRole::System,
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: ChatRole::User,
            content: content.into(),
        }
    }
}

/// Fixed model configuration. Not user-controlled.
#[derive(Debug, Clone, PartialEq)]
pub struct ModelSettings {
    pub model: String,
    /// Sampling temperature, 0.0..=1.0 (validated by the config layer).
    pub temperature: f32,
}

/// One outbound chat-completion call.
#[derive(Debug, Clone, PartialEq)]
pub struct CompletionRequest {
    pub model: String,
    pub temperature: f32,
    pub messages: Vec<ChatMessage>,
}

impl CompletionRequest {
    /// System instruction followed by the user's text, verbatim.
    pub fn persona_exchange(settings: &ModelSettings, instruction: &str, user_text: &str) -> Self {
        Self {
            model: settings.model.clone(),
            temperature: settings.temperature,
            messages: vec![ChatMessage::system(instruction), ChatMessage::user(user_text)],
        }
    }

    pub fn system_message(&self) -> Option<&str> {
        self.message_with_role(ChatRole::System)
    }

    pub fn user_message(&self) -> Option<&str> {
        self.message_with_role(ChatRole::User)
    }

    fn message_with_role(&self, role: ChatRole) -> Option<&str> {
        self.messages
            .iter()
            .find(|m| m.role == role)
            .map(|m| m.content.as_str())
    }
}

/// API key for the chat-completion endpoint. Never printed.
#[derive(Clone, PartialEq, Eq)]
pub struct Credential(String);

impl Credential {
    /// Returns `None` for empty or whitespace-only values. Surrounding whitespace is dropped.
    pub fn new(value: impl AsRef<str>) -> Option<Self> {
        let trimmed = value.as_ref().trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Self(trimmed.to_string()))
        }
    }

    /// Raw secret, for building the auth header only.
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Credential(***)")
    }
}

/// One question and its outcome. Lives only for the duration of a request.
#[derive(Debug, Clone)]
pub struct ChatExchange {
    pub persona_key: String,
    pub user_text: String,
    /// `None` when the persona key was not in the catalog.
    pub instruction: Option<String>,
    pub outcome: Result<String, RespondError>,
}

impl ChatExchange {
    pub fn is_success(&self) -> bool {
        self.outcome.is_ok()
    }

    /// Label of the persona that answered, or the raw key if it is unknown.
    pub fn speaker(&self) -> String {
        Persona::from_key(&self.persona_key)
            .map(|p| p.label().to_string())
            .unwrap_or_else(|| self.persona_key.clone())
    }

    /// Text to show the end user: the reply, or the error message.
    pub fn display_text(&self) -> String {
        match &self.outcome {
            Ok(reply) => reply.clone(),
            Err(e) => e.to_string(),
        }
    }
}
