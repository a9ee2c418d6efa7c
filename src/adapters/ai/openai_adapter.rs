//! OpenAI-compatible chat-completion adapter.
//!
//! Supports OpenAI API, Azure OpenAI, and local Ollama instances.
//! Implements `ChatCompletionPort`: one POST per call, no retry.

use crate::domain::{ChatRole, CompletionRequest, Credential, UpstreamError, UpstreamErrorKind};
use crate::ports::ChatCompletionPort;
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// Max characters of an error body carried into the error message.
const ERROR_BODY_PREVIEW: usize = 200;

/// OpenAI-compatible chat adapter.
///
/// Can be configured to work with:
/// - OpenAI API (api.openai.com)
/// - Azure OpenAI
/// - Ollama (localhost)
/// - Any OpenAI-compatible API
pub struct OpenAiAdapter {
    client: reqwest::Client,
    api_url: String,
}

impl OpenAiAdapter {
    /// Create a new OpenAI adapter.
    ///
    /// # Arguments
    /// * `api_url` - API endpoint (e.g., "https://api.openai.com/v1/chat/completions")
    pub fn new(api_url: String) -> Self {
        Self::with_client(reqwest::Client::new(), api_url)
    }

    /// Use a preconfigured client (proxy, timeouts).
    pub fn with_client(client: reqwest::Client, api_url: String) -> Self {
        Self { client, api_url }
    }

    /// Map a non-success status to an error kind.
    fn classify(status: StatusCode) -> UpstreamErrorKind {
        match status {
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => UpstreamErrorKind::Authentication,
            StatusCode::TOO_MANY_REQUESTS => UpstreamErrorKind::RateLimited,
            other => UpstreamErrorKind::Api {
                status: other.as_u16(),
            },
        }
    }

    /// `error.message` from an OpenAI error body, else a prefix of the raw body.
    fn error_detail(body: &str) -> String {
        match serde_json::from_str::<ApiErrorBody>(body) {
            Ok(parsed) => parsed.error.message,
            Err(_) => body.chars().take(ERROR_BODY_PREVIEW).collect(),
        }
    }
}

/// OpenAI API request structure.
#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<WireMessage<'a>>,
    temperature: f32,
}

#[derive(Serialize)]
struct WireMessage<'a> {
    role: &'static str,
    content: &'a str,
}

impl<'a> From<&'a CompletionRequest> for ChatRequest<'a> {
    fn from(req: &'a CompletionRequest) -> Self {
        Self {
            model: &req.model,
            messages: req
                .messages
                .iter()
                .map(|m| WireMessage {
                    role: match m.role {
                        ChatRole::System => "system",
                        ChatRole::User => "user",
                    },
                    content: &m.content,
                })
                .collect(),
            temperature: req.temperature,
        }
    }
}

/// OpenAI API response structure.
#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: MessageContent,
}

#[derive(Deserialize)]
struct MessageContent {
    content: Option<String>,
}

#[derive(Deserialize)]
struct ApiErrorBody {
    error: ApiErrorDetail,
}

#[derive(Deserialize)]
struct ApiErrorDetail {
    message: String,
}

#[async_trait::async_trait]
impl ChatCompletionPort for OpenAiAdapter {
    async fn complete(
        &self,
        credential: &Credential,
        request: &CompletionRequest,
    ) -> Result<String, UpstreamError> {
        debug!(
            model = %request.model,
            url = %self.api_url,
            messages = request.messages.len(),
            "posting chat completion"
        );

        let response = self
            .client
            .post(&self.api_url)
            .header("Authorization", format!("Bearer {}", credential.expose()))
            .header("Content-Type", "application/json")
            .json(&ChatRequest::from(request))
            .send()
            .await
            .map_err(|e| {
                UpstreamError::new(UpstreamErrorKind::Network, format!("HTTP request failed: {}", e))
            })?;

        // Check status
        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            let detail = Self::error_detail(&text);
            warn!(status = %status, detail = %detail, "chat API returned error");
            return Err(UpstreamError::new(
                Self::classify(status),
                format!("API error {}: {}", status, detail),
            ));
        }

        // Parse response
        let chat_response: ChatResponse = response.json().await.map_err(|e| {
            UpstreamError::new(
                UpstreamErrorKind::MalformedResponse,
                format!("Failed to parse API response: {}", e),
            )
        })?;

        let choice = chat_response.choices.into_iter().next().ok_or_else(|| {
            UpstreamError::new(
                UpstreamErrorKind::MalformedResponse,
                "No response choices returned",
            )
        })?;

        let content = choice.message.content.ok_or_else(|| {
            UpstreamError::new(
                UpstreamErrorKind::MalformedResponse,
                "Response message has no text content",
            )
        })?;

        debug!(reply_len = content.len(), "received chat completion");
        Ok(content)
    }
}
