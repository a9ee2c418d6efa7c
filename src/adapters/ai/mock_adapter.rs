//! Mock chat adapter for testing without API calls.
//!
//! Returns a scripted reply or failure and records every request it receives.

use crate::domain::{CompletionRequest, Credential, UpstreamError};
use crate::ports::ChatCompletionPort;
use std::sync::Mutex;
use tracing::info;

#[derive(Debug, Clone)]
enum Script {
    /// Reply with the user message.
    Echo,
    Reply(String),
    Fail(UpstreamError),
}

/// Scripted `ChatCompletionPort`.
pub struct MockChatAdapter {
    script: Script,
    requests: Mutex<Vec<CompletionRequest>>,
}

impl MockChatAdapter {
    fn with_script(script: Script) -> Self {
        Self {
            script,
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Echo the user message back.
    pub fn echo() -> Self {
        Self::with_script(Script::Echo)
    }

    /// Always reply with `text`.
    pub fn replying(text: impl Into<String>) -> Self {
        Self::with_script(Script::Reply(text.into()))
    }

    /// Always fail with `error`.
    pub fn failing(error: UpstreamError) -> Self {
        Self::with_script(Script::Fail(error))
    }

    /// Requests received so far, in call order.
    pub fn requests(&self) -> Vec<CompletionRequest> {
        self.requests
            .lock()
            .map(|r| r.clone())
            .unwrap_or_default()
    }

    pub fn call_count(&self) -> usize {
        self.requests.lock().map(|r| r.len()).unwrap_or_default()
    }
}

#[async_trait::async_trait]
impl ChatCompletionPort for MockChatAdapter {
    async fn complete(
        &self,
        _credential: &Credential,
        request: &CompletionRequest,
    ) -> Result<String, UpstreamError> {
        info!(
            model = %request.model,
            messages = request.messages.len(),
            "[MOCK] Simulating chat completion"
        );

        if let Ok(mut requests) = self.requests.lock() {
            requests.push(request.clone());
        }

        match &self.script {
            Script::Echo => Ok(request.user_message().unwrap_or_default().to_string()),
            Script::Reply(text) => Ok(text.clone()),
            Script::Fail(e) => Err(e.clone()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{ModelSettings, UpstreamErrorKind};

    fn request() -> CompletionRequest {
        let settings = ModelSettings {
            model: "m".to_string(),
            temperature: 0.0,
        };
        CompletionRequest::persona_exchange(&settings, "sys", "hello there")
    }

    #[tokio::test]
    async fn test_mock_echo_records_request() {
        let adapter = MockChatAdapter::echo();
        let key = Credential::new("k").unwrap();

        let reply = adapter.complete(&key, &request()).await.unwrap();

        assert_eq!(reply, "hello there");
        assert_eq!(adapter.call_count(), 1);
        assert_eq!(adapter.requests()[0], request());
    }

    #[tokio::test]
    async fn test_mock_failure() {
        let adapter =
            MockChatAdapter::failing(UpstreamError::new(UpstreamErrorKind::Authentication, "bad key"));
        let key = Credential::new("k").unwrap();

        let err = adapter.complete(&key, &request()).await.unwrap_err();

        assert_eq!(err.kind, UpstreamErrorKind::Authentication);
        assert_eq!(adapter.call_count(), 1);
    }
}
