//! Inbound port. UI (adapter) calls into the application.

use crate::domain::UiError;

/// Input port: UI/CLI collects persona + question and shows the reply.
#[async_trait::async_trait]
pub trait InputPort: Send + Sync {
    /// Run the interactive loop until the user quits.
    async fn run(&self) -> Result<(), UiError>;
}
