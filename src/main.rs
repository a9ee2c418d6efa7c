//! Wiring & DI. Entry point: bootstrap adapters, inject into services, run UI.
//! No business logic here.

use dotenv::dotenv;
use persona_chat::adapters::ai::OpenAiAdapter;
use persona_chat::adapters::credentials::{
    EnvCredentialSource, SecretsFileCredentialSource, StaticCredentialSource,
};
use persona_chat::adapters::ui::tui::TuiInputPort;
use persona_chat::domain::PersonaCatalog;
use persona_chat::ports::{ChatCompletionPort, InputPort};
use persona_chat::shared::config::AppConfig;
use persona_chat::usecases::{CredentialChain, Responder};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let env_loaded = dotenv();
    // stderr keeps log lines out of the prompt output
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    match &env_loaded {
        Ok(path) => info!(path = %path.display(), "loaded .env"),
        Err(_) => info!(cwd = %cwd.display(), "no .env found (check CWD)"),
    }

    let cfg = AppConfig::load().map_err(|e| anyhow::anyhow!("invalid config: {}", e))?;
    let settings = cfg
        .model_settings()
        .map_err(|e| anyhow::anyhow!("invalid config: {}", e))?;

    // --- Credential: env -> config file -> secrets file, resolved once ---
    let key_name = cfg.api_key_env_or_default();
    let chain = CredentialChain::new(key_name.clone())
        .with_source(EnvCredentialSource::new(key_name.clone()))
        .with_source(StaticCredentialSource::new("config api_key", cfg.api_key.clone()))
        .with_source(SecretsFileCredentialSource::new(
            cfg.secrets_path_or_default(),
            key_name,
        ));
    let credential = chain.resolve();
    match &credential.source {
        Some(source) => info!(source = %source, "API key resolved"),
        None => warn!(
            tried = ?credential.tried,
            "no API key found; questions will fail until one is configured"
        ),
    }

    // --- Chat adapter ---
    let api_url = cfg.api_url_or_default();
    info!(
        model = %settings.model,
        temperature = settings.temperature,
        url = %api_url,
        "chat-completion adapter ready"
    );
    let chat: Arc<dyn ChatCompletionPort> = Arc::new(OpenAiAdapter::new(api_url));

    // --- Services ---
    let catalog = Arc::new(PersonaCatalog::builtin());
    let responder = Arc::new(Responder::new(catalog, chat, credential, settings));

    persona_chat::adapters::ui::init_ui();

    let input_port: Arc<dyn InputPort> = Arc::new(TuiInputPort::new(responder));
    input_port
        .run()
        .await
        .map_err(|e| anyhow::anyhow!("{}", e))?;

    Ok(())
}
