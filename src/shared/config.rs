//! Application configuration. API endpoint, model, credential locations.

use crate::domain::ModelSettings;
use config::ConfigError;
use serde::Deserialize;
use std::path::Path;

pub const DEFAULT_API_URL: &str = "https://api.openai.com/v1/chat/completions";
pub const DEFAULT_MODEL: &str = "gpt-3.5-turbo";
pub const DEFAULT_TEMPERATURE: f32 = 0.7;
pub const DEFAULT_API_KEY_ENV: &str = "OPENAI_API_KEY";
pub const DEFAULT_SECRETS_PATH: &str = ".streamlit/secrets.toml";

#[derive(Debug, Deserialize, Default)]
pub struct AppConfig {
    /// Chat-completion endpoint. Read from PERSONA_CHAT_API_URL.
    #[serde(default)]
    pub api_url: Option<String>,

    /// Model name. Read from PERSONA_CHAT_MODEL.
    #[serde(default)]
    pub model: Option<String>,

    /// Sampling temperature, 0.0..=1.0. Read from PERSONA_CHAT_TEMPERATURE.
    #[serde(default)]
    pub temperature: Option<f32>,

    // ─────────────────────────────────────────────────────────────────────────
    // Credential sources
    // ─────────────────────────────────────────────────────────────────────────
    /// API key given directly in the config file. Tried after the environment.
    #[serde(default)]
    pub api_key: Option<String>,

    /// Environment variable holding the API key (default OPENAI_API_KEY).
    /// Also the key looked up in the secrets file.
    #[serde(default)]
    pub api_key_env: Option<String>,

    /// TOML secrets file, tried last. Read from PERSONA_CHAT_SECRETS_PATH.
    #[serde(default)]
    pub secrets_path: Option<String>,
}

impl AppConfig {
    /// Environment (`PERSONA_CHAT_*`) plus the optional file named by PERSONA_CHAT_CONFIG.
    ///
    /// Any unreadable file or unparsable value is an error; callers must not
    /// fall back to defaults, or the key could be sent to the default endpoint.
    pub fn load() -> Result<Self, ConfigError> {
        dotenv::dotenv().ok();
        let file = std::env::var("PERSONA_CHAT_CONFIG").ok();
        Self::load_from(file.as_deref(), Self::environment())
    }

    fn environment() -> config::Environment {
        config::Environment::with_prefix("PERSONA_CHAT").try_parsing(true)
    }

    fn load_from(file: Option<&str>, env: config::Environment) -> Result<Self, ConfigError> {
        let mut c = config::Config::builder();
        if let Some(path) = file {
            c = c.add_source(config::File::with_name(path));
        }
        c = c.add_source(env);
        c.build()?.try_deserialize()
    }

    /// Load from a single file only (format from its extension).
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        config::Config::builder()
            .add_source(config::File::from(path))
            .build()?
            .try_deserialize()
    }

    /// Returns the API URL. Defaults to the OpenAI chat completions endpoint.
    pub fn api_url_or_default(&self) -> String {
        self.api_url
            .clone()
            .unwrap_or_else(|| DEFAULT_API_URL.to_string())
    }

    /// Returns the model name. Defaults to "gpt-3.5-turbo".
    pub fn model_or_default(&self) -> String {
        self.model
            .clone()
            .unwrap_or_else(|| DEFAULT_MODEL.to_string())
    }

    pub fn temperature_or_default(&self) -> f32 {
        self.temperature.unwrap_or(DEFAULT_TEMPERATURE)
    }

    pub fn api_key_env_or_default(&self) -> String {
        self.api_key_env
            .clone()
            .unwrap_or_else(|| DEFAULT_API_KEY_ENV.to_string())
    }

    pub fn secrets_path_or_default(&self) -> String {
        self.secrets_path
            .clone()
            .unwrap_or_else(|| DEFAULT_SECRETS_PATH.to_string())
    }

    /// Model id and temperature. Fails if temperature is outside 0.0..=1.0.
    pub fn model_settings(&self) -> Result<ModelSettings, ConfigError> {
        let temperature = self.temperature_or_default();
        if !(0.0..=1.0).contains(&temperature) {
            return Err(ConfigError::Message(format!(
                "temperature must be within 0.0..=1.0, got {}",
                temperature
            )));
        }
        Ok(ModelSettings {
            model: self.model_or_default(),
            temperature,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cfg = AppConfig::default();
        assert_eq!(cfg.api_url_or_default(), DEFAULT_API_URL);
        assert_eq!(cfg.api_key_env_or_default(), "OPENAI_API_KEY");
        assert_eq!(cfg.secrets_path_or_default(), ".streamlit/secrets.toml");

        let settings = cfg.model_settings().unwrap();
        assert_eq!(settings.model, "gpt-3.5-turbo");
        assert_eq!(settings.temperature, DEFAULT_TEMPERATURE);
    }

    #[test]
    fn test_temperature_bounds() {
        for ok in [0.0, 0.5, 1.0] {
            let cfg = AppConfig {
                temperature: Some(ok),
                ..Default::default()
            };
            assert_eq!(cfg.model_settings().unwrap().temperature, ok);
        }
        for bad in [-0.1, 1.5, f32::NAN] {
            let cfg = AppConfig {
                temperature: Some(bad),
                ..Default::default()
            };
            assert!(cfg.model_settings().is_err());
        }
    }

    fn env_of(pairs: &[(&str, &str)]) -> config::Environment {
        let map: config::Map<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppConfig::environment().source(Some(map))
    }

    #[test]
    fn test_env_values_are_read() {
        let cfg = AppConfig::load_from(
            None,
            env_of(&[
                ("PERSONA_CHAT_API_URL", "http://localhost:11434/v1/chat/completions"),
                ("PERSONA_CHAT_TEMPERATURE", "0.3"),
            ]),
        )
        .unwrap();
        assert_eq!(
            cfg.api_url_or_default(),
            "http://localhost:11434/v1/chat/completions"
        );
        assert!((cfg.temperature_or_default() - 0.3).abs() < f32::EPSILON);
    }

    #[test]
    fn test_unparsable_env_value_fails_load() {
        let res = AppConfig::load_from(
            None,
            env_of(&[
                ("PERSONA_CHAT_API_URL", "http://localhost:11434/v1/chat/completions"),
                ("PERSONA_CHAT_TEMPERATURE", "abc"),
            ]),
        );
        assert!(res.is_err());
    }

    #[test]
    fn test_broken_config_file_fails_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("persona-chat.toml");
        std::fs::write(&path, "api_url = = \"http://localhost\"\n").unwrap();

        let res = AppConfig::load_from(path.to_str(), env_of(&[]));
        assert!(res.is_err());
    }

    #[test]
    fn test_missing_config_file_fails_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.toml");

        let res = AppConfig::load_from(path.to_str(), env_of(&[]));
        assert!(res.is_err());
    }

    #[test]
    fn test_from_toml_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("persona-chat.toml");
        std::fs::write(
            &path,
            "model = \"gpt-4o-mini\"\ntemperature = 0.2\nsecrets_path = \"/etc/chat/secrets.toml\"\n",
        )
        .unwrap();

        let cfg = AppConfig::from_file(&path).unwrap();
        assert_eq!(cfg.model_or_default(), "gpt-4o-mini");
        assert_eq!(cfg.secrets_path_or_default(), "/etc/chat/secrets.toml");
        assert!((cfg.temperature_or_default() - 0.2).abs() < f32::EPSILON);
        assert!(cfg.api_key.is_none());
    }
}
