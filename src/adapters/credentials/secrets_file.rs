//! TOML secrets file (e.g. `.streamlit/secrets.toml`). Read with the `config` crate.

use crate::ports::CredentialSource;
use config::{Config, ConfigError, File, FileFormat};
use std::path::PathBuf;
use tracing::warn;

/// Reads `key` from a TOML secrets file. Dotted keys reach into tables
/// (`openai.api_key`).
///
/// Missing file or missing key yields no value. A malformed file is logged and
/// treated the same way so later sources still get a chance.
pub struct SecretsFileCredentialSource {
    path: PathBuf,
    key: String,
}

impl SecretsFileCredentialSource {
    pub fn new(path: impl Into<PathBuf>, key: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            key: key.into(),
        }
    }

    fn read(&self) -> Result<Option<String>, ConfigError> {
        let cfg = Config::builder()
            .add_source(
                File::from(self.path.as_path())
                    .format(FileFormat::Toml)
                    .required(false),
            )
            .build()?;
        // Some config versions lowercase file keys.
        let value = cfg
            .get_string(&self.key)
            .or_else(|_| cfg.get_string(&self.key.to_lowercase()));
        match value {
            Ok(v) => Ok(Some(v)),
            Err(ConfigError::NotFound(_)) => Ok(None),
            Err(e) => Err(e),
        }
    }
}

impl CredentialSource for SecretsFileCredentialSource {
    fn describe(&self) -> String {
        format!("secrets file {} [{}]", self.path.display(), self.key)
    }

    fn lookup(&self) -> Option<String> {
        match self.read() {
            Ok(v) => v,
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "could not read secrets file");
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reads_top_level_key() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("secrets.toml");
        std::fs::write(&path, "OPENAI_API_KEY = \"sk-from-secrets\"\n").unwrap();

        let source = SecretsFileCredentialSource::new(&path, "OPENAI_API_KEY");
        assert_eq!(source.lookup().as_deref(), Some("sk-from-secrets"));
    }

    #[test]
    fn test_reads_nested_key() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("secrets.toml");
        std::fs::write(&path, "[openai]\napi_key = \"sk-nested\"\n").unwrap();

        let source = SecretsFileCredentialSource::new(&path, "openai.api_key");
        assert_eq!(source.lookup().as_deref(), Some("sk-nested"));
    }

    #[test]
    fn test_missing_file_has_no_value() {
        let dir = tempfile::tempdir().unwrap();
        let source = SecretsFileCredentialSource::new(dir.path().join("nope.toml"), "OPENAI_API_KEY");
        assert_eq!(source.lookup(), None);
    }

    #[test]
    fn test_missing_key_has_no_value() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("secrets.toml");
        std::fs::write(&path, "OTHER = \"x\"\n").unwrap();

        let source = SecretsFileCredentialSource::new(&path, "OPENAI_API_KEY");
        assert_eq!(source.lookup(), None);
    }

    #[test]
    fn test_malformed_file_has_no_value() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("secrets.toml");
        std::fs::write(&path, "OPENAI_API_KEY = = broken").unwrap();

        let source = SecretsFileCredentialSource::new(&path, "OPENAI_API_KEY");
        assert_eq!(source.lookup(), None);
        assert!(source.describe().contains("secrets.toml"));
    }
}
