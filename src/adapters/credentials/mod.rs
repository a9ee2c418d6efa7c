//! Credential sources. Implement CredentialSource; combined by `CredentialChain`.

pub mod env;
pub mod secrets_file;

pub use env::{EnvCredentialSource, StaticCredentialSource};
pub use secrets_file::SecretsFileCredentialSource;
