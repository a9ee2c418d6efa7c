//! Application use cases. Orchestrate domain logic via ports.

pub mod credential_chain;
pub mod responder;

pub use credential_chain::{CredentialChain, CredentialResolution};
pub use responder::Responder;
