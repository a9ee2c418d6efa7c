//! Core domain layer. No external I/O dependencies.
//!
//! Persona catalog, chat request types and the error taxonomy live here.

pub mod entities;
pub mod errors;
pub mod persona;

pub use entities::{ChatExchange, ChatMessage, ChatRole, CompletionRequest, Credential, ModelSettings};
pub use errors::{RespondError, UiError, UpstreamError, UpstreamErrorKind};
pub use persona::{Persona, PersonaCatalog, PersonaEntry};
