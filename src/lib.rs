//! persona-chat: ask an expert persona a question through a chat-completion API.
//!
//! Hexagonal layout: domain (catalog, errors), ports (traits), use cases
//! (Responder, CredentialChain), adapters (OpenAI, credentials, terminal UI).

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod shared;
pub mod usecases;
