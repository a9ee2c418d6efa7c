//! Infrastructure adapters. Implement ports.
//!
//! Chat-completion API, credential sources, terminal UI. Map errors to domain errors.

pub mod ai;
pub mod credentials;
pub mod ui;
