//! Command handlers that drive the notification service.
//!
//! Handlers follow the canonical pattern:
//! - Thin wrappers that take the composed `CliContext` (or plain input)
//! - Call into vault-notify-core
//! - Format output for the terminal
//!
//! Handlers should NOT contain decision logic of their own.

pub mod decide;
pub mod run;
