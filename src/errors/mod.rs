//! # Error Handling
//!
//! Error types for the gateway reconciler. Every failure raised by a
//! collaborator is surfaced to the caller unchanged; nothing here retries or
//! compensates.

pub mod types;

pub use types::{ReconcileError, Result};
