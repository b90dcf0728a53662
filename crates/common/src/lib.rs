//! Shared utilities, configuration, and error handling for Carepath
//!
//! This crate provides common functionality used across the Carepath services:
//! - Configuration management following 12-factor principles
//! - The `{"error": ...}` / `{"success": true, ...}` response envelopes
//! - Validating JSON extractor
//! - Repository and state machine error types

pub mod config;
pub mod db;
pub mod error;
pub mod extractors;
pub mod response;
pub mod state;

pub use config::Config;
pub use db::RepositoryError;
pub use error::{Error, FieldError, Result};
pub use extractors::ValidatedJson;
pub use response::Success;
pub use state::StateError;
