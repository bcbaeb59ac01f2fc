//! Core types for filedrop: configuration, error taxonomy, domain models,
//! and input validation shared by the other crates.

pub mod config;
pub mod constants;
pub mod error;
pub mod models;
pub mod validation;

pub use config::{Config, StorageBackend};
pub use error::{AppError, AuthError, ErrorMetadata, LogLevel};
