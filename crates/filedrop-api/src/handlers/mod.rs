//! Page controller: maps HTTP verbs and paths onto the authenticator, form
//! gateway, and upload coordinator, redirecting based on session state.

pub mod home;
pub mod login;
pub mod logout;
pub mod register;
pub mod upload;

use filedrop_core::{AppError, ErrorMetadata, LogLevel};

/// Log a handler-caught error at the level its metadata asks for.
pub(crate) fn log_handled_error(error: &AppError) {
    match error.log_level() {
        LogLevel::Debug => tracing::debug!(error = %error, "Request failed"),
        LogLevel::Warn => tracing::warn!(error = %error, "Request failed"),
        LogLevel::Error => tracing::error!(error = %error, "Request failed"),
    }
}
