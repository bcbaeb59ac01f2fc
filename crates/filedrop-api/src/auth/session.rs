//! Session access helpers.
//!
//! The session stores two things: the authenticated user's email (the
//! session's canonical identity) and pending one-shot flash messages.

use filedrop_core::constants::{SESSION_FLASH_KEY, SESSION_USER_EMAIL_KEY};
use filedrop_core::models::Flash;
use filedrop_core::AppError;
use tower_sessions::Session;

fn session_error(e: tower_sessions::session::Error) -> AppError {
    AppError::Internal(format!("Session error: {}", e))
}

/// Email of the logged-in user, if any.
pub async fn current_email(session: &Session) -> Result<Option<String>, AppError> {
    session
        .get::<String>(SESSION_USER_EMAIL_KEY)
        .await
        .map_err(session_error)
}

/// Bind the session to the given user email.
pub async fn set_current_email(session: &Session, email: &str) -> Result<(), AppError> {
    session
        .insert(SESSION_USER_EMAIL_KEY, email.to_string())
        .await
        .map_err(session_error)
}

/// Destroy the logged-in session by clearing everything it holds.
pub async fn destroy(session: &Session) {
    session.clear().await;
}

/// Queue a flash message for the next rendered page.
pub async fn push_flash(session: &Session, flash: Flash) -> Result<(), AppError> {
    let mut pending: Vec<Flash> = session
        .get(SESSION_FLASH_KEY)
        .await
        .map_err(session_error)?
        .unwrap_or_default();
    pending.push(flash);
    session
        .insert(SESSION_FLASH_KEY, pending)
        .await
        .map_err(session_error)
}

/// Take all pending flash messages, leaving none behind.
pub async fn take_flashes(session: &Session) -> Result<Vec<Flash>, AppError> {
    Ok(session
        .remove::<Vec<Flash>>(SESSION_FLASH_KEY)
        .await
        .map_err(session_error)?
        .unwrap_or_default())
}
