//! GET /logout: destroy the session and return to the login page.

use axum::response::{IntoResponse, Redirect, Response};
use filedrop_core::models::Flash;
use tower_sessions::Session;

use crate::auth::session::{destroy, push_flash};
use crate::error::HttpAppError;

pub async fn logout(session: Session) -> Result<Response, HttpAppError> {
    destroy(&session).await;
    push_flash(&session, Flash::success("You have been logged out!")).await?;
    Ok(Redirect::to("/login").into_response())
}
