//! GET /: route to the upload page when authenticated, the login page
//! otherwise.

use axum::response::{IntoResponse, Redirect, Response};
use tower_sessions::Session;

use crate::auth::session as session_store;
use crate::error::HttpAppError;

pub async fn home(session: Session) -> Result<Response, HttpAppError> {
    let authenticated = session_store::current_email(&session).await?.is_some();
    let target = if authenticated { "/upload" } else { "/login" };
    Ok(Redirect::to(target).into_response())
}
