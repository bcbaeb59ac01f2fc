//! Login guard middleware.
//!
//! Protected routes are wrapped with [`require_login`]: it resolves the
//! session's email to a `User`, inserts a [`CurrentUser`] extension for the
//! handler, and redirects unauthenticated requests to the login page with a
//! warning flash.

use std::sync::Arc;

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};
use filedrop_core::models::{Flash, User};
use filedrop_db::CredentialStore;
use tower_sessions::Session;

use crate::auth::session::{self as session_store, push_flash};
use crate::state::AppState;

const LOGIN_REQUIRED_MESSAGE: &str =
    "You must be logged in to access this page. Please log in first.";

/// Capability exposed to code that needs to know who is acting.
pub trait AuthenticatedIdentity: Send + Sync {
    /// The identity email, used for `uploaded_by`.
    fn email(&self) -> &str;
}

/// The authenticated user for the current request.
#[derive(Debug, Clone)]
pub struct CurrentUser(pub User);

impl AuthenticatedIdentity for CurrentUser {
    fn email(&self) -> &str {
        &self.0.email
    }
}

async fn redirect_to_login(session: &Session) -> Response {
    if let Err(e) = push_flash(session, Flash::warning(LOGIN_REQUIRED_MESSAGE)).await {
        tracing::warn!(error = %e, "Failed to queue login-required flash");
    }
    Redirect::to("/login").into_response()
}

/// Guard composed around the protected routes.
pub async fn require_login(
    State(state): State<Arc<AppState>>,
    session: Session,
    mut request: Request,
    next: Next,
) -> Response {
    let email = match session_store::current_email(&session).await {
        Ok(Some(email)) => email,
        Ok(None) => return redirect_to_login(&session).await,
        Err(e) => {
            tracing::error!(error = %e, "Failed to read session");
            return redirect_to_login(&session).await;
        }
    };

    match state.credentials.find_by_email(&email).await {
        Ok(Some(user)) => {
            request.extensions_mut().insert(CurrentUser(user));
            next.run(request).await
        }
        Ok(None) => {
            // Session refers to an account that no longer resolves.
            tracing::warn!(email = %email, "Session user not found, clearing session");
            session_store::destroy(&session).await;
            redirect_to_login(&session).await
        }
        Err(e) => crate::error::HttpAppError(e).into_response(),
    }
}
