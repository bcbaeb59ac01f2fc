//! GET|POST /login: render or process the login form; success starts a
//! session bound to the user's email.

use std::sync::Arc;

use axum::{
    extract::State,
    response::{Html, IntoResponse, Redirect, Response},
    Form,
};
use filedrop_core::models::Flash;
use filedrop_core::{AppError, ErrorMetadata};
use tower_sessions::Session;

use crate::auth::session::{push_flash, set_current_email, take_flashes};
use crate::error::HttpAppError;
use crate::forms::LoginForm;
use crate::handlers::log_handled_error;
use crate::pages;
use crate::state::AppState;

pub async fn show_login(session: Session) -> Result<Response, HttpAppError> {
    let flashes = take_flashes(&session).await?;
    Ok(Html(pages::login_page(&flashes)).into_response())
}

pub async fn handle_login(
    State(state): State<Arc<AppState>>,
    session: Session,
    Form(form): Form<LoginForm>,
) -> Result<Response, HttpAppError> {
    if let Err(e) = form.validate() {
        return Ok(render_with_error(&e));
    }

    match state.auth.login(&form.email, &form.password).await {
        Ok(user) => {
            set_current_email(&session, &user.email).await?;
            push_flash(&session, Flash::success("You have been logged in!")).await?;
            Ok(Redirect::to("/upload").into_response())
        }
        Err(e) => {
            log_handled_error(&e);
            Ok(render_with_error(&e))
        }
    }
}

fn render_with_error(error: &AppError) -> Response {
    let flashes = [Flash::danger(error.client_message())];
    Html(pages::login_page(&flashes)).into_response()
}
