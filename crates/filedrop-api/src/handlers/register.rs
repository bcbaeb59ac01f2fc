//! GET|POST /register: render or process the registration form.

use std::sync::Arc;

use axum::{
    extract::State,
    response::{Html, IntoResponse, Redirect, Response},
    Form,
};
use filedrop_core::models::Flash;
use filedrop_core::{AppError, ErrorMetadata};
use tower_sessions::Session;

use crate::auth::session::{self as session_store, push_flash, take_flashes};
use crate::error::HttpAppError;
use crate::forms::RegistrationForm;
use crate::handlers::log_handled_error;
use crate::pages;
use crate::state::AppState;

pub async fn show_register(session: Session) -> Result<Response, HttpAppError> {
    // An authenticated GET is redirected away; a POST is still processed.
    if session_store::current_email(&session).await?.is_some() {
        push_flash(
            &session,
            Flash::warning("You are already logged in. Please log out first."),
        )
        .await?;
        return Ok(Redirect::to("/upload").into_response());
    }

    let flashes = take_flashes(&session).await?;
    Ok(Html(pages::register_page(&flashes)).into_response())
}

pub async fn handle_register(
    State(state): State<Arc<AppState>>,
    session: Session,
    Form(form): Form<RegistrationForm>,
) -> Result<Response, HttpAppError> {
    if let Err(e) = form.validate() {
        return Ok(render_with_error(&e));
    }

    match state
        .auth
        .register(
            &form.full_name,
            &form.email,
            &form.password,
            &form.confirm_password,
        )
        .await
    {
        Ok(_) => {
            push_flash(
                &session,
                Flash::success("You have been registered successfully!"),
            )
            .await?;
            Ok(Redirect::to("/login").into_response())
        }
        Err(e) => {
            log_handled_error(&e);
            Ok(render_with_error(&e))
        }
    }
}

fn render_with_error(error: &AppError) -> Response {
    let flashes = [Flash::danger(error.client_message())];
    Html(pages::register_page(&flashes)).into_response()
}
