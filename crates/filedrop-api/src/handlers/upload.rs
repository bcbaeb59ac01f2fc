//! GET|POST /upload: render or process the upload form via the
//! coordinator. Requires an authenticated session.

use std::sync::Arc;

use axum::{
    extract::{Multipart, State},
    response::{Html, IntoResponse, Redirect, Response},
    Extension,
};
use filedrop_core::models::Flash;
use filedrop_core::{AppError, ErrorMetadata};
use tower_sessions::Session;

use crate::auth::guard::CurrentUser;
use crate::auth::session::{push_flash, take_flashes};
use crate::error::HttpAppError;
use crate::forms::UploadForm;
use crate::handlers::log_handled_error;
use crate::pages;
use crate::services::upload::{NotificationStatus, UploadedFile};
use crate::state::AppState;

pub async fn show_upload(
    Extension(current): Extension<CurrentUser>,
    session: Session,
) -> Result<Response, HttpAppError> {
    let flashes = take_flashes(&session).await?;
    Ok(Html(pages::upload_page(&flashes, &current.0)).into_response())
}

pub async fn handle_upload(
    State(state): State<Arc<AppState>>,
    Extension(current): Extension<CurrentUser>,
    session: Session,
    mut multipart: Multipart,
) -> Result<Response, HttpAppError> {
    // Form gateway: reject malformed input before any cloud call happens.
    let form = match UploadForm::from_multipart(&mut multipart).await {
        Ok(form) => form,
        Err(e) => {
            log_handled_error(&e);
            return Ok(render_with_error(&current, &e));
        }
    };

    let file = UploadedFile {
        name: form.file_name,
        content: form.content,
    };

    match state
        .coordinator
        .submit(file, &form.emails_raw, &current)
        .await
    {
        Ok(receipt) => {
            push_flash(&session, Flash::success("File uploaded successfully!")).await?;
            match receipt.notification {
                NotificationStatus::Accepted => {
                    push_flash(&session, Flash::success("Emails sent successfully")).await?;
                }
                NotificationStatus::Failed(_) => {
                    push_flash(&session, Flash::warning("Error sending emails")).await?;
                }
            }
            Ok(Redirect::to("/upload").into_response())
        }
        Err(e) => {
            log_handled_error(&e);
            Ok(render_with_error(&current, &e))
        }
    }
}

fn render_with_error(current: &CurrentUser, error: &AppError) -> Response {
    let flashes = [Flash::danger(error.client_message())];
    Html(pages::upload_page(&flashes, &current.0)).into_response()
}
