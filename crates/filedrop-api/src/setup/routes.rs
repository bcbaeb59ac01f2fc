//! Route configuration and setup

use std::sync::Arc;

use axum::{
    extract::DefaultBodyLimit,
    middleware,
    routing::get,
    Router,
};
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::trace::TraceLayer;
use tower_sessions::{Expiry, MemoryStore, SessionManagerLayer};

use crate::auth::guard::require_login;
use crate::handlers;
use crate::state::AppState;

/// Build the application router: public routes, guarded routes, and the
/// session/trace/body-limit layers around them.
pub fn build_router(state: Arc<AppState>) -> Router {
    let session_store = MemoryStore::default();
    let session_layer = SessionManagerLayer::new(session_store)
        .with_secure(state.config.is_production())
        .with_expiry(Expiry::OnInactivity(time::Duration::minutes(
            state.config.session_ttl_minutes,
        )));

    // Public routes (no authentication required)
    let public_routes = Router::new()
        .route("/", get(handlers::home::home))
        .route(
            "/register",
            get(handlers::register::show_register).post(handlers::register::handle_register),
        )
        .route(
            "/login",
            get(handlers::login::show_login).post(handlers::login::handle_login),
        );

    // Protected routes (require an authenticated session)
    let protected_routes = Router::new()
        .route(
            "/upload",
            get(handlers::upload::show_upload).post(handlers::upload::handle_upload),
        )
        .route("/logout", get(handlers::logout::logout))
        .route_layer(middleware::from_fn_with_state(state.clone(), require_login));

    public_routes
        .merge(protected_routes)
        .layer(TraceLayer::new_for_http())
        .layer(DefaultBodyLimit::max(state.config.max_upload_size_bytes))
        .layer(RequestBodyLimitLayer::new(state.config.max_upload_size_bytes))
        .layer(session_layer)
        .with_state(state)
}
