//! Application state.
//!
//! One explicit context object constructed at process start and shared with
//! every handler, replacing any notion of global mutable module state. The
//! external collaborators (credential store, metadata store, object storage,
//! notification invoker) are held as trait objects so tests can substitute
//! in-memory implementations.

use std::sync::Arc;

use filedrop_core::Config;
use filedrop_db::{CredentialStore, MetadataStore};
use filedrop_storage::Storage;

use crate::services::auth::AuthService;
use crate::services::notify::Notifier;
use crate::services::upload::UploadCoordinator;

/// Main application state: collaborators plus the services built over them.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub credentials: Arc<dyn CredentialStore>,
    pub auth: AuthService,
    pub coordinator: UploadCoordinator,
}

impl AppState {
    pub fn new(
        config: Config,
        credentials: Arc<dyn CredentialStore>,
        metadata: Arc<dyn MetadataStore>,
        storage: Arc<dyn Storage>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        let auth = AuthService::new(credentials.clone());
        let coordinator = UploadCoordinator::new(storage, metadata, notifier);
        Self {
            config,
            credentials,
            auth,
            coordinator,
        }
    }
}

fn _assert_app_state_send_sync() {
    fn assert_send<T: Send>() {}
    fn assert_sync<T: Sync>() {}
    assert_send::<AppState>();
    assert_sync::<AppState>();
}
