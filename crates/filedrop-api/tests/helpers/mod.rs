//! Shared test harness: the full router backed by in-memory collaborators
//! and a temp-dir local storage backend.

use std::collections::HashMap;
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum_test::{TestServer, TestServerConfig};
use chrono::Utc;
use uuid::Uuid;

use filedrop_api::services::notify::Notifier;
use filedrop_api::setup::routes::build_router;
use filedrop_api::state::AppState;
use filedrop_core::models::{NotifyPayload, UploadRecord, User};
use filedrop_core::{AppError, AuthError, Config, StorageBackend};
use filedrop_db::{CredentialStore, MetadataStore};
use filedrop_storage::LocalStorage;

/// In-memory credential store.
#[derive(Default)]
pub struct MemCredentialStore {
    pub users: Mutex<HashMap<String, User>>,
}

#[async_trait]
impl CredentialStore for MemCredentialStore {
    async fn create(
        &self,
        full_name: &str,
        email: &str,
        password_hash: &str,
    ) -> Result<User, AppError> {
        let mut users = self.users.lock().unwrap();
        if users.contains_key(email) {
            return Err(AuthError::DuplicateEmail.into());
        }
        let user = User {
            id: Uuid::new_v4(),
            full_name: full_name.to_string(),
            email: email.to_string(),
            password_hash: password_hash.to_string(),
            created_at: Utc::now(),
        };
        users.insert(email.to_string(), user.clone());
        Ok(user)
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, AppError> {
        Ok(self.users.lock().unwrap().get(email).cloned())
    }
}

/// In-memory metadata store with a switchable failure mode.
#[derive(Default)]
pub struct MemMetadataStore {
    pub records: Mutex<HashMap<String, UploadRecord>>,
    pub fail: AtomicBool,
}

#[async_trait]
impl MetadataStore for MemMetadataStore {
    async fn put(&self, record: &UploadRecord) -> Result<(), AppError> {
        if self.fail.load(std::sync::atomic::Ordering::SeqCst) {
            return Err(AppError::Metadata("table unavailable".to_string()));
        }
        self.records
            .lock()
            .unwrap()
            .insert(record.file_name.clone(), record.clone());
        Ok(())
    }

    async fn get(&self, file_name: &str) -> Result<Option<UploadRecord>, AppError> {
        Ok(self.records.lock().unwrap().get(file_name).cloned())
    }
}

/// Notifier that records payloads and can be told to reject invocations.
#[derive(Default)]
pub struct RecordingNotifier {
    pub payloads: Mutex<Vec<NotifyPayload>>,
    pub fail: AtomicBool,
}

#[async_trait]
impl Notifier for RecordingNotifier {
    async fn invoke(&self, payload: &NotifyPayload) -> Result<(), AppError> {
        if self.fail.load(std::sync::atomic::Ordering::SeqCst) {
            return Err(AppError::Notification(
                "Invoke returned status 500".to_string(),
            ));
        }
        self.payloads.lock().unwrap().push(payload.clone());
        Ok(())
    }
}

/// Test application: the running router plus handles on every collaborator.
pub struct TestApp {
    pub server: TestServer,
    pub users: Arc<MemCredentialStore>,
    pub records: Arc<MemMetadataStore>,
    pub storage: Arc<LocalStorage>,
    pub notifier: Arc<RecordingNotifier>,
    pub _temp_dir: tempfile::TempDir,
}

fn test_config() -> Config {
    Config {
        server_port: 0,
        environment: "test".to_string(),
        database_url: "postgresql://localhost/unused-in-tests".to_string(),
        db_max_connections: 5,
        db_timeout_seconds: 5,
        storage_backend: StorageBackend::Local,
        s3_bucket: None,
        s3_region: None,
        s3_endpoint: None,
        local_storage_path: None,
        local_storage_base_url: None,
        notify_function_url: "http://localhost:9/unused".to_string(),
        notify_function_name: "SendEmail".to_string(),
        cloud_timeout_seconds: 5,
        session_ttl_minutes: 60,
        max_upload_size_bytes: 5 * 1024 * 1024,
    }
}

/// Build the full application against in-memory collaborators.
pub async fn setup_test_app() -> TestApp {
    let temp_dir = tempfile::tempdir().expect("create temp dir");
    let storage = Arc::new(
        LocalStorage::new(temp_dir.path(), "http://localhost:4000/files".to_string())
            .await
            .expect("create local storage"),
    );
    let users = Arc::new(MemCredentialStore::default());
    let records = Arc::new(MemMetadataStore::default());
    let notifier = Arc::new(RecordingNotifier::default());

    let state = Arc::new(AppState::new(
        test_config(),
        users.clone(),
        records.clone(),
        storage.clone(),
        notifier.clone(),
    ));
    let router = build_router(state);

    let config = TestServerConfig {
        save_cookies: true,
        ..TestServerConfig::default()
    };
    let server = TestServer::new_with_config(router, config).expect("start test server");

    TestApp {
        server,
        users,
        records,
        storage,
        notifier,
        _temp_dir: temp_dir,
    }
}

/// POST the registration form.
pub async fn register(app: &TestApp, full_name: &str, email: &str, password: &str) {
    let response = app
        .server
        .post("/register")
        .form(&[
            ("full_name", full_name),
            ("email", email),
            ("password", password),
            ("confirm_password", password),
        ])
        .await;
    assert_eq!(response.status_code(), 303, "registration should redirect");
}

/// POST the login form.
pub async fn login(app: &TestApp, email: &str, password: &str) {
    let response = app
        .server
        .post("/login")
        .form(&[("email", email), ("password", password)])
        .await;
    assert_eq!(response.status_code(), 303, "login should redirect");
    assert_eq!(response.header("location"), "/upload");
}

/// Register and log in in one step.
pub async fn register_and_login(app: &TestApp, email: &str, password: &str) {
    register(app, "Test User", email, password).await;
    login(app, email, password).await;
}
