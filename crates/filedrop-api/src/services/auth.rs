//! Session authenticator.
//!
//! Verifies submitted credentials against the credential store and creates
//! accounts. Session establishment itself happens in the handlers; email is
//! the session's canonical identity.

use std::sync::Arc;

use filedrop_core::models::User;
use filedrop_core::{AppError, AuthError};
use filedrop_db::CredentialStore;
use uuid::Uuid;

use crate::auth::password;

#[derive(Clone)]
pub struct AuthService {
    credentials: Arc<dyn CredentialStore>,
}

impl AuthService {
    pub fn new(credentials: Arc<dyn CredentialStore>) -> Self {
        Self { credentials }
    }

    /// Create an account. Fails with `PasswordMismatch` when the confirmation
    /// differs and `DuplicateEmail` when the address is taken.
    pub async fn register(
        &self,
        full_name: &str,
        email: &str,
        password: &str,
        confirm_password: &str,
    ) -> Result<Uuid, AppError> {
        if password != confirm_password {
            return Err(AuthError::PasswordMismatch.into());
        }
        if self.credentials.find_by_email(email).await?.is_some() {
            return Err(AuthError::DuplicateEmail.into());
        }

        let password_hash = password::hash_password(password)?;
        let user = self
            .credentials
            .create(full_name, email, &password_hash)
            .await?;

        tracing::info!(user_id = %user.id, "Registration successful");
        Ok(user.id)
    }

    /// Check credentials and return the account on success.
    pub async fn login(&self, email: &str, password: &str) -> Result<User, AppError> {
        let user = self
            .credentials
            .find_by_email(email)
            .await?
            .ok_or(AuthError::UnknownEmail)?;

        if !password::verify_password(password, &user.password_hash)? {
            return Err(AuthError::BadPassword.into());
        }

        tracing::info!(user_id = %user.id, "Login successful");
        Ok(user)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use chrono::Utc;
    use std::collections::HashMap;
    use std::sync::Mutex;

    /// In-memory credential store for exercising the authenticator without a
    /// database.
    #[derive(Default)]
    struct MemCredentialStore {
        users: Mutex<HashMap<String, User>>,
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

    fn service() -> (Arc<MemCredentialStore>, AuthService) {
        let store = Arc::new(MemCredentialStore::default());
        let service = AuthService::new(store.clone());
        (store, service)
    }

    #[tokio::test]
    async fn register_then_login_succeeds() {
        let (_store, auth) = service();
        auth.register("Alice Example", "alice@example.com", "pw123", "pw123")
            .await
            .unwrap();
        let user = auth.login("alice@example.com", "pw123").await.unwrap();
        assert_eq!(user.email, "alice@example.com");
    }

    #[tokio::test]
    async fn duplicate_email_fails_and_creates_no_second_record() {
        let (store, auth) = service();
        auth.register("Alice Example", "alice@example.com", "pw123", "pw123")
            .await
            .unwrap();
        let err = auth
            .register("Other Alice", "alice@example.com", "pw456", "pw456")
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Auth(AuthError::DuplicateEmail)));
        assert_eq!(store.users.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn password_mismatch_fails_before_touching_the_store() {
        let (store, auth) = service();
        let err = auth
            .register("Alice Example", "alice@example.com", "pw123", "pw124")
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Auth(AuthError::PasswordMismatch)));
        assert!(store.users.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn wrong_password_fails_and_leaves_record_unchanged() {
        let (store, auth) = service();
        auth.register("Alice Example", "alice@example.com", "pw123", "pw123")
            .await
            .unwrap();
        let before = store
            .users
            .lock()
            .unwrap()
            .get("alice@example.com")
            .cloned()
            .unwrap();

        let err = auth.login("alice@example.com", "wrong").await.unwrap_err();
        assert!(matches!(err, AppError::Auth(AuthError::BadPassword)));

        let after = store
            .users
            .lock()
            .unwrap()
            .get("alice@example.com")
            .cloned()
            .unwrap();
        assert_eq!(before.password_hash, after.password_hash);
    }

    #[tokio::test]
    async fn unknown_email_fails() {
        let (_store, auth) = service();
        let err = auth.login("ghost@example.com", "pw123").await.unwrap_err();
        assert!(matches!(err, AppError::Auth(AuthError::UnknownEmail)));
    }
}
