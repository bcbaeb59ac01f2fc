//! Upload transaction coordinator.
//!
//! The three-step cloud transaction behind the upload form: store the file,
//! write the upload record, invoke the notification function with a 7-day
//! download link. Steps run in strict order and each is attempted exactly
//! once. A failure aborts without compensating earlier steps, so a stored
//! object can be left behind when the metadata write fails; concurrent
//! uploads of the same file name race and the last writer wins for both the
//! object and the record, independently.

use std::sync::Arc;
use std::time::Duration;

use filedrop_core::constants::DOWNLOAD_LINK_TTL_SECS;
use filedrop_core::models::{NotifyPayload, UploadRecord};
use filedrop_core::AppError;
use filedrop_db::MetadataStore;
use filedrop_storage::Storage;

use crate::auth::guard::AuthenticatedIdentity;
use crate::services::notify::Notifier;

/// A file received from the upload form.
#[derive(Debug, Clone)]
pub struct UploadedFile {
    pub name: String,
    pub content: Vec<u8>,
}

/// Whether the notification function accepted the invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NotificationStatus {
    Accepted,
    Failed(String),
}

/// Outcome of a committed upload transaction.
#[derive(Debug, Clone)]
pub struct UploadReceipt {
    pub file_name: String,
    pub recipients: Vec<String>,
    pub notification: NotificationStatus,
}

#[derive(Clone)]
pub struct UploadCoordinator {
    storage: Arc<dyn Storage>,
    metadata: Arc<dyn MetadataStore>,
    notifier: Arc<dyn Notifier>,
}

impl UploadCoordinator {
    pub fn new(
        storage: Arc<dyn Storage>,
        metadata: Arc<dyn MetadataStore>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        Self {
            storage,
            metadata,
            notifier,
        }
    }

    /// Run the upload transaction for an already-validated recipient list.
    ///
    /// The transaction is committed once the upload record is written; a
    /// rejected notification downgrades the receipt to a warning but does
    /// not roll anything back.
    pub async fn submit(
        &self,
        file: UploadedFile,
        raw_email_list: &str,
        uploader: &dyn AuthenticatedIdentity,
    ) -> Result<UploadReceipt, AppError> {
        if file.name.trim().is_empty() {
            return Err(AppError::InvalidInput(
                "The uploaded file must have a name".to_string(),
            ));
        }

        // The form gateway has validated the list; trim around each address
        // once more before anything is persisted.
        let emails: Vec<String> = raw_email_list
            .split(',')
            .map(|e| e.trim().to_string())
            .collect();

        let file_name = file.name.clone();

        // 1. Store the content under its file name. A same-named prior
        //    object is silently overwritten.
        self.storage
            .put(&file_name, file.content)
            .await
            .map_err(|e| AppError::Storage(e.to_string()))?;

        // 2. Time-limited retrieval link for that key.
        let link = self
            .storage
            .presigned_get_url(&file_name, Duration::from_secs(DOWNLOAD_LINK_TTL_SECS))
            .await
            .map_err(|e| AppError::Storage(e.to_string()))?;

        // 3. Persist the upload record, keyed by file name (last write wins).
        //    If this fails the object from step 1 stays behind.
        let record = UploadRecord {
            file_name: file_name.clone(),
            emails: emails.clone(),
            uploaded_by: uploader.email().to_string(),
        };
        self.metadata.put(&record).await?;

        // 4. Invoke the notification function. Acceptance only; a rejected
        //    invocation leaves the transaction committed.
        let payload = NotifyPayload::new(&record, link);
        let notification = match self.notifier.invoke(&payload).await {
            Ok(()) => NotificationStatus::Accepted,
            Err(e) => {
                tracing::warn!(
                    file_name = %file_name,
                    error = %e,
                    "Upload committed but notification was not accepted"
                );
                NotificationStatus::Failed(e.to_string())
            }
        };

        tracing::info!(
            file_name = %file_name,
            recipients = emails.len(),
            uploaded_by = %record.uploaded_by,
            "Upload transaction committed"
        );

        Ok(UploadReceipt {
            file_name,
            recipients: emails,
            notification,
        })
    }
}
