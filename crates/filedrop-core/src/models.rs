//! Domain models: users, upload records, and the notification payload.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::constants::DOWNLOAD_LINK_TTL_SECS;

/// A registered account. Created on registration, never mutated or deleted;
/// read on every login and to populate the `uploaded_by` field.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct User {
    pub id: Uuid,
    pub full_name: String,
    pub email: String,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}

/// Per-upload bookkeeping row, keyed by file name. A re-used file name
/// overwrites the previous record (last write wins).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct UploadRecord {
    pub file_name: String,
    pub emails: Vec<String>,
    pub uploaded_by: String,
}

/// Payload handed to the notification function. Field names follow the
/// function's existing contract.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NotifyPayload {
    pub file_name: String,
    pub emails: Vec<String>,
    #[serde(rename = "uploadedby")]
    pub uploaded_by: String,
    pub presigned_url: String,
    #[serde(rename = "Expiry")]
    pub expiry_seconds: u64,
}

impl NotifyPayload {
    pub fn new(record: &UploadRecord, presigned_url: String) -> Self {
        Self {
            file_name: record.file_name.clone(),
            emails: record.emails.clone(),
            uploaded_by: record.uploaded_by.clone(),
            presigned_url,
            expiry_seconds: DOWNLOAD_LINK_TTL_SECS,
        }
    }
}

/// Severity of a one-shot status message shown on the next rendered page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FlashLevel {
    Success,
    Warning,
    Danger,
}

/// A flash message: stored in the session, consumed on the next render.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Flash {
    pub level: FlashLevel,
    pub message: String,
}

impl Flash {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            level: FlashLevel::Success,
            message: message.into(),
        }
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            level: FlashLevel::Warning,
            message: message.into(),
        }
    }

    pub fn danger(message: impl Into<String>) -> Self {
        Self {
            level: FlashLevel::Danger,
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn notify_payload_carries_link_expiry() {
        let record = UploadRecord {
            file_name: "report.pdf".to_string(),
            emails: vec!["bob@x.com".to_string(), "carol@y.com".to_string()],
            uploaded_by: "alice@example.com".to_string(),
        };
        let payload = NotifyPayload::new(&record, "https://files.example/report.pdf".to_string());
        assert_eq!(payload.expiry_seconds, 604_800);
        assert_eq!(payload.emails.len(), 2);

        let json = serde_json::to_value(&payload).expect("serialize");
        assert_eq!(
            json.get("uploadedby").and_then(|v| v.as_str()),
            Some("alice@example.com")
        );
        assert_eq!(json.get("Expiry").and_then(|v| v.as_u64()), Some(604_800));
    }
}
