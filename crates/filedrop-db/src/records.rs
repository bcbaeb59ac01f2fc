//! Metadata store: per-upload bookkeeping keyed by file name.

use async_trait::async_trait;
use filedrop_core::models::UploadRecord;
use filedrop_core::AppError;
use sqlx::PgPool;

/// Key-value table holding one record per uploaded file name.
///
/// `put` has overwrite semantics: writing a record for an existing file name
/// replaces the previous one (last write wins). Records are never updated in
/// place or deleted by this system.
#[async_trait]
pub trait MetadataStore: Send + Sync {
    async fn put(&self, record: &UploadRecord) -> Result<(), AppError>;

    async fn get(&self, file_name: &str) -> Result<Option<UploadRecord>, AppError>;
}

/// Postgres-backed metadata store.
#[derive(Clone)]
pub struct PgMetadataStore {
    pool: PgPool,
}

impl PgMetadataStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl MetadataStore for PgMetadataStore {
    async fn put(&self, record: &UploadRecord) -> Result<(), AppError> {
        sqlx::query(
            r#"
            INSERT INTO upload_records (file_name, emails, uploaded_by)
            VALUES ($1, $2, $3)
            ON CONFLICT (file_name)
            DO UPDATE SET emails = EXCLUDED.emails,
                          uploaded_by = EXCLUDED.uploaded_by,
                          uploaded_at = NOW()
            "#,
        )
        .bind(&record.file_name)
        .bind(&record.emails)
        .bind(&record.uploaded_by)
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::Metadata(e.to_string()))?;

        tracing::info!(file_name = %record.file_name, "Upload record written");
        Ok(())
    }

    async fn get(&self, file_name: &str) -> Result<Option<UploadRecord>, AppError> {
        let record = sqlx::query_as::<_, UploadRecord>(
            r#"
            SELECT file_name, emails, uploaded_by
            FROM upload_records
            WHERE file_name = $1
            "#,
        )
        .bind(file_name)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::Metadata(e.to_string()))?;

        Ok(record)
    }
}
