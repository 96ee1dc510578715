//! Repository for the `inquiry_attachments` table.

use fabsite_core::inquiry::AttachmentUpload;
use fabsite_core::types::DbId;
use sqlx::{PgConnection, PgPool};

use crate::models::inquiry::{AttachmentFile, InquiryAttachment};

const METADATA_COLUMNS: &str =
    "id, inquiry_id, original_name, content_type, file_ext, file_size_bytes, created_at";

pub struct AttachmentRepo;

impl AttachmentRepo {
    /// Insert one attachment row. Called inside the inquiry's transaction.
    pub async fn insert(
        conn: &mut PgConnection,
        inquiry_id: DbId,
        upload: &AttachmentUpload,
    ) -> Result<DbId, sqlx::Error> {
        let row: (DbId,) = sqlx::query_as(
            "INSERT INTO inquiry_attachments
                (inquiry_id, original_name, content_type, file_ext, file_size_bytes, file_data)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING id",
        )
        .bind(inquiry_id)
        .bind(&upload.original_name)
        .bind(&upload.content_type)
        .bind(upload.file_ext())
        .bind(upload.size_bytes())
        .bind(&upload.data)
        .fetch_one(conn)
        .await?;
        Ok(row.0)
    }

    /// Attachment metadata for an inquiry, newest first.
    pub async fn list_by_inquiry(
        pool: &PgPool,
        inquiry_id: DbId,
    ) -> Result<Vec<InquiryAttachment>, sqlx::Error> {
        let query = format!(
            "SELECT {METADATA_COLUMNS} FROM inquiry_attachments
             WHERE inquiry_id = $1
             ORDER BY created_at DESC, id DESC"
        );
        sqlx::query_as::<_, InquiryAttachment>(&query)
            .bind(inquiry_id)
            .fetch_all(pool)
            .await
    }

    /// Fetch one attachment including its bytes.
    pub async fn find_file(pool: &PgPool, id: DbId) -> Result<Option<AttachmentFile>, sqlx::Error> {
        sqlx::query_as::<_, AttachmentFile>(
            "SELECT id, original_name, content_type, file_data
             FROM inquiry_attachments WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(pool)
        .await
    }

    pub async fn count_by_inquiry(pool: &PgPool, inquiry_id: DbId) -> Result<i64, sqlx::Error> {
        let row: (i64,) =
            sqlx::query_as("SELECT COUNT(*) FROM inquiry_attachments WHERE inquiry_id = $1")
                .bind(inquiry_id)
                .fetch_one(pool)
                .await?;
        Ok(row.0)
    }
}
