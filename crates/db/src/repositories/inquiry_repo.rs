//! Repository for the `inquiries` table.

use fabsite_core::inquiry::{AttachmentUpload, InquiryStatus, InquirySubmission};
use fabsite_core::types::DbId;
use sqlx::PgPool;

use crate::models::inquiry::{Inquiry, StoredInquiry};
use crate::repositories::AttachmentRepo;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, full_name, email, contact_number, requirement, message, \
    status, created_at, updated_at";

pub struct InquiryRepo;

impl InquiryRepo {
    /// Insert an inquiry and all of its attachments in one transaction.
    ///
    /// Either every row is committed or none is: an error from any insert
    /// returns early and the dropped transaction rolls back.
    pub async fn create_with_attachments(
        pool: &PgPool,
        input: &InquirySubmission,
        attachments: &[AttachmentUpload],
    ) -> Result<StoredInquiry, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let query = format!(
            "INSERT INTO inquiries (full_name, email, contact_number, requirement, message)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {COLUMNS}"
        );
        let inquiry = sqlx::query_as::<_, Inquiry>(&query)
            .bind(&input.full_name)
            .bind(&input.email)
            .bind(&input.contact_number)
            .bind(&input.requirement)
            .bind(&input.message)
            .fetch_one(&mut *tx)
            .await?;

        let mut attachment_ids = Vec::with_capacity(attachments.len());
        for upload in attachments {
            let id = AttachmentRepo::insert(&mut *tx, inquiry.id, upload).await?;
            attachment_ids.push(id);
        }

        tx.commit().await?;

        Ok(StoredInquiry {
            inquiry,
            attachment_ids,
        })
    }

    /// All inquiries, newest first regardless of status.
    pub async fn list_all(pool: &PgPool) -> Result<Vec<Inquiry>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM inquiries ORDER BY created_at DESC, id DESC");
        sqlx::query_as::<_, Inquiry>(&query).fetch_all(pool).await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Inquiry>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM inquiries WHERE id = $1");
        sqlx::query_as::<_, Inquiry>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Set an inquiry's status. Returns the number of rows affected; `0`
    /// means no inquiry has that id.
    pub async fn update_status(
        pool: &PgPool,
        id: DbId,
        status: InquiryStatus,
    ) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("UPDATE inquiries SET status = $1 WHERE id = $2")
            .bind(status.as_str())
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected())
    }

    /// Delete an inquiry. Its attachments go with it via `ON DELETE CASCADE`.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("DELETE FROM inquiries WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected())
    }
}
