//! Repository for the `services` and `projects` tables.
//!
//! Both tables share a shape, so every method takes a [`ContentKind`] to pick
//! the table.

use fabsite_core::content::ContentKind;
use fabsite_core::types::DbId;
use sqlx::{PgConnection, PgPool};

use crate::models::content::{ContentImage, ContentItem, CreateContentItem};

const LISTING_COLUMNS: &str = "id, title, description, image_alt, sort_order, is_active";

pub struct ContentRepo;

impl ContentRepo {
    /// Active rows ordered by `sort_order`, then `title`.
    pub async fn list_active(
        pool: &PgPool,
        kind: ContentKind,
    ) -> Result<Vec<ContentItem>, sqlx::Error> {
        let query = format!(
            "SELECT {LISTING_COLUMNS} FROM {table}
             WHERE is_active
             ORDER BY sort_order, title, id",
            table = kind.table()
        );
        sqlx::query_as::<_, ContentItem>(&query).fetch_all(pool).await
    }

    /// Image of an active row. Inactive rows are treated as absent.
    pub async fn find_active_image(
        pool: &PgPool,
        kind: ContentKind,
        id: DbId,
    ) -> Result<Option<ContentImage>, sqlx::Error> {
        let query = format!(
            "SELECT image, image_type FROM {table} WHERE id = $1 AND is_active",
            table = kind.table()
        );
        sqlx::query_as::<_, ContentImage>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn create(
        conn: &mut PgConnection,
        kind: ContentKind,
        input: &CreateContentItem,
    ) -> Result<DbId, sqlx::Error> {
        let query = format!(
            "INSERT INTO {table}
                (title, description, image_alt, image, image_type, sort_order, is_active)
             VALUES ($1, $2, $3, $4, $5, $6, $7)
             RETURNING id",
            table = kind.table()
        );
        let row: (DbId,) = sqlx::query_as(&query)
            .bind(&input.title)
            .bind(&input.description)
            .bind(&input.image_alt)
            .bind(&input.image)
            .bind(&input.image_type)
            .bind(input.sort_order)
            .bind(input.is_active)
            .fetch_one(conn)
            .await?;
        Ok(row.0)
    }

    /// Remove every row of a kind. Used only by the seeding tool.
    pub async fn delete_all(conn: &mut PgConnection, kind: ContentKind) -> Result<u64, sqlx::Error> {
        let query = format!("DELETE FROM {table}", table = kind.table());
        let result = sqlx::query(&query).execute(conn).await?;
        Ok(result.rows_affected())
    }
}
