// ABOUTME: Tag storage layer using SQLite
// ABOUTME: Keyed CRUD with race-safe uniqueness enforcement and paginated listing

use chrono::Utc;
use sqlx::{Row, SqlitePool};
use tracing::debug;

use crate::name::{normalize, tag_key};
use crate::types::{AddOutcome, RemoveOutcome, Tag};
use tagbox_storage::StorageError;

/// Default page size for tag listings.
pub const TAGS_PER_PAGE: u32 = 50;

pub struct TagStorage {
    pool: SqlitePool,
}

impl TagStorage {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Insert a new tag. The table's primary key, not a pre-check, decides
    /// duplicates, so two concurrent adds for the same key resolve to
    /// exactly one `Created` and one `AlreadyExists`.
    pub async fn add(
        &self,
        guild_id: u64,
        name: &str,
        author_id: u64,
        content: &str,
    ) -> Result<AddOutcome, StorageError> {
        let normalized = normalize(name);
        if normalized.is_empty() || content.trim().is_empty() {
            return Ok(AddOutcome::InvalidName);
        }

        let key = tag_key(guild_id, name);
        let now = Utc::now();

        debug!("Adding tag '{}' for guild {}", normalized, guild_id);

        let result = sqlx::query(
            r#"
            INSERT INTO tags (key, name, guild_id, author_id, content, created_at)
            VALUES (?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&key)
        .bind(&normalized)
        .bind(guild_id as i64)
        .bind(author_id as i64)
        .bind(content)
        .bind(now)
        .execute(&self.pool)
        .await;

        match result {
            Ok(_) => Ok(AddOutcome::Created(Tag {
                key,
                name: normalized,
                guild_id,
                author_id,
                content: content.to_string(),
                created_at: now,
            })),
            Err(sqlx::Error::Database(db_err)) => {
                // SQLite UNIQUE constraint violation
                if let Some(code) = db_err.code() {
                    if code == "2067" || code == "1555" {
                        debug!("Tag '{}' already exists in guild {}", normalized, guild_id);
                        return Ok(AddOutcome::AlreadyExists);
                    }
                }
                Err(StorageError::Sqlx(sqlx::Error::Database(db_err)))
            }
            Err(e) => Err(StorageError::Sqlx(e)),
        }
    }

    /// Delete a tag by key. A delete racing with another delete simply
    /// observes `NotFound`.
    pub async fn remove(&self, guild_id: u64, name: &str) -> Result<RemoveOutcome, StorageError> {
        let key = tag_key(guild_id, name);

        debug!("Removing tag key '{}'", key);

        let result = sqlx::query("DELETE FROM tags WHERE key = ?")
            .bind(&key)
            .execute(&self.pool)
            .await
            .map_err(StorageError::Sqlx)?;

        if result.rows_affected() == 0 {
            Ok(RemoveOutcome::NotFound)
        } else {
            Ok(RemoveOutcome::Removed)
        }
    }

    /// Exact-match lookup by key. No fuzzy matching, no partial names.
    pub async fn get(&self, guild_id: u64, name: &str) -> Result<Option<Tag>, StorageError> {
        let key = tag_key(guild_id, name);

        debug!("Fetching tag key '{}'", key);

        let row = sqlx::query("SELECT * FROM tags WHERE key = ?")
            .bind(&key)
            .fetch_optional(&self.pool)
            .await
            .map_err(StorageError::Sqlx)?;

        match row {
            Some(row) => Ok(Some(self.row_to_tag(&row)?)),
            None => Ok(None),
        }
    }

    /// All tags for a guild ordered by normalized name.
    pub async fn list(&self, guild_id: u64) -> Result<Vec<Tag>, StorageError> {
        debug!("Listing tags for guild {}", guild_id);

        let rows = sqlx::query(
            r#"
            SELECT * FROM tags
            WHERE guild_id = ?
            ORDER BY name, created_at
            "#,
        )
        .bind(guild_id as i64)
        .fetch_all(&self.pool)
        .await
        .map_err(StorageError::Sqlx)?;

        let mut tags = Vec::new();
        for row in rows {
            tags.push(self.row_to_tag(&row)?);
        }

        Ok(tags)
    }

    /// One page of the ordered listing plus the guild's total tag count.
    /// A page index past the end yields an empty page, never an error.
    pub async fn list_paginated(
        &self,
        guild_id: u64,
        page: u32,
        page_size: Option<u32>,
    ) -> Result<(Vec<Tag>, i64), StorageError> {
        let page_size = page_size.unwrap_or(TAGS_PER_PAGE);

        debug!(
            "Listing tags for guild {} (page: {}, page_size: {})",
            guild_id, page, page_size
        );

        let total = self.count(guild_id).await?;

        let rows = sqlx::query(
            r#"
            SELECT * FROM tags
            WHERE guild_id = ?
            ORDER BY name, created_at
            LIMIT ? OFFSET ?
            "#,
        )
        .bind(guild_id as i64)
        .bind(page_size as i64)
        .bind(page as i64 * page_size as i64)
        .fetch_all(&self.pool)
        .await
        .map_err(StorageError::Sqlx)?;

        let mut tags = Vec::new();
        for row in rows {
            tags.push(self.row_to_tag(&row)?);
        }

        Ok((tags, total))
    }

    /// Total number of tags in a guild.
    pub async fn count(&self, guild_id: u64) -> Result<i64, StorageError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM tags WHERE guild_id = ?")
            .bind(guild_id as i64)
            .fetch_one(&self.pool)
            .await
            .map_err(StorageError::Sqlx)?;

        Ok(count)
    }

    fn row_to_tag(&self, row: &sqlx::sqlite::SqliteRow) -> Result<Tag, StorageError> {
        Ok(Tag {
            key: row.try_get("key")?,
            name: row.try_get("name")?,
            guild_id: row.try_get::<i64, _>("guild_id")? as u64,
            author_id: row.try_get::<i64, _>("author_id")? as u64,
            content: row.try_get("content")?,
            created_at: row.try_get("created_at")?,
        })
    }
}
