//! Review repository contract and SQLite implementation.
//!
//! Symmetric to the Pokemon store: upsert save, explicit-absence lookup,
//! full scan, idempotent delete.
//!
//! # Invariants
//! - Write paths must call `Review::validate()` before SQL mutations.
//! - Read paths must reject invalid persisted state instead of masking it.

use crate::model::review::Review;
use crate::model::EntityId;
use crate::repo::{ensure_connection_ready, RepoError, RepoResult};
use rusqlite::{params, Connection, Row};

const REVIEW_SELECT_SQL: &str = "SELECT id, title, content, stars FROM reviews";

/// Repository interface for Review persistence operations.
pub trait ReviewRepository {
    /// Upserts one Review and returns the stored record with its id set.
    fn save(&self, review: &Review) -> RepoResult<Review>;
    /// Gets one Review by id. Missing ids yield `Ok(None)`.
    fn find_by_id(&self, id: EntityId) -> RepoResult<Option<Review>>;
    /// Lists every stored Review in id order.
    fn find_all(&self) -> RepoResult<Vec<Review>>;
    /// Deletes one Review by id. Idempotent: unknown ids succeed silently.
    fn delete_by_id(&self, id: EntityId) -> RepoResult<()>;
}

/// SQLite-backed Review repository.
pub struct SqliteReviewRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteReviewRepository<'conn> {
    /// Constructs a repository from a migrated/ready connection.
    pub fn try_new(conn: &'conn Connection) -> RepoResult<Self> {
        ensure_connection_ready(conn, "reviews", &["id", "title", "content", "stars"])?;
        Ok(Self { conn })
    }
}

impl ReviewRepository for SqliteReviewRepository<'_> {
    fn save(&self, review: &Review) -> RepoResult<Review> {
        review.validate()?;

        self.conn.execute(
            "INSERT INTO reviews (id, title, content, stars)
             VALUES (?1, ?2, ?3, ?4)
             ON CONFLICT(id) DO UPDATE SET
                title = excluded.title,
                content = excluded.content,
                stars = excluded.stars;",
            params![
                review.id,
                review.title.as_str(),
                review.content.as_str(),
                review.stars,
            ],
        )?;

        let id = match review.id {
            Some(id) => id,
            None => self.conn.last_insert_rowid(),
        };

        Ok(Review {
            id: Some(id),
            title: review.title.clone(),
            content: review.content.clone(),
            stars: review.stars,
        })
    }

    fn find_by_id(&self, id: EntityId) -> RepoResult<Option<Review>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{REVIEW_SELECT_SQL} WHERE id = ?1;"))?;

        let mut rows = stmt.query([id])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(parse_review_row(row)?));
        }

        Ok(None)
    }

    fn find_all(&self) -> RepoResult<Vec<Review>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{REVIEW_SELECT_SQL} ORDER BY id ASC;"))?;

        let mut rows = stmt.query([])?;
        let mut reviews = Vec::new();
        while let Some(row) = rows.next()? {
            reviews.push(parse_review_row(row)?);
        }

        Ok(reviews)
    }

    fn delete_by_id(&self, id: EntityId) -> RepoResult<()> {
        self.conn
            .execute("DELETE FROM reviews WHERE id = ?1;", [id])?;
        Ok(())
    }
}

fn parse_review_row(row: &Row<'_>) -> RepoResult<Review> {
    let id: EntityId = row.get("id")?;
    if id <= 0 {
        return Err(RepoError::InvalidData(format!(
            "non-positive id value `{id}` in reviews.id"
        )));
    }

    let review = Review {
        id: Some(id),
        title: row.get("title")?,
        content: row.get("content")?,
        stars: row.get("stars")?,
    };
    review.validate()?;
    Ok(review)
}
