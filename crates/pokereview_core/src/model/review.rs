//! Review domain model.
//!
//! # Invariants
//! - `id` is assigned by storage on first save and never reused.
//! - `title` and `content` are required, non-empty text.
//! - `stars` is constrained to 1..=5 at validation time and by a schema
//!   `CHECK` constraint.

use super::{require_non_empty, require_valid_id, EntityId, ValidationError};
use serde::{Deserialize, Serialize};

pub const STARS_MIN: i64 = 1;
pub const STARS_MAX: i64 = 5;

/// One user review of a Pokemon.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Review {
    /// Storage-assigned primary key. `None` until the first save.
    pub id: Option<EntityId>,
    pub title: String,
    pub content: String,
    /// Star rating, 1..=5.
    pub stars: i64,
}

impl Review {
    /// Creates an unsaved Review; storage assigns the id on first save.
    pub fn new(title: impl Into<String>, content: impl Into<String>, stars: i64) -> Self {
        Self {
            id: None,
            title: title.into(),
            content: content.into(),
            stars,
        }
    }

    /// Checks required-field, rating-range, and id invariants.
    pub fn validate(&self) -> Result<(), ValidationError> {
        require_valid_id("review", self.id)?;
        require_non_empty("review", "title", &self.title)?;
        require_non_empty("review", "content", &self.content)?;
        if !(STARS_MIN..=STARS_MAX).contains(&self.stars) {
            return Err(ValidationError::StarsOutOfRange { stars: self.stars });
        }
        Ok(())
    }
}
