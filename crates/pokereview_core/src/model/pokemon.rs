//! Pokemon domain model.
//!
//! # Invariants
//! - `id` is assigned by storage on first save and never reused for another
//!   record.
//! - `name` and `kind` are required, non-empty text.
//! - `kind` is not unique; many Pokemon share one type.

use super::{require_non_empty, require_valid_id, EntityId, ValidationError};
use serde::{Deserialize, Serialize};

/// Catalog record for one Pokemon.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pokemon {
    /// Storage-assigned primary key. `None` until the first save.
    pub id: Option<EntityId>,
    pub name: String,
    /// Elemental type, e.g. `electric`. Serialized as `type` to match the
    /// external schema naming (`type` is reserved in Rust).
    #[serde(rename = "type")]
    pub kind: String,
}

impl Pokemon {
    /// Creates an unsaved Pokemon; storage assigns the id on first save.
    pub fn new(name: impl Into<String>, kind: impl Into<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
            kind: kind.into(),
        }
    }

    /// Checks required-field and id invariants. Write paths call this
    /// before SQL, so a caller-constructed non-positive id never reaches
    /// storage.
    pub fn validate(&self) -> Result<(), ValidationError> {
        require_valid_id("pokemon", self.id)?;
        require_non_empty("pokemon", "name", &self.name)?;
        require_non_empty("pokemon", "type", &self.kind)?;
        Ok(())
    }
}
