//! Domain models for the review catalog.
//!
//! # Responsibility
//! - Define the canonical Pokemon and Review records used by core logic.
//! - Own field-level validation shared by all write paths.
//!
//! # Invariants
//! - Every persisted entity is identified by a positive, storage-assigned
//!   integer id that is never reassigned.
//! - Entities are mutated by replacing field values and re-saving the whole
//!   record; there is no partial-patch path.

use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod pokemon;
pub mod review;

/// Storage-assigned primary key shared by all entities.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type EntityId = i64;

/// Field-level validation failure raised before any SQL mutation runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    /// A required text field is empty or whitespace-only.
    EmptyField {
        entity: &'static str,
        field: &'static str,
    },
    /// Review star rating outside the accepted 1..=5 range.
    StarsOutOfRange { stars: i64 },
    /// An id was supplied by the caller instead of assigned by storage.
    NonPositiveId { entity: &'static str, id: i64 },
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyField { entity, field } => {
                write!(f, "{entity}.{field} must not be empty")
            }
            Self::StarsOutOfRange { stars } => {
                write!(f, "review stars must be within 1..=5, got {stars}")
            }
            Self::NonPositiveId { entity, id } => {
                write!(f, "{entity}.id must be positive when set, got {id}")
            }
        }
    }
}

impl Error for ValidationError {}

pub(crate) fn require_valid_id(
    entity: &'static str,
    id: Option<EntityId>,
) -> Result<(), ValidationError> {
    match id {
        Some(id) if id <= 0 => Err(ValidationError::NonPositiveId { entity, id }),
        _ => Ok(()),
    }
}

pub(crate) fn require_non_empty(
    entity: &'static str,
    field: &'static str,
    value: &str,
) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::EmptyField { entity, field });
    }
    Ok(())
}
