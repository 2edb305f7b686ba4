//! Fruit domain model.
//!
//! # Responsibility
//! - Define the canonical fruit record shared by repository, service and
//!   HTTP layers.
//! - Provide constructors and declarative-style field validation.
//!
//! # Invariants
//! - `id` is stable and never reused for another fruit.
//! - `name` is non-empty after trimming and at most `MAX_NAME_CHARS` long.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Stable identifier for every persisted fruit.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type FruitId = Uuid;

/// Upper bound on fruit name length, in characters.
pub const MAX_NAME_CHARS: usize = 100;

/// Validation failure for a fruit record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FruitValidationError {
    /// The nil UUID is reserved and never a valid identity.
    NilUuid,
    /// `name` is empty or whitespace-only.
    EmptyName,
    /// `name` exceeds `MAX_NAME_CHARS` characters.
    NameTooLong { len: usize },
}

impl Display for FruitValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NilUuid => write!(f, "fruit id must not be the nil uuid"),
            Self::EmptyName => write!(f, "fruit name must not be empty"),
            Self::NameTooLong { len } => write!(
                f,
                "fruit name length {len} exceeds maximum of {MAX_NAME_CHARS} characters"
            ),
        }
    }
}

impl Error for FruitValidationError {}

/// Canonical fruit record.
///
/// The wire representation is a flat JSON object with `id` and `name`;
/// storage timestamps are bookkeeping and never serialized here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fruit {
    /// Stable global ID used as the storage primary key.
    pub id: FruitId,
    /// Human-readable fruit name.
    pub name: String,
}

impl Fruit {
    /// Creates a new fruit with a generated stable ID.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
        }
    }

    /// Creates a fruit with a caller-provided stable ID.
    ///
    /// Used by upsert paths where identity already exists externally.
    ///
    /// # Invariants
    /// - The provided `id` must remain stable for this fruit's lifetime.
    /// - This constructor does not validate the record; call `validate()`.
    pub fn with_id(id: FruitId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }

    /// Checks declared field constraints.
    ///
    /// # Errors
    /// - `NilUuid` when `id` is the nil UUID.
    /// - `EmptyName` when `name` trims to nothing.
    /// - `NameTooLong` when `name` exceeds `MAX_NAME_CHARS` characters.
    pub fn validate(&self) -> Result<(), FruitValidationError> {
        if self.id.is_nil() {
            return Err(FruitValidationError::NilUuid);
        }
        if self.name.trim().is_empty() {
            return Err(FruitValidationError::EmptyName);
        }
        let len = self.name.chars().count();
        if len > MAX_NAME_CHARS {
            return Err(FruitValidationError::NameTooLong { len });
        }
        Ok(())
    }
}
