//! Fruit use-case service.
//!
//! # Responsibility
//! - Provide stable list/save entry points for callers.
//! - Delegate persistence to repository implementations unchanged.
//!
//! # Invariants
//! - Service APIs never bypass repository validation/persistence contracts.
//! - Service layer remains storage-agnostic and holds no per-request state.

use crate::model::fruit::{Fruit, FruitId};
use crate::repo::fruit_repo::{FruitRepository, RepoResult};

/// Use-case service wrapper for fruit operations.
///
/// Pure delegation: no transformation, transaction boundaries, or error
/// translation beyond what the repository raises.
pub struct FruitService<R: FruitRepository> {
    repo: R,
}

impl<R: FruitRepository> FruitService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Returns every persisted fruit, unchanged from the repository.
    pub fn get_all_fruits(&self) -> RepoResult<Vec<Fruit>> {
        self.repo.find_all()
    }

    /// Returns one fruit by stable ID.
    pub fn get_fruit(&self, id: FruitId) -> RepoResult<Option<Fruit>> {
        self.repo.find_by_id(id)
    }

    /// Persists a fruit through the repository upsert and returns the
    /// persisted representation.
    pub fn save_fruit(&self, fruit: &Fruit) -> RepoResult<Fruit> {
        self.repo.save(fruit)
    }
}
