//! Repository layer abstractions and persistence implementations.
//!
//! # Responsibility
//! - Define use-case oriented data access contracts.
//! - Isolate SQLite query details from service/business orchestration.
//!
//! # Invariants
//! - Repository writes must enforce `Fruit::validate()` before persistence.
//! - Repository reads reject invalid persisted state instead of masking it.

pub mod fruit_repo;
