//! Domain model for the fruit resource.
//!
//! # Responsibility
//! - Define the canonical record persisted and served by this crate.
//!
//! # Invariants
//! - Every fruit is identified by a stable, non-nil `FruitId`.
//! - Write paths validate records before persistence.

pub mod fruit;
