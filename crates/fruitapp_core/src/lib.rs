//! Core domain logic for the fruit service.
//! This crate is the single source of truth for business invariants.

pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::fruit::{Fruit, FruitId, FruitValidationError};
pub use repo::fruit_repo::{FruitRepository, RepoError, RepoResult, SqliteFruitRepository};
pub use service::fruit_service::FruitService;

/// Minimal health-check API for the HTTP surface and smoke binaries.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::{core_version, ping};

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
