//! Router construction and shared handler state.
//!
//! # Responsibility
//! - Compose repository → service → routes at startup.
//! - Own the route table for the `/api` surface.
//!
//! # Invariants
//! - Handlers hold no per-request state; everything flows through `AppState`.

use axum::routing::get;
use axum::Router;
use fruitapp_core::{FruitService, SqliteFruitRepository};
use std::sync::Arc;

mod error;
mod fruits;
mod health;

pub use error::ApiError;
pub use fruits::FruitDraft;

/// Shared state for all handlers.
///
/// The service (and the repository behind it) is stateless per request;
/// this struct exists only to hand the composed stack to axum.
pub struct AppState {
    pub service: FruitService<SqliteFruitRepository>,
}

/// Builds the API router over an explicitly composed service stack.
pub fn router(service: FruitService<SqliteFruitRepository>) -> Router {
    let state = Arc::new(AppState { service });

    Router::new()
        .route("/api/health", get(health::check))
        .route("/api/fruits", get(fruits::list).post(fruits::create))
        .route("/api/fruits/:id", get(fruits::get_by_id))
        .with_state(state)
}
