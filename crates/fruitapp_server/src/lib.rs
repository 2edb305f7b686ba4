//! HTTP surface for the fruit service.
//!
//! # Responsibility
//! - Translate HTTP routes into `fruitapp_core` service calls.
//! - Keep request/response DTOs and status mapping out of core.

pub mod api;

pub use api::{router, AppState};
