//! Fruit resource handlers.
//!
//! # Responsibility
//! - Translate `/api/fruits` routes into service calls.
//! - Convert creation drafts (optional id) into canonical records.
//!
//! # Invariants
//! - A draft without an id is assigned a generated one before the service
//!   is invoked.
//! - Handlers return the persisted representation unchanged.

use super::error::ApiError;
use super::AppState;
use axum::extract::{Path, State};
use axum::Json;
use fruitapp_core::{Fruit, FruitId};
use log::info;
use serde::Deserialize;
use std::sync::Arc;

/// Wire payload for fruit creation.
///
/// Matches the entity shape except that `id` may be absent; resubmitting
/// with an existing id overwrites that row (upsert).
#[derive(Debug, Clone, Deserialize)]
pub struct FruitDraft {
    pub id: Option<FruitId>,
    pub name: String,
}

impl FruitDraft {
    /// Converts the draft into a canonical record, generating an id when
    /// the client supplied none.
    pub fn into_fruit(self) -> Fruit {
        match self.id {
            Some(id) => Fruit::with_id(id, self.name),
            None => Fruit::new(self.name),
        }
    }
}

/// GET /api/fruits — lists every persisted fruit.
pub async fn list(State(state): State<Arc<AppState>>) -> Result<Json<Vec<Fruit>>, ApiError> {
    let fruits = state.service.get_all_fruits()?;
    Ok(Json(fruits))
}

/// GET /api/fruits/:id — fetches one fruit, 404 when absent.
pub async fn get_by_id(
    State(state): State<Arc<AppState>>,
    Path(id): Path<FruitId>,
) -> Result<Json<Fruit>, ApiError> {
    match state.service.get_fruit(id)? {
        Some(fruit) => Ok(Json(fruit)),
        None => Err(ApiError::not_found(id)),
    }
}

/// POST /api/fruits — persists a fruit and returns it with its id.
pub async fn create(
    State(state): State<Arc<AppState>>,
    Json(draft): Json<FruitDraft>,
) -> Result<Json<Fruit>, ApiError> {
    let fruit = draft.into_fruit();
    let saved = state.service.save_fruit(&fruit)?;
    info!(
        "event=fruit_save module=api status=ok id={} name_chars={}",
        saved.id,
        saved.name.chars().count()
    );
    Ok(Json(saved))
}
