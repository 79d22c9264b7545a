use axum::extract::{Path, State};
use axum::Json;
use serde_json::json;

use credzen_core::{Card, CardDraft, WalletSummary};

use crate::error::ApiError;
use crate::state::AppState;

pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<Card>>, ApiError> {
    Ok(Json(state.cards.list().await?))
}

pub async fn create(
    State(state): State<AppState>,
    Json(draft): Json<CardDraft>,
) -> Result<Json<Card>, ApiError> {
    Ok(Json(state.cards.add(draft).await?))
}

pub async fn update(
    State(state): State<AppState>,
    Path(card_id): Path<i64>,
    Json(draft): Json<CardDraft>,
) -> Result<Json<Card>, ApiError> {
    state
        .cards
        .update(card_id, draft)
        .await?
        .map(Json)
        .ok_or(ApiError::NotFound("Card not found"))
}

pub async fn remove(
    State(state): State<AppState>,
    Path(card_id): Path<i64>,
) -> Result<Json<serde_json::Value>, ApiError> {
    if state.cards.delete(card_id).await? {
        Ok(Json(json!({ "message": "Card deleted successfully" })))
    } else {
        Err(ApiError::NotFound("Card not found"))
    }
}

pub async fn summary(State(state): State<AppState>) -> Result<Json<WalletSummary>, ApiError> {
    Ok(Json(state.cards.summary().await?))
}
