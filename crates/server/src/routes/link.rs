use axum::extract::{Query, State};
use axum::Json;
use chrono::NaiveDate;
use serde::Deserialize;
use serde_json::json;

use credzen_plaid::NormalizedTransaction;

use crate::error::ApiError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct LinkTokenRequest {
    pub user_id: String,
}

#[derive(Debug, Deserialize)]
pub struct ExchangeRequest {
    pub public_token: String,
}

#[derive(Debug, Deserialize)]
pub struct TransactionsQuery {
    pub access_token: String,
}

pub async fn create_link_token(
    State(state): State<AppState>,
    Json(request): Json<LinkTokenRequest>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let token = state.plaid.create_link_token(&request.user_id).await?;
    Ok(Json(token))
}

pub async fn exchange_public_token(
    State(state): State<AppState>,
    Json(request): Json<ExchangeRequest>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let access_token = state
        .plaid
        .exchange_public_token(&request.public_token)
        .await?;
    Ok(Json(json!({ "access_token": access_token })))
}

pub async fn transactions(
    State(state): State<AppState>,
    Query(query): Query<TransactionsQuery>,
) -> Result<Json<Vec<NormalizedTransaction>>, ApiError> {
    // Fixed demo window; linked sandbox items all have history in it.
    let start_date = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
    let end_date = NaiveDate::from_ymd_opt(2026, 2, 1).unwrap();

    let feed = state
        .plaid
        .transactions(&query.access_token, start_date, end_date)
        .await?;
    Ok(Json(feed))
}
