use axum::Json;
use serde_json::json;

pub mod cards;
pub mod learning;
pub mod link;
pub mod simulator;
pub mod smart_pick;

pub async fn root() -> Json<serde_json::Value> {
    Json(json!({ "message": "CredZen backend running" }))
}
