use axum::extract::Query;
use axum::Json;
use serde::{Deserialize, Serialize};

use credzen_core::{recommend_lessons, LessonRecommendation, RiskLevel};

fn default_risk_level() -> String {
    "Low".to_string()
}

#[derive(Debug, Deserialize)]
pub struct RecommendationQuery {
    #[serde(default)]
    pub utilization: f64,
    #[serde(default = "default_risk_level")]
    pub risk_level: String,
}

#[derive(Debug, Serialize)]
pub struct RecommendationResponse {
    pub modules: Vec<LessonRecommendation>,
}

pub async fn recommendations(
    Query(query): Query<RecommendationQuery>,
) -> Json<RecommendationResponse> {
    // Unrecognized level names behave like a low-risk profile.
    let risk_level = query.risk_level.parse().unwrap_or(RiskLevel::Low);

    Json(RecommendationResponse {
        modules: recommend_lessons(query.utilization, risk_level),
    })
}
