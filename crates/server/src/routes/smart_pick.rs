use std::collections::BTreeMap;

use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};

use credzen_core::{score_rewards, Transaction};
use credzen_llm::{advisor_prompt, fallback_report, parse_report};

use crate::error::ApiError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    #[serde(default)]
    pub transactions: Vec<Transaction>,
    /// The user's wallet, echoed by the frontend. Not used by the scorer,
    /// which ranks the fixed card line-up.
    #[serde(default)]
    pub cards: Vec<serde_json::Value>,
}

#[derive(Debug, Serialize)]
pub struct CategoryShare {
    pub category: String,
    pub amount: f64,
    pub percentage: u8,
}

#[derive(Debug, Serialize)]
pub struct AnalyzeResponse {
    pub top_spending_categories: Vec<CategoryShare>,
    pub spending_insights: Vec<String>,
    pub smart_card_usage_advice: String,
    pub reward_optimization_tips: Vec<String>,
    pub potential_rewards: BTreeMap<String, f64>,
}

/// Deterministic reward scoring merged with model-phrased advice. The
/// numbers never come from the model; a model failure only costs prose.
pub async fn analyze(
    State(state): State<AppState>,
    Json(request): Json<AnalyzeRequest>,
) -> Result<Json<AnalyzeResponse>, ApiError> {
    tracing::debug!(
        transactions = request.transactions.len(),
        cards = request.cards.len(),
        "analyzing spending batch"
    );

    let summary = score_rewards(&request.transactions);

    let report = match state.llm.generate(&advisor_prompt(&summary)).await {
        Ok(raw) => parse_report(&raw).unwrap_or_else(|| fallback_report(&summary)),
        Err(err) => {
            tracing::warn!("advice model unavailable, using fallback: {err}");
            fallback_report(&summary)
        }
    };

    Ok(Json(AnalyzeResponse {
        top_spending_categories: vec![CategoryShare {
            category: summary.top_category.clone(),
            amount: summary.total_spend,
            percentage: 100,
        }],
        spending_insights: report.spending_insights,
        smart_card_usage_advice: report.smart_card_usage_advice,
        reward_optimization_tips: report.reward_optimization_tips,
        potential_rewards: summary.potential_rewards,
    }))
}
