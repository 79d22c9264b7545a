use serde::{Deserialize, Serialize};

use credzen_core::RewardSummary;

/// Qualitative advice layered on top of the deterministic reward numbers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdvisorReport {
    #[serde(default)]
    pub spending_insights: Vec<String>,
    #[serde(default)]
    pub smart_card_usage_advice: String,
    #[serde(default)]
    pub reward_optimization_tips: Vec<String>,
}

/// Builds the chat-format prompt for the advice model. All numbers come
/// from the scorer; the model only phrases them.
pub fn advisor_prompt(summary: &RewardSummary) -> String {
    format!(
        r#"<|system|>
You are a financial advisor AI for CredZen.
Your goal is to generate:
1. "spending_insights": simple text comments about their highest and lowest spending.
2. "smart_card_usage_advice": You MUST follow this EXACT phrasing: "Use {best_card} for your next {top_category} for claiming your {max_reward} points/cashback."
3. "reward_optimization_tips": generic tips to save money.

Top Spending Category: {top_category}
Best Card: {best_card}
Total Potential Reward: {max_reward}

Return a valid JSON object matching this structure EXACTLY:
{{
  "spending_insights": ["Insight 1", "Insight 2"],
  "smart_card_usage_advice": "Use {best_card} for your next {top_category}...",
  "reward_optimization_tips": ["Tip 1", "Tip 2"]
}}
Do NOT wrap in markdown. Return raw JSON.
</s>
<|user|>
Generate insights.
</s>
<|assistant|>
"#,
        best_card = summary.best_card,
        top_category = summary.top_category,
        max_reward = summary.max_reward,
    )
}

/// Pulls the JSON object out of the model's prose: everything between the
/// first `{` and the last `}`. Returns `None` when no parseable object is
/// there.
pub fn parse_report(raw: &str) -> Option<AdvisorReport> {
    let start = raw.find('{')?;
    let end = raw.rfind('}')?;
    if end < start {
        return None;
    }

    match serde_json::from_str(&raw[start..=end]) {
        Ok(report) => Some(report),
        Err(err) => {
            tracing::debug!("model output was not valid JSON: {err}");
            None
        }
    }
}

/// Deterministic stand-in used whenever the hosted model is unreachable or
/// returns garbage.
pub fn fallback_report(summary: &RewardSummary) -> AdvisorReport {
    AdvisorReport {
        spending_insights: vec!["Spending analysis available.".to_string()],
        smart_card_usage_advice: format!(
            "Use {} for your next {}.",
            summary.best_card, summary.top_category
        ),
        reward_optimization_tips: vec!["Track your spending.".to_string()],
    }
}
