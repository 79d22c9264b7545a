pub mod card;
pub mod learning;
pub mod rewards;
pub mod risk;
pub mod simulator;
pub mod transaction;

pub(crate) mod util;

pub use card::{summarize, Card, CardDraft, WalletSummary};
pub use learning::{recommend_lessons, LessonRecommendation};
pub use rewards::{score_rewards, CardRewardProfile, RewardSummary, RuleCategory, CARD_PROFILES};
pub use risk::{assess_risk, RiskAssessment, RiskLevel};
pub use simulator::{
    amortize, AmortizationResult, LoanTerms, MonthEntry, SimulationError, MAX_SCHEDULE_MONTHS,
};
pub use transaction::Transaction;
