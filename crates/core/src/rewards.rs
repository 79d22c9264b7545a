use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;

use crate::transaction::Transaction;
use crate::util::round2;

/// Normalized spend bucket a reward rate is keyed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RuleCategory {
    Dining,
    Travel,
    Shopping,
    Fuel,
    Bills,
    Default,
}

impl fmt::Display for RuleCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RuleCategory::Dining => write!(f, "dining"),
            RuleCategory::Travel => write!(f, "travel"),
            RuleCategory::Shopping => write!(f, "shopping"),
            RuleCategory::Fuel => write!(f, "fuel"),
            RuleCategory::Bills => write!(f, "bills"),
            RuleCategory::Default => write!(f, "default"),
        }
    }
}

/// Keyword rules evaluated top to bottom; the first hit wins, so the order
/// here is part of the contract ("food_travel" is dining, not travel).
const RULE_KEYWORDS: &[(&[&str], RuleCategory)] = &[
    (&["food", "dining"], RuleCategory::Dining),
    (&["travel"], RuleCategory::Travel),
    (&["shopping", "grocer"], RuleCategory::Shopping),
    (&["fuel", "gas"], RuleCategory::Fuel),
    (&["bill"], RuleCategory::Bills),
];

impl RuleCategory {
    /// Resolves a raw machine category key (e.g. "FOOD_AND_DRINK") to a
    /// spend bucket by case-insensitive substring match.
    pub fn resolve(category_key: &str) -> RuleCategory {
        let key = category_key.to_lowercase();
        for (needles, category) in RULE_KEYWORDS {
            if needles.iter().any(|needle| key.contains(needle)) {
                return *category;
            }
        }
        RuleCategory::Default
    }
}

/// Reward-rate table for one card. The rates are percentages of spend.
#[derive(Debug, Clone, Copy)]
pub struct CardRewardProfile {
    pub name: &'static str,
    pub rates: &'static [(RuleCategory, f64)],
    pub default_rate: f64,
}

impl CardRewardProfile {
    pub fn rate_for(&self, category: RuleCategory) -> f64 {
        self.rates
            .iter()
            .find(|(c, _)| *c == category)
            .map(|(_, rate)| *rate)
            .unwrap_or(self.default_rate)
    }
}

/// The fixed card line-up. Slice order doubles as the tie-break: the first
/// card to reach the maximum reward wins.
pub const CARD_PROFILES: &[CardRewardProfile] = &[
    CardRewardProfile {
        name: "Chase",
        rates: &[
            (RuleCategory::Dining, 4.0),
            (RuleCategory::Travel, 4.0),
            (RuleCategory::Shopping, 2.0),
            (RuleCategory::Fuel, 1.0),
            (RuleCategory::Bills, 1.0),
        ],
        default_rate: 1.0,
    },
    CardRewardProfile {
        name: "Regions",
        rates: &[
            (RuleCategory::Dining, 5.0),
            (RuleCategory::Shopping, 5.0),
            (RuleCategory::Bills, 5.0),
            (RuleCategory::Fuel, 2.0),
            (RuleCategory::Travel, 2.0),
        ],
        default_rate: 1.0,
    },
    CardRewardProfile {
        name: "Bank of america",
        rates: &[
            (RuleCategory::Shopping, 5.0),
            (RuleCategory::Dining, 2.0),
            (RuleCategory::Fuel, 2.0),
            (RuleCategory::Bills, 2.0),
            (RuleCategory::Travel, 1.0),
        ],
        default_rate: 1.0,
    },
];

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RewardSummary {
    pub best_card: String,
    pub max_reward: f64,
    pub total_spend: f64,
    pub top_category: String,
    /// Accumulated reward for every card, winner included, so callers can
    /// show the alternatives.
    pub potential_rewards: BTreeMap<String, f64>,
}

/// Scores a transaction batch against the fixed card line-up and picks the
/// card with the highest accumulated reward.
///
/// Pure and total: any input, including an empty batch, yields a summary.
/// Refunds and credits (amount <= 0) are excluded from spend and rewards.
pub fn score_rewards(transactions: &[Transaction]) -> RewardSummary {
    let mut card_totals = vec![0.0_f64; CARD_PROFILES.len()];
    // Insertion order is the tie-break for the top category.
    let mut category_totals: Vec<(String, f64)> = Vec::new();
    let mut total_spend = 0.0;

    for tx in transactions {
        if tx.amount <= 0.0 {
            continue;
        }

        let label = tx.display_label();
        match category_totals.iter().position(|(seen, _)| seen == label) {
            Some(idx) => category_totals[idx].1 += tx.amount,
            None => category_totals.push((label.to_string(), tx.amount)),
        }
        total_spend += tx.amount;

        let bucket = RuleCategory::resolve(tx.category_key.as_deref().unwrap_or(""));
        for (profile, total) in CARD_PROFILES.iter().zip(card_totals.iter_mut()) {
            *total += tx.amount * profile.rate_for(bucket) / 100.0;
        }
    }

    // Strict comparisons keep the scans first-wins on ties.
    let mut best = 0;
    for (idx, total) in card_totals.iter().enumerate() {
        if *total > card_totals[best] {
            best = idx;
        }
    }

    let mut top_category = "General";
    let mut top_amount = 0.0;
    for (label, amount) in &category_totals {
        if *amount > top_amount {
            top_amount = *amount;
            top_category = label;
        }
    }

    RewardSummary {
        best_card: CARD_PROFILES[best].name.to_string(),
        max_reward: round2(card_totals[best]),
        total_spend: round2(total_spend),
        top_category: top_category.to_string(),
        potential_rewards: CARD_PROFILES
            .iter()
            .map(|profile| profile.name.to_string())
            .zip(card_totals)
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spend(amount: f64, category_key: &str) -> Transaction {
        Transaction {
            amount,
            category: None,
            category_label: None,
            category_key: Some(category_key.to_string()),
        }
    }

    fn labeled(amount: f64, label: &str, category_key: &str) -> Transaction {
        Transaction {
            category_label: Some(label.to_string()),
            ..spend(amount, category_key)
        }
    }

    #[test]
    fn resolves_rule_categories_in_priority_order() {
        assert_eq!(RuleCategory::resolve("food_and_drink"), RuleCategory::Dining);
        assert_eq!(RuleCategory::resolve("TRAVEL_FLIGHTS"), RuleCategory::Travel);
        assert_eq!(RuleCategory::resolve("groceries"), RuleCategory::Shopping);
        assert_eq!(RuleCategory::resolve("gas_station"), RuleCategory::Fuel);
        assert_eq!(RuleCategory::resolve("utility_bills"), RuleCategory::Bills);
        assert_eq!(RuleCategory::resolve("entertainment"), RuleCategory::Default);
        assert_eq!(RuleCategory::resolve(""), RuleCategory::Default);
        // First rule wins when keywords from several rules appear.
        assert_eq!(RuleCategory::resolve("food_travel"), RuleCategory::Dining);
    }

    #[test]
    fn dining_spend_prefers_regions() {
        let summary = score_rewards(&[spend(100.0, "food_and_drink")]);
        assert_eq!(summary.best_card, "Regions");
        assert_eq!(summary.max_reward, 5.0);
        assert_eq!(summary.total_spend, 100.0);
        assert_eq!(summary.top_category, "Other");
        assert_eq!(summary.potential_rewards["Chase"], 4.0);
        assert_eq!(summary.potential_rewards["Regions"], 5.0);
        assert_eq!(summary.potential_rewards["Bank of america"], 2.0);
    }

    #[test]
    fn travel_spend_prefers_chase() {
        let summary = score_rewards(&[spend(200.0, "travel")]);
        assert_eq!(summary.best_card, "Chase");
        assert_eq!(summary.max_reward, 8.0);
    }

    #[test]
    fn unmatched_category_falls_back_to_default_rate() {
        let summary = score_rewards(&[spend(100.0, "entertainment")]);
        // Every card pays its default 1% and the first card wins the tie.
        assert_eq!(summary.best_card, "Chase");
        assert_eq!(summary.max_reward, 1.0);
        for reward in summary.potential_rewards.values() {
            assert_eq!(*reward, 1.0);
        }
    }

    #[test]
    fn refunds_are_excluded_everywhere() {
        let summary = score_rewards(&[
            labeled(100.0, "Restaurants", "food_and_drink"),
            labeled(-40.0, "Restaurants", "food_and_drink"),
        ]);
        assert_eq!(summary.total_spend, 100.0);
        assert_eq!(summary.max_reward, 5.0);
        assert_eq!(summary.top_category, "Restaurants");
    }

    #[test]
    fn empty_batch_yields_zeroed_summary() {
        let summary = score_rewards(&[]);
        assert_eq!(summary.best_card, "Chase");
        assert_eq!(summary.max_reward, 0.0);
        assert_eq!(summary.total_spend, 0.0);
        assert_eq!(summary.top_category, "General");
        assert_eq!(summary.potential_rewards.len(), CARD_PROFILES.len());
    }

    #[test]
    fn top_category_is_highest_spend_label() {
        let summary = score_rewards(&[
            labeled(30.0, "Coffee", "food_and_drink"),
            labeled(120.0, "Flights", "travel"),
            labeled(60.0, "Coffee", "food_and_drink"),
        ]);
        assert_eq!(summary.top_category, "Flights");
        assert_eq!(summary.total_spend, 210.0);
    }

    #[test]
    fn first_seen_category_wins_spend_tie() {
        let summary = score_rewards(&[
            labeled(50.0, "Coffee", "food_and_drink"),
            labeled(50.0, "Flights", "travel"),
        ]);
        assert_eq!(summary.top_category, "Coffee");
    }

    #[test]
    fn rewards_accumulate_across_buckets() {
        // 100 dining + 100 shopping:
        //   Chase 4 + 2 = 6, Regions 5 + 5 = 10, Bank of america 2 + 5 = 7.
        let summary = score_rewards(&[
            spend(100.0, "food_and_drink"),
            spend(100.0, "shopping"),
        ]);
        assert_eq!(summary.best_card, "Regions");
        assert_eq!(summary.max_reward, 10.0);
        assert_eq!(summary.potential_rewards["Bank of america"], 7.0);
    }
}
