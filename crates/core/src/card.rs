use serde::{Deserialize, Serialize};

fn default_color() -> String {
    "from-purple-500 to-purple-700".to_string()
}

/// A user-entered credit card. Wire names (camelCase, the `type` key and
/// the gradient `color`) are fixed by the wallet frontend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Card {
    pub id: i64,
    pub name: String,
    pub last_four: String,
    #[serde(rename = "type")]
    pub card_type: String,
    pub limit: f64,
    pub balance: f64,
    pub billing_day: u8,
    pub due_day: u8,
    #[serde(default = "default_color")]
    pub color: String,
}

/// Create/update payload: a card without an identity yet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardDraft {
    pub name: String,
    pub last_four: String,
    #[serde(rename = "type")]
    pub card_type: String,
    pub limit: f64,
    pub balance: f64,
    pub billing_day: u8,
    pub due_day: u8,
    #[serde(default = "default_color")]
    pub color: String,
}

impl CardDraft {
    pub fn into_card(self, id: i64) -> Card {
        Card {
            id,
            name: self.name,
            last_four: self.last_four,
            card_type: self.card_type,
            limit: self.limit,
            balance: self.balance,
            billing_day: self.billing_day,
            due_day: self.due_day,
            color: self.color,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WalletSummary {
    pub total_cards: usize,
    pub total_limit: f64,
    pub total_balance: f64,
    pub total_available: f64,
    /// Balance over limit as a whole-number percentage; 0 with no limit.
    pub utilization: f64,
}

pub fn summarize(cards: &[Card]) -> WalletSummary {
    let total_limit: f64 = cards.iter().map(|card| card.limit).sum();
    let total_balance: f64 = cards.iter().map(|card| card.balance).sum();
    let utilization = if total_limit > 0.0 {
        (total_balance / total_limit * 100.0).round()
    } else {
        0.0
    };

    WalletSummary {
        total_cards: cards.len(),
        total_limit,
        total_balance,
        total_available: total_limit - total_balance,
        utilization,
    }
}
