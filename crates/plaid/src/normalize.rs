use std::collections::HashMap;

use serde::Serialize;

use crate::client::{PlaidAccount, PlaidTransaction};

/// A provider transaction flattened for the frontend feed: merchant text,
/// both category forms, and the owning account rendered as "Name (mask)".
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NormalizedTransaction {
    pub date: String,
    pub merchant: String,
    pub amount: f64,
    pub category: String,
    pub category_label: String,
    pub card: String,
}

/// Flattens raw provider transactions against the account list.
pub fn normalize(
    accounts: &[PlaidAccount],
    transactions: Vec<PlaidTransaction>,
) -> Vec<NormalizedTransaction> {
    let labels = account_labels(accounts);

    transactions
        .into_iter()
        .map(|tx| {
            let (category, category_label) = categorize(&tx);
            NormalizedTransaction {
                card: labels
                    .get(&tx.account_id)
                    .cloned()
                    .unwrap_or_else(|| "Unknown Card".to_string()),
                date: tx.date,
                merchant: tx.name,
                amount: tx.amount,
                category,
                category_label,
            }
        })
        .collect()
}

fn account_labels(accounts: &[PlaidAccount]) -> HashMap<String, String> {
    accounts
        .iter()
        .map(|account| {
            let name = [&account.official_name, &account.name]
                .into_iter()
                .find_map(|candidate| candidate.as_deref().filter(|s| !s.is_empty()))
                .unwrap_or("Unknown Account");
            let mask = account.mask.as_deref().filter(|s| !s.is_empty()).unwrap_or("....");
            (account.account_id.clone(), format!("{name} ({mask})"))
        })
        .collect()
}

/// Derives the (machine category, display label) pair. The enriched
/// personal-finance category wins over the legacy hierarchy list.
fn categorize(tx: &PlaidTransaction) -> (String, String) {
    if let Some(pfc) = &tx.personal_finance_category {
        // FOOD_AND_DRINK_FAST_FOOD reads as "Food And Drink Fast Food".
        return (pfc.primary.clone(), title_case(&pfc.detailed.replace('_', " ")));
    }

    if let Some(hierarchy) = tx.category.as_ref().filter(|list| !list.is_empty()) {
        let label = hierarchy.last().cloned().unwrap_or_default();
        return (hierarchy[0].clone(), label);
    }

    ("Uncategorized".to_string(), "General".to_string())
}

fn title_case(text: &str) -> String {
    text.split(' ')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first
                    .to_uppercase()
                    .chain(chars.flat_map(char::to_lowercase))
                    .collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}
