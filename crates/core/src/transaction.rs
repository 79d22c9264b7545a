use serde::{Deserialize, Serialize};

/// A transaction as submitted for scoring: the aggregation feed's normalized
/// fields reduced to what the scorer reads. Positive amounts are spend,
/// negative amounts are refunds or credits. Extra fields on the incoming
/// object (date, merchant, card) are ignored on deserialization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub amount: f64,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub category_label: Option<String>,
    #[serde(default)]
    pub category_key: Option<String>,
}

impl Transaction {
    /// Display label used for category spend totals: the human-readable
    /// label when present, else the raw category, else "Other". Empty
    /// strings count as absent.
    pub fn display_label(&self) -> &str {
        for candidate in [&self.category_label, &self.category] {
            if let Some(label) = candidate {
                if !label.is_empty() {
                    return label;
                }
            }
        }
        "Other"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tx(label: Option<&str>, category: Option<&str>) -> Transaction {
        Transaction {
            amount: 10.0,
            category: category.map(str::to_string),
            category_label: label.map(str::to_string),
            category_key: None,
        }
    }

    #[test]
    fn label_prefers_category_label() {
        assert_eq!(
            tx(Some("Fast Food"), Some("FOOD_AND_DRINK")).display_label(),
            "Fast Food"
        );
    }

    #[test]
    fn label_falls_back_to_category() {
        assert_eq!(tx(None, Some("FOOD_AND_DRINK")).display_label(), "FOOD_AND_DRINK");
        assert_eq!(tx(Some(""), Some("FOOD_AND_DRINK")).display_label(), "FOOD_AND_DRINK");
    }

    #[test]
    fn label_defaults_to_other() {
        assert_eq!(tx(None, None).display_label(), "Other");
        assert_eq!(tx(Some(""), Some("")).display_label(), "Other");
    }

    #[test]
    fn deserializes_with_missing_optional_fields() {
        let parsed: Transaction =
            serde_json::from_str(r#"{"amount": 42.5, "category_key": "travel"}"#).unwrap();
        assert_eq!(parsed.amount, 42.5);
        assert_eq!(parsed.category_key.as_deref(), Some("travel"));
        assert!(parsed.category.is_none());
    }
}
