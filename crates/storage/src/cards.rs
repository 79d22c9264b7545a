use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use thiserror::Error;
use tokio::fs;

use credzen_core::{summarize, Card, CardDraft, WalletSummary};

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("card store I/O failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("card store encoding failed: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Flat-file card store: one JSON array, rewritten whole on every change.
///
/// A wallet holds a handful of cards, so every operation is load-all /
/// save-all against the backing file.
#[derive(Debug, Clone)]
pub struct CardStore {
    path: PathBuf,
}

impl CardStore {
    /// Opens the store, creating the parent directory and an empty file
    /// when they do not exist yet.
    pub async fn open(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let path = path.into();

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).await?;
            }
        }
        if !path.exists() {
            fs::write(&path, "[]").await?;
        }

        Ok(CardStore { path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub async fn list(&self) -> Result<Vec<Card>, StoreError> {
        self.load().await
    }

    /// Appends a card, assigning the current Unix time in milliseconds as
    /// its id.
    pub async fn add(&self, draft: CardDraft) -> Result<Card, StoreError> {
        let mut cards = self.load().await?;
        let card = draft.into_card(next_card_id());
        cards.push(card.clone());
        self.save(&cards).await?;
        Ok(card)
    }

    /// Replaces the card with the given id. Returns `None` when no card
    /// matches.
    pub async fn update(&self, id: i64, draft: CardDraft) -> Result<Option<Card>, StoreError> {
        let mut cards = self.load().await?;

        let Some(slot) = cards.iter_mut().find(|card| card.id == id) else {
            return Ok(None);
        };
        *slot = draft.into_card(id);
        let updated = slot.clone();

        self.save(&cards).await?;
        Ok(Some(updated))
    }

    /// Removes the card with the given id. Returns whether a card was
    /// actually removed.
    pub async fn delete(&self, id: i64) -> Result<bool, StoreError> {
        let mut cards = self.load().await?;
        let before = cards.len();
        cards.retain(|card| card.id != id);

        if cards.len() == before {
            return Ok(false);
        }
        self.save(&cards).await?;
        Ok(true)
    }

    pub async fn summary(&self) -> Result<WalletSummary, StoreError> {
        Ok(summarize(&self.load().await?))
    }

    async fn load(&self) -> Result<Vec<Card>, StoreError> {
        let content = match fs::read_to_string(&self.path).await {
            Ok(content) => content,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(err) => return Err(err.into()),
        };

        if content.trim().is_empty() {
            return Ok(Vec::new());
        }

        match serde_json::from_str(&content) {
            Ok(cards) => Ok(cards),
            Err(err) => {
                // A corrupt file loses its contents rather than wedging
                // every card endpoint.
                tracing::warn!("card store at {} is corrupt ({err}), resetting", self.path.display());
                self.save(&[]).await?;
                Ok(Vec::new())
            }
        }
    }

    async fn save(&self, cards: &[Card]) -> Result<(), StoreError> {
        let content = serde_json::to_string_pretty(cards)?;
        fs::write(&self.path, content).await?;
        Ok(())
    }
}

fn next_card_id() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_millis() as i64)
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn draft(name: &str, limit: f64, balance: f64) -> CardDraft {
        CardDraft {
            name: name.to_string(),
            last_four: "4242".to_string(),
            card_type: "Visa".to_string(),
            limit,
            balance,
            billing_day: 1,
            due_day: 15,
            color: "from-purple-500 to-purple-700".to_string(),
        }
    }

    async fn store_in(dir: &TempDir) -> CardStore {
        CardStore::open(dir.path().join("cards.json")).await.unwrap()
    }

    #[tokio::test]
    async fn open_creates_missing_file() {
        let dir = TempDir::new().unwrap();
        let store = CardStore::open(dir.path().join("data").join("cards.json"))
            .await
            .unwrap();
        assert!(store.path().exists());
        assert!(store.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn add_assigns_id_and_persists() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir).await;

        let card = store.add(draft("Sapphire", 5000.0, 100.0)).await.unwrap();
        assert!(card.id > 0);

        let listed = store.list().await.unwrap();
        assert_eq!(listed, vec![card]);
    }

    #[tokio::test]
    async fn update_replaces_matching_card() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir).await;
        let card = store.add(draft("Sapphire", 5000.0, 100.0)).await.unwrap();

        let updated = store
            .update(card.id, draft("Sapphire Reserve", 10000.0, 100.0))
            .await
            .unwrap()
            .unwrap();
        assert_eq!(updated.id, card.id);
        assert_eq!(updated.name, "Sapphire Reserve");
        assert_eq!(store.list().await.unwrap(), vec![updated]);
    }

    #[tokio::test]
    async fn update_unknown_id_is_none() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir).await;
        assert!(store.update(999, draft("X", 1.0, 0.0)).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn delete_reports_whether_a_card_was_removed() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir).await;
        let card = store.add(draft("Sapphire", 5000.0, 100.0)).await.unwrap();

        assert!(store.delete(card.id).await.unwrap());
        assert!(!store.delete(card.id).await.unwrap());
        assert!(store.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn summary_reflects_stored_cards() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir).await;
        store.add(draft("A", 5000.0, 1200.0)).await.unwrap();
        store.add(draft("B", 3000.0, 400.0)).await.unwrap();

        let summary = store.summary().await.unwrap();
        assert_eq!(summary.total_cards, 2);
        assert_eq!(summary.total_limit, 8000.0);
        assert_eq!(summary.total_available, 6400.0);
        assert_eq!(summary.utilization, 20.0);
    }

    #[tokio::test]
    async fn corrupt_file_resets_to_empty() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("cards.json");
        std::fs::write(&path, "{not json").unwrap();

        let store = CardStore::open(&path).await.unwrap();
        assert!(store.list().await.unwrap().is_empty());
        // The file itself was healed, not just the in-memory view.
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "[]");
    }

    #[tokio::test]
    async fn blank_file_reads_as_empty() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("cards.json");
        std::fs::write(&path, "  \n").unwrap();

        let store = CardStore::open(&path).await.unwrap();
        assert!(store.list().await.unwrap().is_empty());
    }
}
