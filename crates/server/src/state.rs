use credzen_llm::LlmClient;
use credzen_plaid::PlaidClient;
use credzen_storage::CardStore;

/// Shared handler state. Every member is cheap to clone; the store carries
/// only its path and the clients share their connection pools.
#[derive(Clone)]
pub struct AppState {
    pub cards: CardStore,
    pub plaid: PlaidClient,
    pub llm: LlmClient,
}
