use anyhow::Context;

use credzen_llm::LlmClient;
use credzen_plaid::{PlaidClient, PlaidCredentials};
use credzen_server::{app, AppState, Config};
use credzen_storage::CardStore;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let config = Config::from_env();
    if config.plaid_client_id.is_empty() || config.plaid_secret.is_empty() {
        tracing::warn!("aggregation credentials not set; bank-link endpoints will fail");
    }
    if config.hf_api_key.is_empty() {
        tracing::warn!("HF_API_KEY not set; smart-pick advice will use the fallback report");
    }

    let cards = CardStore::open(&config.cards_file)
        .await
        .with_context(|| format!("open card store at {}", config.cards_file.display()))?;
    let plaid = PlaidClient::new(
        PlaidCredentials {
            client_id: config.plaid_client_id.clone(),
            secret: config.plaid_secret.clone(),
        },
        config.plaid_environment,
    );
    let llm = LlmClient::new(config.hf_api_key.clone());

    let router = app(AppState { cards, plaid, llm });

    let listener = tokio::net::TcpListener::bind(("0.0.0.0", config.port))
        .await
        .with_context(|| format!("bind port {}", config.port))?;
    tracing::info!("listening on {}", listener.local_addr()?);

    axum::serve(listener, router).await.context("serve")?;
    Ok(())
}
