use std::env;
use std::path::PathBuf;

use credzen_plaid::Environment;

/// Runtime configuration, read once at startup from the environment.
#[derive(Debug, Clone)]
pub struct Config {
    pub plaid_client_id: String,
    pub plaid_secret: String,
    pub plaid_environment: Environment,
    pub hf_api_key: String,
    pub port: u16,
    pub cards_file: PathBuf,
}

impl Config {
    /// Missing credentials are tolerated here; the endpoints that need them
    /// fail per-request and the rest of the API stays up.
    pub fn from_env() -> Config {
        let plaid_secret = env::var("PLAID_SECRET")
            .or_else(|_| env::var("PLAID_SANDBOX_SECRET"))
            .unwrap_or_default();

        Config {
            plaid_client_id: env::var("PLAID_CLIENT_ID").unwrap_or_default(),
            plaid_secret,
            plaid_environment: Environment::from_name(
                &env::var("PLAID_ENV").unwrap_or_else(|_| "sandbox".to_string()),
            ),
            hf_api_key: env::var("HF_API_KEY").unwrap_or_default(),
            port: env::var("PORT")
                .ok()
                .and_then(|value| value.parse().ok())
                .unwrap_or(8000),
            cards_file: env::var("CREDZEN_CARDS_FILE")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("data/cards.json")),
        }
    }
}
