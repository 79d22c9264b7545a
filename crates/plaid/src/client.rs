use chrono::NaiveDate;
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::normalize::{normalize, NormalizedTransaction};

/// Transactions fetched per page. One page covers the demo date range.
const TRANSACTIONS_PAGE_SIZE: u32 = 500;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    Sandbox,
    Development,
}

impl Environment {
    /// Any name other than "sandbox" selects the development host.
    pub fn from_name(name: &str) -> Environment {
        match name {
            "sandbox" => Environment::Sandbox,
            _ => Environment::Development,
        }
    }

    pub fn base_url(self) -> &'static str {
        match self {
            Environment::Sandbox => "https://sandbox.plaid.com",
            Environment::Development => "https://development.plaid.com",
        }
    }
}

#[derive(Debug, Clone)]
pub struct PlaidCredentials {
    pub client_id: String,
    pub secret: String,
}

#[derive(Debug, Error)]
pub enum PlaidError {
    #[error("plaid request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("plaid returned {status}: {body}")]
    Api { status: StatusCode, body: String },
}

/// REST client for the aggregation API. Credentials ride in every request
/// body, per the provider's auth scheme.
#[derive(Debug, Clone)]
pub struct PlaidClient {
    http: reqwest::Client,
    base_url: String,
    credentials: PlaidCredentials,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PlaidAccount {
    pub account_id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub official_name: Option<String>,
    #[serde(default)]
    pub mask: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PersonalFinanceCategory {
    pub primary: String,
    pub detailed: String,
}

/// A provider transaction, reduced to the fields the feed consumes.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PlaidTransaction {
    pub account_id: String,
    pub date: String,
    pub name: String,
    pub amount: f64,
    #[serde(default)]
    pub personal_finance_category: Option<PersonalFinanceCategory>,
    #[serde(default)]
    pub category: Option<Vec<String>>,
}

#[derive(Serialize)]
struct LinkTokenRequest<'a> {
    client_id: &'a str,
    secret: &'a str,
    client_name: &'a str,
    language: &'a str,
    country_codes: &'a [&'a str],
    user: LinkTokenUser<'a>,
    products: &'a [&'a str],
}

#[derive(Serialize)]
struct LinkTokenUser<'a> {
    client_user_id: &'a str,
}

#[derive(Serialize)]
struct ExchangeRequest<'a> {
    client_id: &'a str,
    secret: &'a str,
    public_token: &'a str,
}

#[derive(Deserialize)]
struct ExchangeResponse {
    access_token: String,
}

#[derive(Serialize)]
struct AccountsRequest<'a> {
    client_id: &'a str,
    secret: &'a str,
    access_token: &'a str,
}

#[derive(Deserialize)]
struct AccountsResponse {
    accounts: Vec<PlaidAccount>,
}

#[derive(Serialize)]
struct TransactionsRequest<'a> {
    client_id: &'a str,
    secret: &'a str,
    access_token: &'a str,
    start_date: NaiveDate,
    end_date: NaiveDate,
    options: TransactionsOptions,
}

#[derive(Serialize)]
struct TransactionsOptions {
    count: u32,
    offset: u32,
}

#[derive(Deserialize)]
struct TransactionsResponse {
    transactions: Vec<PlaidTransaction>,
}

impl PlaidClient {
    pub fn new(credentials: PlaidCredentials, environment: Environment) -> PlaidClient {
        PlaidClient::with_base_url(credentials, environment.base_url())
    }

    /// Points the client at an arbitrary host. Tests use this to talk to a
    /// local mock server.
    pub fn with_base_url(credentials: PlaidCredentials, base_url: impl Into<String>) -> PlaidClient {
        PlaidClient {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
            credentials,
        }
    }

    /// Creates a Link token for the frontend widget. The provider response
    /// is passed through untouched.
    pub async fn create_link_token(&self, user_id: &str) -> Result<serde_json::Value, PlaidError> {
        let body = LinkTokenRequest {
            client_id: &self.credentials.client_id,
            secret: &self.credentials.secret,
            client_name: "CredZen",
            language: "en",
            country_codes: &["US"],
            user: LinkTokenUser {
                client_user_id: user_id,
            },
            products: &["transactions"],
        };

        Ok(self.post("/link/token/create", &body).await?.json().await?)
    }

    /// Swaps the Link widget's public token for a long-lived access token.
    pub async fn exchange_public_token(&self, public_token: &str) -> Result<String, PlaidError> {
        let body = ExchangeRequest {
            client_id: &self.credentials.client_id,
            secret: &self.credentials.secret,
            public_token,
        };

        let exchanged: ExchangeResponse = self
            .post("/item/public_token/exchange", &body)
            .await?
            .json()
            .await?;
        Ok(exchanged.access_token)
    }

    /// Fetches the account list and the transaction window, and flattens
    /// both into the feed the frontend renders.
    pub async fn transactions(
        &self,
        access_token: &str,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> Result<Vec<NormalizedTransaction>, PlaidError> {
        let accounts = self.accounts_get(access_token).await?;
        let raw = self.transactions_get(access_token, start_date, end_date).await?;
        tracing::debug!(
            accounts = accounts.len(),
            transactions = raw.len(),
            "fetched transaction window"
        );
        Ok(normalize(&accounts, raw))
    }

    async fn accounts_get(&self, access_token: &str) -> Result<Vec<PlaidAccount>, PlaidError> {
        let body = AccountsRequest {
            client_id: &self.credentials.client_id,
            secret: &self.credentials.secret,
            access_token,
        };

        let response: AccountsResponse = self.post("/accounts/get", &body).await?.json().await?;
        Ok(response.accounts)
    }

    async fn transactions_get(
        &self,
        access_token: &str,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> Result<Vec<PlaidTransaction>, PlaidError> {
        let body = TransactionsRequest {
            client_id: &self.credentials.client_id,
            secret: &self.credentials.secret,
            access_token,
            start_date,
            end_date,
            options: TransactionsOptions {
                count: TRANSACTIONS_PAGE_SIZE,
                offset: 0,
            },
        };

        let response: TransactionsResponse =
            self.post("/transactions/get", &body).await?.json().await?;
        Ok(response.transactions)
    }

    async fn post<T: Serialize>(
        &self,
        path: &str,
        body: &T,
    ) -> Result<reqwest::Response, PlaidError> {
        let response = self
            .http
            .post(format!("{}{path}", self.base_url))
            .json(body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(PlaidError::Api { status, body });
        }

        Ok(response)
    }
}
