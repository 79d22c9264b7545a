pub mod client;
pub mod normalize;

pub use client::{
    Environment, PersonalFinanceCategory, PlaidAccount, PlaidClient, PlaidCredentials, PlaidError,
    PlaidTransaction,
};
pub use normalize::{normalize, NormalizedTransaction};
