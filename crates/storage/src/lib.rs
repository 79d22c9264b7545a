pub mod cards;

pub use cards::{CardStore, StoreError};
