//! Trade proposals between two collections.

pub mod matcher;

use serde::{Deserialize, Serialize};

pub use matcher::{compare_collections, compare_collections_with_options, TradeOptions};

/// One side of a proposed swap: a card and how many copies its owner holds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TradeOffer {
    pub code: String,
    pub quantity: u32,
}

impl TradeOffer {
    pub fn new(code: impl Into<String>, quantity: u32) -> Self {
        Self {
            code: code.into(),
            quantity,
        }
    }
}

/// A one-for-one swap: A gives `from_a`, B gives `from_b`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TradeProposal {
    pub from_a: TradeOffer,
    pub from_b: TradeOffer,
}
