//! Builder API for ergonomic Catalog construction.
//!
//! # Example
//!
//! ```rust
//! use cardshare::model::builder::CatalogBuilder;
//!
//! let catalog = CatalogBuilder::new()
//!     .set("A1", |s| s
//!         .card(1, "◊")
//!         .card(2, "◊◊")
//!     )
//!     .set("P-A", |s| s.card(1, ""))
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(catalog.len(), 3);
//! ```

use std::collections::BTreeMap;

use crate::error::CatalogError;
use crate::model::{Card, Catalog};

/// Builder for constructing a Catalog set by set.
#[derive(Debug, Clone, Default)]
pub struct CatalogBuilder {
    sets: BTreeMap<String, Vec<Card>>,
}

impl CatalogBuilder {
    /// Creates an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds cards to a set. The set is registered even if the closure adds
    /// no cards.
    pub fn set<F>(mut self, set_code: impl Into<String>, f: F) -> Self
    where
        F: FnOnce(SetBuilder) -> SetBuilder,
    {
        let set_code = set_code.into();
        let built = f(SetBuilder::new(set_code.clone()));
        self.sets.entry(set_code).or_default().extend(built.cards);
        self
    }

    /// Adds a single card.
    pub fn card(mut self, card: Card) -> Self {
        self.sets.entry(card.set_code.clone()).or_default().push(card);
        self
    }

    /// Validates and builds the catalog.
    pub fn build(self) -> Result<Catalog, CatalogError> {
        Catalog::from_sets(self.sets)
    }
}

/// Builder for the cards of one set.
#[derive(Debug, Clone)]
pub struct SetBuilder {
    set_code: String,
    cards: Vec<Card>,
}

impl SetBuilder {
    fn new(set_code: String) -> Self {
        Self {
            set_code,
            cards: Vec::new(),
        }
    }

    /// Adds a card with the given number and rarity label.
    pub fn card(mut self, number: u32, rarity: impl Into<String>) -> Self {
        self.cards.push(Card::new(self.set_code.clone(), number, rarity));
        self
    }

    /// Adds `count` cards numbered `first..first + count`, all with the same rarity.
    ///
    /// The range stops short at `u32::MAX` instead of wrapping.
    pub fn cards(mut self, first: u32, count: u32, rarity: &str) -> Self {
        for number in first..first.saturating_add(count) {
            self.cards.push(Card::new(self.set_code.clone(), number, rarity));
        }
        self
    }
}
