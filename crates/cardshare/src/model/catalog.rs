//! The card catalog.
//!
//! The catalog is the shared schema behind every encoded collection: a blob
//! only stores one quantity per catalog position, so two parties can exchange
//! collections only if their catalogs list each set's cards in the same order.

use std::collections::BTreeMap;

use rustc_hash::FxHashMap;
use serde::Deserialize;
use sha2::{Digest, Sha256};

use crate::error::CatalogError;
use crate::model::card::{parse_card_code, Card};

/// Immutable set of known cards, grouped by set code and ordered by number.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    /// Set code -> cards sorted by number.
    sets: BTreeMap<String, Vec<Card>>,
    /// Card code -> (set code, set ordinal, position within set).
    index: FxHashMap<String, (String, usize, usize)>,
}

impl Catalog {
    /// Builds a catalog from a flat list of cards.
    ///
    /// Cards are grouped by set and sorted by number. A card whose code
    /// disagrees with its set or number, or two cards sharing a number within
    /// a set, are rejected.
    pub fn new(cards: impl IntoIterator<Item = Card>) -> Result<Self, CatalogError> {
        let mut sets: BTreeMap<String, Vec<Card>> = BTreeMap::new();
        for card in cards {
            sets.entry(card.set_code.clone()).or_default().push(card);
        }
        Self::from_sets(sets)
    }

    /// Builds a catalog from pre-grouped sets. Sets may be empty.
    pub(crate) fn from_sets(mut sets: BTreeMap<String, Vec<Card>>) -> Result<Self, CatalogError> {
        let mut index = FxHashMap::default();

        for (ordinal, (set_code, cards)) in sets.iter_mut().enumerate() {
            for card in cards.iter() {
                check_card(set_code, card)?;
            }
            cards.sort_by_key(|c| c.number);

            for pair in cards.windows(2) {
                if pair[0].number == pair[1].number {
                    return Err(CatalogError::DuplicateNumber {
                        set: set_code.clone(),
                        number: pair[0].number,
                    });
                }
            }

            // Codes embed their set and number, so these keys are unique.
            for (pos, card) in cards.iter().enumerate() {
                index.insert(card.code.clone(), (set_code.clone(), ordinal, pos));
            }
        }

        Ok(Self { sets, index })
    }

    /// Parses the card database JSON format:
    ///
    /// ```text
    /// { "A1": { "cards": [ { "code": "A1/1", "rarity": "◊" }, ... ] }, ... }
    /// ```
    ///
    /// Card numbers come from the code suffix. A missing or null rarity is
    /// stored as the empty label. Extra fields are ignored.
    pub fn from_database_json(json: &str) -> Result<Self, CatalogError> {
        let raw: BTreeMap<String, RawSet> =
            serde_json::from_str(json).map_err(|e| CatalogError::InvalidJson(e.to_string()))?;

        let mut sets = BTreeMap::new();
        for (set_code, raw_set) in raw {
            let mut cards = Vec::with_capacity(raw_set.cards.len());
            for raw_card in raw_set.cards {
                let Some((_, number)) = parse_card_code(&raw_card.code) else {
                    return Err(CatalogError::InvalidCardCode {
                        code: raw_card.code,
                    });
                };
                cards.push(Card {
                    code: raw_card.code,
                    set_code: set_code.clone(),
                    number,
                    rarity: raw_card.rarity.unwrap_or_default(),
                });
            }
            sets.insert(set_code, cards);
        }

        Self::from_sets(sets)
    }

    /// Looks up a card by code.
    pub fn card(&self, code: &str) -> Option<&Card> {
        let (set, _, pos) = self.index.get(code)?;
        self.sets.get(set).and_then(|cards| cards.get(*pos))
    }

    /// Returns `(set ordinal, position within set)` for a card.
    ///
    /// Ordering by this key walks the catalog by ascending set code, then
    /// ascending number, which is the order decode inserts cards in.
    pub fn position(&self, code: &str) -> Option<(usize, usize)> {
        self.index
            .get(code)
            .map(|&(_, ordinal, pos)| (ordinal, pos))
    }

    /// Returns the rarity label of a card, or `None` if the card is unknown.
    pub fn rarity(&self, code: &str) -> Option<&str> {
        self.card(code).map(|c| c.rarity.as_str())
    }

    /// Returns true if the catalog knows this card code.
    pub fn contains_card(&self, code: &str) -> bool {
        self.index.contains_key(code)
    }

    /// Returns the cards of a set in wire order (ascending number).
    pub fn cards_in_set(&self, set_code: &str) -> Option<&[Card]> {
        self.sets.get(set_code).map(Vec::as_slice)
    }

    /// Returns true if the set exists (even with zero cards).
    pub fn contains_set(&self, set_code: &str) -> bool {
        self.sets.contains_key(set_code)
    }

    /// Iterates set codes in ascending order.
    pub fn set_codes(&self) -> impl Iterator<Item = &str> {
        self.sets.keys().map(String::as_str)
    }

    /// Iterates `(set_code, cards)` in ascending set order.
    pub fn sets(&self) -> impl Iterator<Item = (&str, &[Card])> {
        self.sets.iter().map(|(k, v)| (k.as_str(), v.as_slice()))
    }

    /// Iterates all cards by set, then number.
    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.sets.values().flatten()
    }

    /// Total number of cards.
    pub fn len(&self) -> usize {
        self.index.len()
    }

    /// Returns true if the catalog has no cards.
    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    /// Number of sets, including empty ones.
    pub fn set_count(&self) -> usize {
        self.sets.len()
    }

    /// SHA-256 over the ordered card layout, as lowercase hex.
    ///
    /// Two catalogs with the same digest decode each other's blobs identically.
    /// Rarity labels are not part of the layout.
    pub fn layout_digest(&self) -> String {
        let mut hasher = Sha256::new();
        for (set_code, cards) in &self.sets {
            hasher.update(set_code.as_bytes());
            hasher.update([0x00]);
            for card in cards {
                hasher.update(card.code.as_bytes());
                hasher.update([0x00]);
            }
            hasher.update([0x01]);
        }
        let hash = hasher.finalize();

        let mut s = String::with_capacity(64);
        for byte in hash {
            s.push_str(&format!("{:02x}", byte));
        }
        s
    }
}

/// Checks that a card's code agrees with the set it is filed under and its number.
fn check_card(set_code: &str, card: &Card) -> Result<(), CatalogError> {
    let Some((code_set, number)) = parse_card_code(&card.code) else {
        return Err(CatalogError::InvalidCardCode {
            code: card.code.clone(),
        });
    };
    if code_set != set_code || card.set_code != set_code {
        return Err(CatalogError::SetMismatch {
            code: card.code.clone(),
            listed: set_code.to_string(),
            actual: code_set.to_string(),
        });
    }
    if number != card.number {
        return Err(CatalogError::InvalidCardCode {
            code: card.code.clone(),
        });
    }
    Ok(())
}

#[derive(Deserialize)]
struct RawSet {
    #[serde(default)]
    cards: Vec<RawCard>,
}

#[derive(Deserialize)]
struct RawCard {
    code: String,
    #[serde(default)]
    rarity: Option<String>,
}
