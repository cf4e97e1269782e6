//! Cards and card codes.
//!
//! A card code is `<set>/<number>`, e.g. `A1/12`. The number is the card's
//! position within its set and defines the order used on the wire.

use serde::{Deserialize, Serialize};

/// A single catalog entry.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    /// Unique code across the whole catalog (`<set>/<number>`).
    pub code: String,
    /// Set (expansion) code, e.g. `A1`.
    pub set_code: String,
    /// Ordinal position within the set.
    pub number: u32,
    /// Rarity label. Empty means "no rarity", which is its own class.
    pub rarity: String,
}

impl Card {
    /// Creates a card, deriving its code from set and number.
    pub fn new(set_code: impl Into<String>, number: u32, rarity: impl Into<String>) -> Self {
        let set_code = set_code.into();
        Self {
            code: format_card_code(&set_code, number),
            set_code,
            number,
            rarity: rarity.into(),
        }
    }
}

/// Formats a card code from its set code and number.
pub fn format_card_code(set_code: &str, number: u32) -> String {
    format!("{}/{}", set_code, number)
}

/// Parses a card code into `(set_code, number)`.
///
/// Set codes may contain dashes (`P-A/5`); the number is everything after the
/// last slash and must be a plain decimal.
pub fn parse_card_code(code: &str) -> Option<(&str, u32)> {
    let (set, number) = code.rsplit_once('/')?;
    if set.is_empty() || number.is_empty() || !number.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    Some((set, number.parse().ok()?))
}

/// Returns the set code part of a card code, if it has one.
pub fn set_of(code: &str) -> Option<&str> {
    parse_card_code(code).map(|(set, _)| set)
}
