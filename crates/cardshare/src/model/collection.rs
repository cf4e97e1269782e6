//! Sparse per-card quantity maps.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::model::card::set_of;

/// Mapping from card code to owned copies.
///
/// A missing code means zero copies; zero is never stored. Iteration is in
/// ascending code order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "BTreeMap<String, u32>", into = "BTreeMap<String, u32>")]
pub struct Collection {
    entries: BTreeMap<String, u32>,
}

impl Collection {
    /// Creates an empty collection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the quantity owned (0 if absent).
    pub fn get(&self, code: &str) -> u32 {
        self.entries.get(code).copied().unwrap_or(0)
    }

    /// Sets the quantity for a card. Setting 0 removes the entry.
    ///
    /// Returns the previous quantity.
    pub fn set(&mut self, code: impl Into<String>, quantity: u32) -> u32 {
        let code = code.into();
        let previous = if quantity == 0 {
            self.entries.remove(&code)
        } else {
            self.entries.insert(code, quantity)
        };
        previous.unwrap_or(0)
    }

    /// Adds copies to a card, saturating at `u32::MAX`. Returns the new quantity.
    pub fn add(&mut self, code: impl Into<String>, copies: u32) -> u32 {
        let code = code.into();
        let quantity = self.get(&code).saturating_add(copies);
        self.set(code, quantity);
        quantity
    }

    /// Removes a card entirely. Returns the previous quantity.
    pub fn remove(&mut self, code: &str) -> u32 {
        self.entries.remove(code).unwrap_or(0)
    }

    /// Returns true if at least one copy is owned.
    pub fn contains(&self, code: &str) -> bool {
        self.entries.contains_key(code)
    }

    /// Number of distinct cards owned.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if nothing is owned.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates `(code, quantity)` in ascending code order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, u32)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), *v))
    }

    /// Iterates owned card codes in ascending order.
    pub fn codes(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Total number of copies across all cards.
    pub fn total_copies(&self) -> u64 {
        self.entries.values().map(|&q| q as u64).sum()
    }

    /// Returns a copy keeping only cards whose set code is in `sets`.
    ///
    /// Codes without a set part are dropped.
    pub fn filter_sets<S: AsRef<str>>(&self, sets: &[S]) -> Collection {
        self.entries
            .iter()
            .filter(|(code, _)| {
                set_of(code).is_some_and(|set| sets.iter().any(|s| s.as_ref() == set))
            })
            .map(|(code, &quantity)| (code.clone(), quantity))
            .collect()
    }
}

impl FromIterator<(String, u32)> for Collection {
    fn from_iter<I: IntoIterator<Item = (String, u32)>>(iter: I) -> Self {
        let mut collection = Collection::new();
        for (code, quantity) in iter {
            collection.set(code, quantity);
        }
        collection
    }
}

impl<'a> FromIterator<(&'a str, u32)> for Collection {
    fn from_iter<I: IntoIterator<Item = (&'a str, u32)>>(iter: I) -> Self {
        iter.into_iter()
            .map(|(code, quantity)| (code.to_string(), quantity))
            .collect()
    }
}

impl From<BTreeMap<String, u32>> for Collection {
    fn from(map: BTreeMap<String, u32>) -> Self {
        map.into_iter().collect()
    }
}

impl From<Collection> for BTreeMap<String, u32> {
    fn from(collection: Collection) -> Self {
        collection.entries
    }
}
