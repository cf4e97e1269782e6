//! One-for-one trade matching between two collections.

use std::collections::BTreeSet;

use log::debug;
use rustc_hash::FxHashSet;

use crate::model::{Catalog, Collection};
use crate::trade::{TradeOffer, TradeProposal};

/// Options for trade matching.
#[derive(Debug, Clone, Copy, Default)]
pub struct TradeOptions {
    /// Offer each of B's spare cards in at most one proposal.
    ///
    /// Off by default: the same spare may then back several proposals, and the
    /// caller is expected to pick among them.
    pub exclusive: bool,
}

impl TradeOptions {
    /// Creates default (non-exclusive) options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates exclusive options.
    pub fn exclusive() -> Self {
        Self { exclusive: true }
    }
}

/// Proposes swaps of one card from `a` for one card from `b`.
///
/// Card `x` from A is swapped for card `y` from B when A has a spare of `x`
/// (more than one copy) that B lacks, B has a spare of `y` that A lacks, and
/// both share a rarity label. The empty label is a class of its own.
///
/// Candidates `x` are visited in catalog order (set code, then card number)
/// over both collections; each gets at most one proposal, paired with the
/// first matching `y` in B, also in catalog order. This is the order decode
/// produces, so `A1/2` comes before `A1/10`. Codes the catalog does not know
/// come last, by code.
pub fn compare_collections(a: &Collection, b: &Collection, catalog: &Catalog) -> Vec<TradeProposal> {
    compare_collections_with_options(a, b, catalog, TradeOptions::default())
}

/// Proposes swaps with explicit options.
pub fn compare_collections_with_options(
    a: &Collection,
    b: &Collection,
    catalog: &Catalog,
    options: TradeOptions,
) -> Vec<TradeProposal> {
    let candidates: BTreeSet<&str> = a.codes().chain(b.codes()).collect();
    let candidates = catalog_order(candidates, catalog);
    let offers = catalog_order(b.codes().filter(|&y| b.get(y) > 1), catalog);
    let mut reserved: FxHashSet<&str> = FxHashSet::default();
    let mut proposals = Vec::new();

    for x in candidates {
        let a_qty = a.get(x);
        if a_qty <= 1 || b.contains(x) {
            continue;
        }
        let rarity = catalog.rarity(x);

        let matched = offers.iter().copied().find(|&y| {
            !a.contains(y)
                && catalog.rarity(y) == rarity
                && !(options.exclusive && reserved.contains(y))
        });

        if let Some(y) = matched {
            let b_qty = b.get(y);
            if options.exclusive {
                reserved.insert(y);
            }
            proposals.push(TradeProposal {
                from_a: TradeOffer::new(x, a_qty),
                from_b: TradeOffer::new(y, b_qty),
            });
        }
    }

    debug!(
        "{} trade proposals ({} vs {} distinct cards)",
        proposals.len(),
        a.len(),
        b.len()
    );
    proposals
}

/// Sorts codes by catalog position; unknown codes go last, ordered by code.
fn catalog_order<'a>(codes: impl IntoIterator<Item = &'a str>, catalog: &Catalog) -> Vec<&'a str> {
    let mut codes: Vec<&str> = codes.into_iter().collect();
    codes.sort_by_cached_key(|&code| {
        let position = catalog.position(code).unwrap_or((usize::MAX, usize::MAX));
        (position, code)
    });
    codes
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;
    use crate::model::CatalogBuilder;

    fn pair_catalog(rarity_2: &str) -> Catalog {
        CatalogBuilder::new()
            .set("A1", |s| s.card(1, "◊").card(2, rarity_2))
            .build()
            .unwrap()
    }

    fn coll(entries: &[(&str, u32)]) -> Collection {
        entries.iter().copied().collect()
    }

    #[test]
    fn test_symmetric_swap() {
        let catalog = pair_catalog("◊");
        let a = coll(&[("A1/1", 2)]);
        let b = coll(&[("A1/2", 2)]);

        let proposals = compare_collections(&a, &b, &catalog);

        assert_eq!(
            proposals,
            vec![TradeProposal {
                from_a: TradeOffer::new("A1/1", 2),
                from_b: TradeOffer::new("A1/2", 2),
            }]
        );
    }

    #[test]
    fn test_rarity_mismatch_blocks() {
        let catalog = pair_catalog("☆");
        let a = coll(&[("A1/1", 2)]);
        let b = coll(&[("A1/2", 2)]);

        assert!(compare_collections(&a, &b, &catalog).is_empty());
    }

    #[test]
    fn test_single_copy_is_not_spare() {
        let catalog = pair_catalog("◊");
        let b = coll(&[("A1/2", 2)]);
        assert!(compare_collections(&coll(&[("A1/1", 1)]), &b, &catalog).is_empty());

        let a = coll(&[("A1/1", 2)]);
        assert!(compare_collections(&a, &coll(&[("A1/2", 1)]), &catalog).is_empty());
    }

    #[test]
    fn test_ownership_blocks() {
        let catalog = pair_catalog("◊");

        // B already owns x.
        let a = coll(&[("A1/1", 3)]);
        let b = coll(&[("A1/1", 1), ("A1/2", 2)]);
        assert!(compare_collections(&a, &b, &catalog).is_empty());

        // A already owns y.
        let a = coll(&[("A1/1", 3), ("A1/2", 1)]);
        let b = coll(&[("A1/2", 2)]);
        assert!(compare_collections(&a, &b, &catalog).is_empty());
    }

    #[test]
    fn test_empty_rarity_is_own_class() {
        let catalog = CatalogBuilder::new()
            .set("P-A", |s| s.card(1, "").card(2, "").card(3, "◊"))
            .build()
            .unwrap();
        let a = coll(&[("P-A/1", 2)]);

        let b = coll(&[("P-A/3", 4)]);
        assert!(compare_collections(&a, &b, &catalog).is_empty());

        let b = coll(&[("P-A/2", 4), ("P-A/3", 4)]);
        let proposals = compare_collections(&a, &b, &catalog);
        assert_eq!(proposals.len(), 1);
        assert_eq!(proposals[0].from_b.code, "P-A/2");
    }

    #[test]
    fn test_first_match_and_reuse() {
        let catalog = CatalogBuilder::new()
            .set("A1", |s| s.cards(1, 6, "◊"))
            .build()
            .unwrap();
        let a = coll(&[("A1/1", 2), ("A1/2", 5)]);
        let b = coll(&[("A1/4", 3), ("A1/3", 2)]);

        let proposals = compare_collections(&a, &b, &catalog);

        assert_eq!(proposals.len(), 2);
        assert_eq!(proposals[0].from_a, TradeOffer::new("A1/1", 2));
        assert_eq!(proposals[0].from_b, TradeOffer::new("A1/3", 2));
        assert_eq!(proposals[1].from_a, TradeOffer::new("A1/2", 5));
        assert_eq!(proposals[1].from_b, TradeOffer::new("A1/3", 2));
    }

    #[test]
    fn test_first_match_follows_card_number() {
        let catalog = CatalogBuilder::new()
            .set("A1", |s| s.cards(1, 12, "◊"))
            .build()
            .unwrap();
        let a = coll(&[("A1/11", 3), ("A1/1", 2)]);
        let b = coll(&[("A1/10", 2), ("A1/2", 2)]);

        let proposals = compare_collections(&a, &b, &catalog);

        let pairs: Vec<(&str, &str)> = proposals
            .iter()
            .map(|p| (p.from_a.code.as_str(), p.from_b.code.as_str()))
            .collect();
        assert_eq!(pairs, vec![("A1/1", "A1/2"), ("A1/11", "A1/2")]);
    }

    #[test]
    fn test_unknown_codes_come_last() {
        let catalog = CatalogBuilder::new()
            .set("B2", |s| s.card(1, "◊").card(2, "◊"))
            .build()
            .unwrap();
        // Unknown codes have no rarity, so they only match each other.
        let a = coll(&[("Z9/1", 2), ("B2/1", 2)]);
        let b = coll(&[("Y0/1", 2), ("B2/2", 2), ("X0/1", 2)]);

        let proposals = compare_collections(&a, &b, &catalog);

        let pairs: Vec<(&str, &str)> = proposals
            .iter()
            .map(|p| (p.from_a.code.as_str(), p.from_b.code.as_str()))
            .collect();
        assert_eq!(pairs, vec![("B2/1", "B2/2"), ("Z9/1", "X0/1")]);
    }

    #[test]
    fn test_exclusive_reserves_spares() {
        let catalog = CatalogBuilder::new()
            .set("A1", |s| s.cards(1, 6, "◊"))
            .build()
            .unwrap();
        let a = coll(&[("A1/1", 2), ("A1/2", 5), ("A1/5", 2)]);
        let b = coll(&[("A1/4", 3), ("A1/3", 2)]);

        let proposals = compare_collections_with_options(&a, &b, &catalog, TradeOptions::exclusive());

        let pairs: Vec<(&str, &str)> = proposals
            .iter()
            .map(|p| (p.from_a.code.as_str(), p.from_b.code.as_str()))
            .collect();
        assert_eq!(pairs, vec![("A1/1", "A1/3"), ("A1/2", "A1/4")]);
    }

    #[test]
    fn test_empty_inputs() {
        let catalog = pair_catalog("◊");
        let empty = Collection::new();
        assert!(compare_collections(&empty, &empty, &catalog).is_empty());
        assert!(compare_collections(&coll(&[("A1/1", 9)]), &empty, &catalog).is_empty());
    }

    #[test]
    fn test_inputs_untouched() {
        let catalog = pair_catalog("◊");
        let a = coll(&[("A1/1", 2)]);
        let b = coll(&[("A1/2", 2)]);
        let (a_before, b_before) = (a.clone(), b.clone());

        let _ = compare_collections(&a, &b, &catalog);

        assert_eq!(a, a_before);
        assert_eq!(b, b_before);
    }

    fn rarity_catalog() -> Catalog {
        CatalogBuilder::new()
            .set("A1", |s| s.cards(0, 4, "◊").cards(4, 4, "◊◊").cards(8, 4, ""))
            .build()
            .unwrap()
    }

    proptest! {
        #[test]
        fn prop_proposals_follow_rules(
            qa in proptest::collection::vec(0u32..4, 12),
            qb in proptest::collection::vec(0u32..4, 12),
            exclusive in any::<bool>(),
        ) {
            let catalog = rarity_catalog();
            let codes: Vec<String> = catalog.iter().map(|c| c.code.clone()).collect();
            let a: Collection = codes.iter().cloned().zip(qa).collect();
            let b: Collection = codes.iter().cloned().zip(qb).collect();

            let proposals = compare_collections_with_options(&a, &b, &catalog, TradeOptions { exclusive });

            let mut seen_a = BTreeSet::new();
            let mut seen_b = BTreeSet::new();
            for p in &proposals {
                let (x, y) = (p.from_a.code.as_str(), p.from_b.code.as_str());
                prop_assert!(a.get(x) > 1 && b.get(x) == 0);
                prop_assert!(b.get(y) > 1 && a.get(y) == 0);
                prop_assert_eq!(catalog.rarity(x), catalog.rarity(y));
                prop_assert_eq!(p.from_a.quantity, a.get(x));
                prop_assert_eq!(p.from_b.quantity, b.get(y));
                prop_assert!(seen_a.insert(x));
                if exclusive {
                    prop_assert!(seen_b.insert(y));
                }
            }
        }
    }
}
