//! Semantic validation of collections against a catalog.
//!
//! Structural checks happen during decode; a decoded collection only ever
//! holds catalog cards. Collections built by hand (UI edits, loaded JSON)
//! can hold arbitrary codes, which encode silently drops.

use crate::error::ValidationError;
use crate::model::{Catalog, Collection};

/// Checks that every card in the collection exists in the catalog.
///
/// Reports the first unknown code in ascending order.
pub fn validate_collection(collection: &Collection, catalog: &Catalog) -> Result<(), ValidationError> {
    match unknown_cards(collection, catalog).next() {
        Some(code) => Err(ValidationError::UnknownCard {
            code: code.to_string(),
        }),
        None => Ok(()),
    }
}

/// Iterates the codes in the collection that the catalog does not know.
pub fn unknown_cards<'a>(
    collection: &'a Collection,
    catalog: &'a Catalog,
) -> impl Iterator<Item = &'a str> + 'a {
    collection.codes().filter(|code| !catalog.contains_card(code))
}

/// Returns a copy of the collection without codes the catalog does not know.
pub fn retain_known(collection: &Collection, catalog: &Catalog) -> Collection {
    collection
        .iter()
        .filter(|(code, _)| catalog.contains_card(code))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::CatalogBuilder;

    fn catalog() -> Catalog {
        CatalogBuilder::new()
            .set("A1", |s| s.cards(1, 3, "◊"))
            .build()
            .unwrap()
    }

    #[test]
    fn test_valid_collection() {
        let collection: Collection = [("A1/1", 2), ("A1/3", 1)].into_iter().collect();
        assert!(validate_collection(&collection, &catalog()).is_ok());
        assert!(validate_collection(&Collection::new(), &catalog()).is_ok());
    }

    #[test]
    fn test_unknown_card() {
        let collection: Collection = [("A1/1", 2), ("A1/9", 1), ("A2/1", 1)].into_iter().collect();
        let catalog = catalog();

        assert_eq!(
            validate_collection(&collection, &catalog),
            Err(ValidationError::UnknownCard {
                code: "A1/9".to_string()
            })
        );
        assert_eq!(unknown_cards(&collection, &catalog).collect::<Vec<_>>(), vec!["A1/9", "A2/1"]);

        let cleaned = retain_known(&collection, &catalog);
        assert_eq!(cleaned.codes().collect::<Vec<_>>(), vec!["A1/1"]);
        assert!(validate_collection(&cleaned, &catalog).is_ok());
    }
}
