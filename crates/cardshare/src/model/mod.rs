//! Data model types.
//!
//! - Cards and card codes
//! - The catalog (shared, read-only schema)
//! - Collections (sparse quantity maps)
//! - Encoded blobs (portable form of a collection)
//! - Builders (ergonomic catalog construction)

pub mod blob;
pub mod builder;
pub mod card;
pub mod catalog;
pub mod collection;

pub use blob::EncodedBlob;
pub use builder::{CatalogBuilder, SetBuilder};
pub use card::{format_card_code, parse_card_code, set_of, Card};
pub use catalog::Catalog;
pub use collection::Collection;
