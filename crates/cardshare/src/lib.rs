//! cardshare: compact shareable card-collection codes and trade matching.
//!
//! A collection tracker holds a sparse map of card code to owned copies. This
//! crate turns that map into a short text blob for sharing (clipboard, QR
//! code, file), restores it on the other side, and proposes one-for-one
//! trades between two collections.
//!
//! # Quick Start
//!
//! ```rust
//! use cardshare::{CatalogBuilder, Collection};
//! use cardshare::codec::{decode_collection, encode_collection};
//! use cardshare::trade::compare_collections;
//!
//! let catalog = CatalogBuilder::new()
//!     .set("A1", |s| s.card(1, "◊").card(2, "◊"))
//!     .build()
//!     .unwrap();
//!
//! let mut mine = Collection::new();
//! mine.set("A1/1", 2);
//!
//! // Share
//! let blob = encode_collection(&mine, &catalog).unwrap();
//! let json = blob.to_json().unwrap();
//!
//! // Restore
//! let restored = decode_collection(&cardshare::EncodedBlob::from_json(&json).unwrap(), &catalog).unwrap();
//! assert_eq!(restored, mine);
//!
//! // Trade
//! let mut theirs = Collection::new();
//! theirs.set("A1/2", 3);
//! let proposals = compare_collections(&mine, &theirs, &catalog);
//! assert_eq!(proposals.len(), 1);
//! ```
//!
//! # Modules
//!
//! - [`model`]: Cards, catalog, collections, encoded blobs
//! - [`codec`]: Blob encoding/decoding
//! - [`trade`]: Trade matching
//! - [`validate`]: Collection checks against the catalog
//! - [`error`]: Error types
//! - [`limits`]: Format constants and decode limits
//!
//! # Wire Format
//!
//! A blob is a JSON object mapping set code to a payload. The payload is the
//! set's quantities, one byte per card in ascending card-number order, clamped
//! to 63, zlib-compressed at level 9 and base64-encoded. Payloads carry no
//! card codes: encoder and decoder must share the catalog's per-set ordering.
//!
//! # Security
//!
//! Blobs are untrusted input. Inflation stops at a fixed payload size, so a
//! small blob cannot expand into a large allocation. The number of set entries
//! is checked after the JSON is parsed; the text itself bounds that
//! allocation. Malformed payloads are reported as [`DecodeError`]s (see
//! [`limits`]).

pub mod codec;
pub mod error;
pub mod limits;
pub mod model;
pub mod trade;
pub mod validate;

// Re-export commonly used types at crate root
pub use codec::{decode_collection, encode_collection, EncodeOptions};
pub use error::{CatalogError, DecodeError, EncodeError, ValidationError};
pub use model::{
    format_card_code, parse_card_code, Card, Catalog, CatalogBuilder, Collection, EncodedBlob,
};
pub use trade::{compare_collections, TradeOffer, TradeOptions, TradeProposal};
pub use validate::validate_collection;

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
