//! Collection encoding/decoding.
//!
//! Each catalog set becomes one blob entry holding one quantity byte per card,
//! in ascending card-number order, zlib-compressed and base64-encoded. The
//! payload carries no card codes, so it only decodes correctly against a
//! catalog with the same per-set ordering (see [`Catalog::layout_digest`]).

use log::{debug, trace};

use crate::codec::primitives::{
    deflate, from_base64, inflate, pack_quantities, quantity_at, to_base64, Inflated,
};
use crate::error::{DecodeError, EncodeError};
use crate::limits::{MAX_COMPRESSION_LEVEL, MAX_SET_BYTES};
use crate::model::{Catalog, Collection, EncodedBlob};

// =============================================================================
// DECODING
// =============================================================================

/// Decodes a blob into a fresh collection.
///
/// - Sets unknown to the catalog are skipped.
/// - Payloads shorter than the set's card count are padded with zeros, which
///   keeps blobs from an older catalog readable after cards are appended.
/// - Bytes past the set's card count are ignored.
/// - Zero quantities are never inserted.
///
/// Fails if any payload of a known set is not valid base64 or zlib.
pub fn decode_collection(blob: &EncodedBlob, catalog: &Catalog) -> Result<Collection, DecodeError> {
    let mut collection = Collection::new();

    for (set_code, payload) in blob.iter() {
        let Some(cards) = catalog.cards_in_set(set_code) else {
            debug!("skipping unknown set {set_code:?}");
            continue;
        };

        let bytes = decode_set_payload(set_code, payload)?;
        if bytes.len() < cards.len() {
            debug!(
                "set {set_code:?}: payload has {} of {} cards, padding with zeros",
                bytes.len(),
                cards.len()
            );
        }

        for (i, card) in cards.iter().enumerate() {
            let quantity = quantity_at(&bytes, i);
            if quantity > 0 {
                collection.set(card.code.clone(), quantity);
            }
        }
    }

    Ok(collection)
}

/// Decodes blob JSON text into a collection.
pub fn decode_collection_json(json: &str, catalog: &Catalog) -> Result<Collection, DecodeError> {
    let blob = EncodedBlob::from_json(json)?;
    decode_collection(&blob, catalog)
}

/// Turns one set payload back into its quantity bytes.
fn decode_set_payload(set_code: &str, payload: &str) -> Result<Vec<u8>, DecodeError> {
    let compressed = from_base64(payload).map_err(|e| DecodeError::InvalidBase64 {
        set: set_code.to_string(),
        reason: e.to_string(),
    })?;

    match inflate(&compressed, MAX_SET_BYTES) {
        Ok(Inflated::Complete(bytes)) => Ok(bytes),
        Ok(Inflated::TooLarge) => Err(DecodeError::SetPayloadTooLarge {
            set: set_code.to_string(),
            max: MAX_SET_BYTES,
        }),
        Err(e) => Err(DecodeError::DecompressionFailed {
            set: set_code.to_string(),
            reason: e.to_string(),
        }),
    }
}

// =============================================================================
// ENCODING
// =============================================================================

/// Options for encoding collections.
#[derive(Debug, Clone, Copy)]
pub struct EncodeOptions {
    /// zlib level, 0-9. Shared blobs use the maximum.
    pub compression_level: u32,
}

impl Default for EncodeOptions {
    fn default() -> Self {
        Self {
            compression_level: MAX_COMPRESSION_LEVEL,
        }
    }
}

impl EncodeOptions {
    /// Creates default (maximum compression) options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the compression level.
    pub fn compression_level(mut self, level: u32) -> Self {
        self.compression_level = level;
        self
    }
}

/// Encodes a collection against the catalog at maximum compression.
///
/// Every non-empty catalog set gets an entry, even if nothing in it is
/// owned. Quantities above 63 are clamped to 63. Codes the catalog does not
/// know are not representable and are left out. Output is deterministic.
pub fn encode_collection(collection: &Collection, catalog: &Catalog) -> Result<EncodedBlob, EncodeError> {
    encode_collection_with_options(collection, catalog, EncodeOptions::default())
}

/// Encodes a collection with explicit options.
pub fn encode_collection_with_options(
    collection: &Collection,
    catalog: &Catalog,
    options: EncodeOptions,
) -> Result<EncodedBlob, EncodeError> {
    if options.compression_level > MAX_COMPRESSION_LEVEL {
        return Err(EncodeError::InvalidCompressionLevel {
            level: options.compression_level,
            max: MAX_COMPRESSION_LEVEL,
        });
    }

    let mut blob = EncodedBlob::new();

    for (set_code, cards) in catalog.sets() {
        if cards.is_empty() {
            continue;
        }

        let bytes = pack_quantities(cards.iter().map(|card| collection.get(&card.code)));
        let compressed = deflate(&bytes, options.compression_level).map_err(|e| {
            EncodeError::CompressionFailed {
                set: set_code.to_string(),
                reason: e.to_string(),
            }
        })?;
        let payload = to_base64(&compressed);

        trace!(
            "set {set_code:?}: {} cards -> {} compressed bytes",
            bytes.len(),
            compressed.len()
        );
        blob.insert(set_code, payload);
    }

    Ok(blob)
}

/// Encodes a collection straight to blob JSON text.
pub fn encode_collection_json(collection: &Collection, catalog: &Catalog) -> Result<String, EncodeError> {
    encode_collection(collection, catalog)?.to_json()
}
