//! Encoding/decoding of collections into shareable blobs.

pub mod collection;
pub mod primitives;

pub use collection::{
    decode_collection, decode_collection_json, encode_collection, encode_collection_json,
    encode_collection_with_options, EncodeOptions,
};
pub use primitives::{clamp_quantity, pack_quantities};
