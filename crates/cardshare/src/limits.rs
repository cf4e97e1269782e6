//! Format constants and security limits.
//!
//! Decoding treats blobs as untrusted input (they arrive through clipboards
//! and QR codes). Inflated payloads are capped while decompressing; the set
//! count is a sanity check on already-parsed JSON.

/// Highest per-card quantity the wire format can carry.
///
/// Larger quantities are clamped on encode.
pub const MAX_QUANTITY: u8 = 63;

/// Highest zlib compression level. Shared blobs always use it.
pub const MAX_COMPRESSION_LEVEL: u32 = 9;

/// Maximum inflated size of a single set payload, in bytes (one byte per card).
pub const MAX_SET_BYTES: usize = 64 * 1024;

/// Maximum number of set entries accepted in one blob, checked after parsing.
pub const MAX_BLOB_SETS: usize = 1024;
