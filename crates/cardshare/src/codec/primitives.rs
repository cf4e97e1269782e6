//! Primitive encoding/decoding steps for set payloads.
//!
//! A set payload is built in three stages:
//! quantities -> one byte per card -> zlib -> base64 (standard alphabet, padded).

use std::io::{self, Write};

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use flate2::write::ZlibEncoder;
use flate2::{Compression, Decompress, FlushDecompress, Status};

use crate::limits::MAX_QUANTITY;

// =============================================================================
// ENCODING
// =============================================================================

/// Clamps a quantity into the one-byte wire range.
#[inline]
pub fn clamp_quantity(quantity: u32) -> u8 {
    quantity.min(MAX_QUANTITY as u32) as u8
}

/// Packs quantities into one byte per card, clamping to [`MAX_QUANTITY`].
pub fn pack_quantities(quantities: impl IntoIterator<Item = u32>) -> Vec<u8> {
    quantities.into_iter().map(clamp_quantity).collect()
}

/// Compresses bytes into a zlib stream at the given level (0-9).
pub fn deflate(bytes: &[u8], level: u32) -> io::Result<Vec<u8>> {
    let mut encoder = ZlibEncoder::new(Vec::with_capacity(bytes.len() / 4 + 16), Compression::new(level));
    encoder.write_all(bytes)?;
    encoder.finish()
}

/// Encodes bytes as standard padded base64.
pub fn to_base64(bytes: &[u8]) -> String {
    STANDARD.encode(bytes)
}

// =============================================================================
// DECODING
// =============================================================================

/// Decodes standard padded base64.
pub fn from_base64(text: &str) -> Result<Vec<u8>, base64::DecodeError> {
    STANDARD.decode(text.trim())
}

/// Outcome of inflating a set payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Inflated {
    /// The full inflated payload.
    Complete(Vec<u8>),
    /// The payload inflates to more than the permitted number of bytes.
    TooLarge,
}

/// Decompresses a zlib stream, producing at most `max_len` bytes of output.
///
/// Output beyond `max_len` is never materialized. A stream that ends before
/// its end marker is an `UnexpectedEof` error.
pub fn inflate(compressed: &[u8], max_len: usize) -> io::Result<Inflated> {
    let mut inflater = Decompress::new(true);
    let mut out = Vec::with_capacity(max_len + 1);

    loop {
        let (total_in, total_out) = (inflater.total_in(), inflater.total_out());
        let status = inflater
            .decompress_vec(&compressed[total_in as usize..], &mut out, FlushDecompress::Finish)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;

        if out.len() > max_len {
            return Ok(Inflated::TooLarge);
        }
        if status == Status::StreamEnd {
            return Ok(Inflated::Complete(out));
        }
        if inflater.total_in() == total_in && inflater.total_out() == total_out {
            return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "truncated zlib stream"));
        }
    }
}

/// Returns the quantity at `index`, treating missing trailing entries as 0.
#[inline]
pub fn quantity_at(bytes: &[u8], index: usize) -> u32 {
    bytes.get(index).copied().map_or(0, u32::from)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp() {
        assert_eq!(clamp_quantity(0), 0);
        assert_eq!(clamp_quantity(63), 63);
        assert_eq!(clamp_quantity(64), 63);
        assert_eq!(clamp_quantity(u32::MAX), 63);
        assert_eq!(pack_quantities([1, 9999, 0]), vec![1, 63, 0]);
    }

    #[test]
    fn test_deflate_inflate() {
        let bytes = vec![0u8, 1, 2, 63, 0, 0, 0, 5];
        let compressed = deflate(&bytes, 9).unwrap();
        // zlib header, best compression
        assert_eq!(compressed[0], 0x78);
        assert_eq!(inflate(&compressed, 64).unwrap(), Inflated::Complete(bytes));
    }

    #[test]
    fn test_inflate_limit() {
        let bytes = vec![0u8; 1000];
        let compressed = deflate(&bytes, 9).unwrap();
        assert_eq!(inflate(&compressed, 999).unwrap(), Inflated::TooLarge);
        assert!(matches!(inflate(&compressed, 1000).unwrap(), Inflated::Complete(b) if b.len() == 1000));
    }

    #[test]
    fn test_inflate_truncated() {
        let compressed = deflate(&[3u8; 40], 9).unwrap();
        for cut in [0, 1, compressed.len() - 4, compressed.len() - 1] {
            let err = inflate(&compressed[..cut], 64).unwrap_err();
            assert_eq!(err.kind(), io::ErrorKind::UnexpectedEof, "cut at {cut}");
        }
    }

    #[test]
    fn test_inflate_garbage() {
        assert!(inflate(b"definitely not zlib", 64).is_err());
    }

    #[test]
    fn test_base64() {
        assert_eq!(to_base64(&[0xFF, 0x00, 0x10]), "/wAQ");
        assert_eq!(from_base64("/wAQ").unwrap(), vec![0xFF, 0x00, 0x10]);
        assert_eq!(from_base64(" /wAQ\n").unwrap(), vec![0xFF, 0x00, 0x10]);
        assert!(from_base64("not*base64").is_err());
    }

    #[test]
    fn test_quantity_at() {
        let bytes = [4u8, 0, 200];
        assert_eq!(quantity_at(&bytes, 0), 4);
        assert_eq!(quantity_at(&bytes, 2), 200);
        assert_eq!(quantity_at(&bytes, 3), 0);
    }
}
