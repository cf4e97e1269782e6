//! Error types for collection encoding/decoding, catalog construction and validation.

use thiserror::Error;

/// Coarse classification of decode failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    /// E001: Blob text is not valid JSON of the expected shape
    MalformedJson,
    /// E002: Set payload is not valid base64
    MalformedBase64,
    /// E003: Set payload does not inflate
    MalformedCompression,
    /// E004: Decoded data exceeds a security limit
    LimitExceeded,
}

impl ErrorCode {
    /// Returns the error code string (e.g., "E001").
    pub fn code(&self) -> &'static str {
        match self {
            ErrorCode::MalformedJson => "E001",
            ErrorCode::MalformedBase64 => "E002",
            ErrorCode::MalformedCompression => "E003",
            ErrorCode::LimitExceeded => "E004",
        }
    }
}

/// Error while decoding a shared collection blob.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DecodeError {
    #[error("[E001] invalid blob JSON: {0}")]
    InvalidJson(String),

    #[error("[E002] invalid base64 in set {set:?}: {reason}")]
    InvalidBase64 { set: String, reason: String },

    #[error("[E003] decompression failed for set {set:?}: {reason}")]
    DecompressionFailed { set: String, reason: String },

    #[error("[E004] payload of set {set:?} inflates past {max} bytes")]
    SetPayloadTooLarge { set: String, max: usize },

    #[error("[E004] {field} length {len} exceeds maximum {max}")]
    LengthExceedsLimit {
        field: &'static str,
        len: usize,
        max: usize,
    },
}

impl DecodeError {
    /// Returns the error code for this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            DecodeError::InvalidJson(_) => ErrorCode::MalformedJson,
            DecodeError::InvalidBase64 { .. } => ErrorCode::MalformedBase64,
            DecodeError::DecompressionFailed { .. } => ErrorCode::MalformedCompression,
            DecodeError::SetPayloadTooLarge { .. } | DecodeError::LengthExceedsLimit { .. } => {
                ErrorCode::LimitExceeded
            }
        }
    }
}

/// Error while encoding a collection.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EncodeError {
    #[error("compression failed for set {set:?}: {reason}")]
    CompressionFailed { set: String, reason: String },

    #[error("compression level {level} exceeds maximum {max}")]
    InvalidCompressionLevel { level: u32, max: u32 },

    #[error("blob serialization failed: {0}")]
    Json(String),
}

/// Error while building a card catalog.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CatalogError {
    #[error("invalid card code {code:?} (expected <set>/<number>)")]
    InvalidCardCode { code: String },

    #[error("card {code:?} is listed under set {listed:?} but its code names set {actual:?}")]
    SetMismatch {
        code: String,
        listed: String,
        actual: String,
    },

    #[error("set {set:?} has more than one card numbered {number}")]
    DuplicateNumber { set: String, number: u32 },

    #[error("invalid card database JSON: {0}")]
    InvalidJson(String),
}

/// Error during semantic validation of a collection.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("card {code:?} is not in the catalog")]
    UnknownCard { code: String },
}
