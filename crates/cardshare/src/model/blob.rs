//! The portable encoded form of a collection.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::{DecodeError, EncodeError};
use crate::limits::MAX_BLOB_SETS;

/// Set code -> base64 of the zlib-compressed per-card quantity bytes.
///
/// Serializes as a flat JSON object, e.g. `{"A1":"eNpj...","P-A":"eNpj..."}`.
/// Keys are kept sorted, but decoders must not depend on key order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EncodedBlob {
    sets: BTreeMap<String, String>,
}

impl EncodedBlob {
    /// Creates an empty blob.
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores the payload for a set, replacing any previous one.
    pub fn insert(&mut self, set_code: impl Into<String>, payload: impl Into<String>) {
        self.sets.insert(set_code.into(), payload.into());
    }

    /// Returns the payload for a set.
    pub fn get(&self, set_code: &str) -> Option<&str> {
        self.sets.get(set_code).map(String::as_str)
    }

    /// Iterates `(set_code, payload)` in ascending set order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.sets.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Number of set entries.
    pub fn len(&self) -> usize {
        self.sets.len()
    }

    /// Returns true if the blob has no set entries.
    pub fn is_empty(&self) -> bool {
        self.sets.is_empty()
    }

    /// Serializes to compact JSON text (clipboard / QR payload).
    pub fn to_json(&self) -> Result<String, EncodeError> {
        serde_json::to_string(self).map_err(|e| EncodeError::Json(e.to_string()))
    }

    /// Parses JSON text produced by [`EncodedBlob::to_json`].
    ///
    /// Surrounding whitespace is accepted, as pasted text often carries it.
    /// Blobs with more than [`MAX_BLOB_SETS`] entries are rejected once parsed.
    pub fn from_json(json: &str) -> Result<Self, DecodeError> {
        let blob: EncodedBlob = serde_json::from_str(json.trim())
            .map_err(|e| DecodeError::InvalidJson(e.to_string()))?;
        if blob.len() > MAX_BLOB_SETS {
            return Err(DecodeError::LengthExceedsLimit {
                field: "blob sets",
                len: blob.len(),
                max: MAX_BLOB_SETS,
            });
        }
        Ok(blob)
    }
}

impl FromIterator<(String, String)> for EncodedBlob {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self {
            sets: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_shape() {
        let mut blob = EncodedBlob::new();
        blob.insert("P-A", "eJwDAAAAAAE=");
        blob.insert("A1", "eJxjAAAAAQAB");
        assert_eq!(
            blob.to_json().unwrap(),
            r#"{"A1":"eJxjAAAAAQAB","P-A":"eJwDAAAAAAE="}"#
        );
    }

    #[test]
    fn test_from_json() {
        let blob = EncodedBlob::from_json("  {\"A1\":\"abc=\"}\n").unwrap();
        assert_eq!(blob.get("A1"), Some("abc="));
        assert_eq!(blob.len(), 1);
    }

    #[test]
    fn test_from_json_rejects_wrong_shape() {
        for bad in ["", "not json", "[]", r#"{"A1": 5}"#] {
            let err = EncodedBlob::from_json(bad).unwrap_err();
            assert!(matches!(err, DecodeError::InvalidJson(_)), "{bad}");
        }
    }

    #[test]
    fn test_from_json_set_limit() {
        let entries: Vec<String> = (0..=MAX_BLOB_SETS)
            .map(|i| format!("\"S{}\":\"\"", i))
            .collect();
        let json = format!("{{{}}}", entries.join(","));
        assert!(matches!(
            EncodedBlob::from_json(&json),
            Err(DecodeError::LengthExceedsLimit { .. })
        ));
    }
}
