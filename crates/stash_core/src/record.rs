//! Persisted stash record model and collection encoding.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
/// One uploaded file persisted as metadata plus a base64 data URL.
///
/// Records are immutable once stored. The serialized field names match
/// the wire format of existing stash data (`name`/`type`/`size`/
/// `dataUrl`/`date`), so collections round-trip byte-compatibly.
pub struct StoredFile {
    /// Original file name; not guaranteed unique.
    pub name: String,
    /// MIME type reported by the browser; empty when undetermined.
    #[serde(rename = "type")]
    pub mime_type: String,
    /// File size in bytes.
    #[serde(rename = "size")]
    pub size_bytes: u64,
    /// Full file contents as a base64 data URI.
    #[serde(rename = "dataUrl")]
    pub data_url: String,
    /// ISO-8601 timestamp of ingestion.
    #[serde(rename = "date")]
    pub stored_at: String,
}

impl StoredFile {
    /// Returns the record size in kilobytes.
    pub fn size_kb(&self) -> f64 {
        self.size_bytes as f64 / 1024.0
    }

    /// Renders the size in kilobytes with one decimal place.
    pub fn size_kb_label(&self) -> String {
        format!("{:.1}", self.size_kb())
    }
}

/// Serializes a collection to its persisted JSON-array form.
///
/// # Errors
///
/// Returns an error when JSON serialization fails.
pub fn encode_collection(records: &[StoredFile]) -> Result<String, String> {
    serde_json::to_string(records).map_err(|e| e.to_string())
}

/// Deserializes a persisted collection, failing open.
///
/// Corrupt or non-list input yields the empty collection; callers never
/// see a parse error.
pub fn decode_collection(raw: &str) -> Vec<StoredFile> {
    serde_json::from_str(raw).unwrap_or_default()
}
