//! Pure filtering over the stored file collection.

use serde::{Deserialize, Serialize};

use crate::record::StoredFile;

/// Sentinel type value that matches every record.
pub const TYPE_FILTER_ALL: &str = "all";

/// Storage key holding the last-applied filter criteria.
pub const FILTER_PREFS_KEY: &str = "dropstash.filters.v1";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
/// Filter criteria derived from the UI controls.
pub struct FilterCriteria {
    /// MIME-type prefix to match, or [`TYPE_FILTER_ALL`].
    pub type_prefix: String,
    /// Maximum size in kilobytes; `None` means no limit.
    pub max_size_kb: Option<f64>,
}

impl Default for FilterCriteria {
    fn default() -> Self {
        Self {
            type_prefix: TYPE_FILTER_ALL.to_string(),
            max_size_kb: None,
        }
    }
}

impl FilterCriteria {
    /// Builds criteria from raw control values.
    ///
    /// An empty, non-numeric, or non-positive size input maps to no
    /// limit.
    pub fn from_controls(type_value: &str, size_value: &str) -> Self {
        let max_size_kb = size_value
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|kb| kb.is_finite() && *kb > 0.0);
        Self {
            type_prefix: type_value.to_string(),
            max_size_kb,
        }
    }

    /// Returns whether these criteria pass every record.
    pub fn is_unrestricted(&self) -> bool {
        self.type_prefix == TYPE_FILTER_ALL && self.max_size_kb.is_none()
    }

    fn type_matches(&self, record: &StoredFile) -> bool {
        self.type_prefix == TYPE_FILTER_ALL || record.mime_type.starts_with(self.type_prefix.as_str())
    }

    fn size_matches(&self, record: &StoredFile) -> bool {
        match self.max_size_kb {
            Some(limit) => record.size_kb() <= limit,
            None => true,
        }
    }

    /// Returns whether `record` passes both the type and size tests.
    pub fn matches(&self, record: &StoredFile) -> bool {
        self.type_matches(record) && self.size_matches(record)
    }
}

#[derive(Debug, Clone, PartialEq)]
/// A record paired with its position in the unfiltered collection.
///
/// Deletion must always target the storage index, never the position
/// within a filtered view.
pub struct IndexedRecord {
    /// Index of the record in the full collection.
    pub storage_index: usize,
    /// The stored record.
    pub record: StoredFile,
}

/// Applies `criteria` to `records`, preserving order.
///
/// Pure: the input collection is never mutated, and repeated calls with
/// the same criteria return the same result.
pub fn filter_records(records: &[StoredFile], criteria: &FilterCriteria) -> Vec<IndexedRecord> {
    records
        .iter()
        .enumerate()
        .filter(|(_, record)| criteria.matches(record))
        .map(|(storage_index, record)| IndexedRecord {
            storage_index,
            record: record.clone(),
        })
        .collect()
}
