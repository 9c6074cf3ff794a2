//! Time helpers shared across the stash crates.

use chrono::{SecondsFormat, Utc};

/// Returns the current instant as an ISO-8601 UTC timestamp.
///
/// Millisecond precision with a `Z` suffix, matching the format already
/// present in persisted stash data.
pub fn iso_timestamp_now() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timestamp_has_iso_shape() {
        let stamp = iso_timestamp_now();
        assert!(stamp.ends_with('Z'), "{stamp}");
        assert_eq!(stamp.len(), "2026-08-07T09:30:00.000Z".len(), "{stamp}");
        assert_eq!(&stamp[4..5], "-");
        assert_eq!(&stamp[10..11], "T");
    }
}
