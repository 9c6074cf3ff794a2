//! View-model for the stored-file table, kept apart from the UI so the
//! rendering rules are testable natively.

use stash_core::{filter_records, FilterCriteria, IndexedRecord, StoredFile};

/// Placeholder shown in place of an empty MIME type.
pub const UNKNOWN_TYPE_LABEL: &str = "(unknown)";

/// Placeholder row text for an empty filtered result.
pub const EMPTY_LIST_LABEL: &str = "No files stored.";

#[derive(Debug, Clone, PartialEq)]
/// One rendered table row.
///
/// `storage_index` is the record's position in the full unfiltered
/// collection, which is what the row's delete control targets.
pub struct FileRow {
    /// True storage index used for deletion.
    pub storage_index: usize,
    /// Original file name.
    pub name: String,
    /// MIME type, or [`UNKNOWN_TYPE_LABEL`] when empty.
    pub type_label: String,
    /// Size in kilobytes, one decimal place.
    pub size_kb_label: String,
    /// ISO-8601 ingestion timestamp.
    pub stored_at: String,
}

/// Builds the rows for the current collection and criteria.
pub fn build_rows(records: &[StoredFile], criteria: &FilterCriteria) -> Vec<FileRow> {
    filter_records(records, criteria)
        .into_iter()
        .map(|IndexedRecord { storage_index, record }| FileRow {
            storage_index,
            type_label: type_label(&record.mime_type),
            size_kb_label: record.size_kb_label(),
            name: record.name,
            stored_at: record.stored_at,
        })
        .collect()
}

/// Maps an empty MIME type to the unknown-type placeholder.
pub fn type_label(mime_type: &str) -> String {
    if mime_type.is_empty() {
        UNKNOWN_TYPE_LABEL.to_string()
    } else {
        mime_type.to_string()
    }
}

/// Renders a persisted size limit back into the size control's text.
pub fn size_input_text(max_size_kb: Option<f64>) -> String {
    match max_size_kb {
        Some(kb) if kb.fract() == 0.0 => format!("{}", kb as u64),
        Some(kb) => kb.to_string(),
        None => String::new(),
    }
}

/// Status-bar summary of stored vs currently shown records.
pub fn summary_label(stored: usize, shown: usize) -> String {
    format!("{stored} stored, {shown} shown")
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use stash_core::TYPE_FILTER_ALL;

    use super::*;

    fn stored(name: &str, mime: &str, size: u64) -> StoredFile {
        StoredFile {
            name: name.to_string(),
            mime_type: mime.to_string(),
            size_bytes: size,
            data_url: format!("data:{mime};base64,AAAA"),
            stored_at: "2026-08-07T09:30:00.000Z".to_string(),
        }
    }

    #[test]
    fn photo_row_renders_two_kilobytes() {
        let records = vec![stored("photo.jpg", "image/jpeg", 2048)];

        let rows = build_rows(&records, &FilterCriteria::from_controls("image", "5"));
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].name, "photo.jpg");
        assert_eq!(rows[0].type_label, "image/jpeg");
        assert_eq!(rows[0].size_kb_label, "2.0");

        let rows = build_rows(&records, &FilterCriteria::from_controls("image", "1"));
        assert!(rows.is_empty());
    }

    #[test]
    fn empty_mime_type_gets_the_unknown_placeholder() {
        let records = vec![stored("mystery.bin", "", 256)];

        let all = build_rows(&records, &FilterCriteria::default());
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].type_label, UNKNOWN_TYPE_LABEL);

        let typed = build_rows(&records, &FilterCriteria::from_controls("image", ""));
        assert!(typed.is_empty());
    }

    #[test]
    fn rows_carry_storage_indices_not_display_positions() {
        let records = vec![
            stored("clip.mp4", "video/mp4", 4096),
            stored("photo.jpg", "image/jpeg", 2048),
            stored("poster.png", "image/png", 1024),
        ];

        let rows = build_rows(&records, &FilterCriteria::from_controls("image", ""));
        let indices: Vec<usize> = rows.iter().map(|row| row.storage_index).collect();
        assert_eq!(indices, vec![1, 2]);
    }

    #[test]
    fn size_input_text_round_trips_control_values() {
        for raw in ["", "5", "2.5", "100"] {
            let criteria = FilterCriteria::from_controls(TYPE_FILTER_ALL, raw);
            assert_eq!(size_input_text(criteria.max_size_kb), raw);
        }
    }

    #[test]
    fn summary_label_counts_both_totals() {
        assert_eq!(summary_label(4, 2), "4 stored, 2 shown");
        assert_eq!(summary_label(0, 0), "0 stored, 0 shown");
    }

    #[test]
    fn deleting_through_a_filtered_view_removes_the_right_record() {
        use futures::executor::block_on;
        use stash_core::{FileStore, MemoryFileStore};

        let store = MemoryFileStore::default();
        let store_obj: &dyn FileStore = &store;
        block_on(store_obj.append(&stored("clip.mp4", "video/mp4", 4096))).expect("append");
        block_on(store_obj.append(&stored("photo.jpg", "image/jpeg", 2048))).expect("append");

        // Under the image filter the photo renders at display position 0
        // but storage index 1; deletion must use the storage index.
        let criteria = FilterCriteria::from_controls("image", "");
        let rows = build_rows(&block_on(store_obj.load_all()), &criteria);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].storage_index, 1);

        block_on(store_obj.delete_at(rows[0].storage_index)).expect("delete");
        let remaining = block_on(store_obj.load_all());
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].name, "clip.mp4");
    }
}
