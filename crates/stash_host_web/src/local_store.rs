//! `localStorage`-backed file store and filter-preference persistence.
//!
//! The whole collection lives as one JSON array under a single fixed
//! key. Reads fail open; writes surface `Result<_, String>` errors that
//! callers may log and otherwise ignore.

use stash_core::{
    decode_collection, encode_collection, FileStore, FileStoreFuture, FilterCriteria, StoredFile,
    FILES_KEY, FILTER_PREFS_KEY,
};

#[cfg(target_arch = "wasm32")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

fn read_key(key: &str) -> Option<String> {
    #[cfg(target_arch = "wasm32")]
    {
        local_storage()?.get_item(key).ok().flatten()
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = key;
        None
    }
}

fn write_key(key: &str, raw: &str) -> Result<(), String> {
    #[cfg(target_arch = "wasm32")]
    {
        let storage = local_storage().ok_or_else(|| "localStorage unavailable".to_string())?;
        storage
            .set_item(key, raw)
            .map_err(|e| format!("localStorage set_item failed: {e:?}"))
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = (key, raw);
        Ok(())
    }
}

fn remove_key(key: &str) -> Result<(), String> {
    #[cfg(target_arch = "wasm32")]
    {
        let storage = local_storage().ok_or_else(|| "localStorage unavailable".to_string())?;
        storage
            .remove_item(key)
            .map_err(|e| format!("localStorage remove_item failed: {e:?}"))
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = key;
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, Default)]
/// Browser file store backed by `window.localStorage`.
///
/// The store is synchronous at the browser API boundary while
/// implementing the async [`FileStore`] contract, the same shape the
/// rest of the host layer uses.
pub struct WebFileStore;

impl WebFileStore {
    fn load_sync(self) -> Vec<StoredFile> {
        read_key(FILES_KEY)
            .map(|raw| decode_collection(&raw))
            .unwrap_or_default()
    }

    fn save_sync(self, records: &[StoredFile]) -> Result<(), String> {
        let raw = encode_collection(records)?;
        write_key(FILES_KEY, &raw)
    }
}

impl FileStore for WebFileStore {
    fn load_all(&self) -> FileStoreFuture<'_, Vec<StoredFile>> {
        let store = *self;
        Box::pin(async move { store.load_sync() })
    }

    fn append<'a>(&'a self, record: &'a StoredFile) -> FileStoreFuture<'a, Result<(), String>> {
        let store = *self;
        Box::pin(async move {
            let mut records = store.load_sync();
            records.push(record.clone());
            store.save_sync(&records)
        })
    }

    fn delete_at(&self, index: usize) -> FileStoreFuture<'_, Result<(), String>> {
        let store = *self;
        Box::pin(async move {
            let mut records = store.load_sync();
            if index < records.len() {
                records.remove(index);
                store.save_sync(&records)?;
            }
            Ok(())
        })
    }

    fn clear(&self) -> FileStoreFuture<'_, Result<(), String>> {
        Box::pin(async move { remove_key(FILES_KEY) })
    }
}

/// Loads the last-applied filter criteria, if any were persisted.
///
/// Absent or corrupt preference data yields `None`.
pub fn load_filter_prefs() -> Option<FilterCriteria> {
    let raw = read_key(FILTER_PREFS_KEY)?;
    serde_json::from_str(&raw).ok()
}

/// Persists the filter criteria for the next session.
///
/// # Errors
///
/// Returns an error when serialization or the localStorage write fails.
pub fn save_filter_prefs(criteria: &FilterCriteria) -> Result<(), String> {
    let raw = serde_json::to_string(criteria).map_err(|e| e.to_string())?;
    write_key(FILTER_PREFS_KEY, &raw)
}
