//! File-collection storage contracts and baseline adapters.

use std::{cell::RefCell, future::Future, pin::Pin, rc::Rc};

use crate::record::StoredFile;

/// Fixed storage key holding the serialized file collection.
pub const FILES_KEY: &str = "dropstash.files.v1";

/// Object-safe boxed future used by [`FileStore`] async methods.
pub type FileStoreFuture<'a, T> = Pin<Box<dyn Future<Output = T> + 'a>>;

/// Storage service owning the persisted file collection.
///
/// All collection mutation funnels through this trait; no other
/// component touches the persisted value directly. The store is passive
/// and never triggers rendering.
pub trait FileStore {
    /// Loads the full collection in insertion order.
    ///
    /// Fails open: an absent key or unparseable value yields the empty
    /// collection rather than an error.
    fn load_all(&self) -> FileStoreFuture<'_, Vec<StoredFile>>;

    /// Appends one record at the end of the collection.
    fn append<'a>(&'a self, record: &'a StoredFile) -> FileStoreFuture<'a, Result<(), String>>;

    /// Removes the record at `index` in the unfiltered collection.
    ///
    /// An out-of-range index is an `Ok` no-op.
    fn delete_at(&self, index: usize) -> FileStoreFuture<'_, Result<(), String>>;

    /// Removes the persisted collection entirely.
    fn clear(&self) -> FileStoreFuture<'_, Result<(), String>>;
}

#[derive(Debug, Clone, Copy, Default)]
/// No-op store for unsupported targets and baseline tests.
pub struct NoopFileStore;

impl FileStore for NoopFileStore {
    fn load_all(&self) -> FileStoreFuture<'_, Vec<StoredFile>> {
        Box::pin(async { Vec::new() })
    }

    fn append<'a>(&'a self, _record: &'a StoredFile) -> FileStoreFuture<'a, Result<(), String>> {
        Box::pin(async { Ok(()) })
    }

    fn delete_at(&self, _index: usize) -> FileStoreFuture<'_, Result<(), String>> {
        Box::pin(async { Ok(()) })
    }

    fn clear(&self) -> FileStoreFuture<'_, Result<(), String>> {
        Box::pin(async { Ok(()) })
    }
}

#[derive(Debug, Clone, Default)]
/// In-memory store used by tests and non-browser runs.
pub struct MemoryFileStore {
    inner: Rc<RefCell<Vec<StoredFile>>>,
}

impl FileStore for MemoryFileStore {
    fn load_all(&self) -> FileStoreFuture<'_, Vec<StoredFile>> {
        Box::pin(async move { self.inner.borrow().clone() })
    }

    fn append<'a>(&'a self, record: &'a StoredFile) -> FileStoreFuture<'a, Result<(), String>> {
        Box::pin(async move {
            self.inner.borrow_mut().push(record.clone());
            Ok(())
        })
    }

    fn delete_at(&self, index: usize) -> FileStoreFuture<'_, Result<(), String>> {
        Box::pin(async move {
            let mut records = self.inner.borrow_mut();
            if index < records.len() {
                records.remove(index);
            }
            Ok(())
        })
    }

    fn clear(&self) -> FileStoreFuture<'_, Result<(), String>> {
        Box::pin(async move {
            self.inner.borrow_mut().clear();
            Ok(())
        })
    }
}

#[cfg(test)]
mod tests {
    use futures::executor::block_on;

    use super::*;

    fn sample(name: &str) -> StoredFile {
        StoredFile {
            name: name.to_string(),
            mime_type: "text/plain".to_string(),
            size_bytes: 10,
            data_url: "data:text/plain;base64,AAAA".to_string(),
            stored_at: "2026-08-07T09:30:00.000Z".to_string(),
        }
    }

    #[test]
    fn memory_store_appends_in_upload_order() {
        let store = MemoryFileStore::default();
        let store_obj: &dyn FileStore = &store;

        block_on(store_obj.append(&sample("first.txt"))).expect("append");
        block_on(store_obj.append(&sample("second.txt"))).expect("append");

        let names: Vec<String> = block_on(store_obj.load_all())
            .into_iter()
            .map(|r| r.name)
            .collect();
        assert_eq!(names, vec!["first.txt", "second.txt"]);
    }

    #[test]
    fn interleaved_appends_both_land() {
        // Completion order of concurrent reads is unordered; whatever
        // order the appends run in, neither update may be lost.
        let store = MemoryFileStore::default();
        let store_obj: &dyn FileStore = &store;

        let slow_sample = sample("slow.bin");
        let fast_sample = sample("fast.bin");
        let slow = store_obj.append(&slow_sample);
        let fast = store_obj.append(&fast_sample);
        block_on(fast).expect("append fast");
        block_on(slow).expect("append slow");

        assert_eq!(block_on(store_obj.load_all()).len(), 2);
    }

    #[test]
    fn delete_at_removes_only_the_indexed_record() {
        let store = MemoryFileStore::default();
        let store_obj: &dyn FileStore = &store;
        block_on(store_obj.append(&sample("first.txt"))).expect("append");
        block_on(store_obj.append(&sample("second.txt"))).expect("append");

        block_on(store_obj.delete_at(0)).expect("delete");

        let remaining = block_on(store_obj.load_all());
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].name, "second.txt");
    }

    #[test]
    fn delete_at_out_of_range_is_a_no_op() {
        let store = MemoryFileStore::default();
        let store_obj: &dyn FileStore = &store;

        block_on(store_obj.delete_at(0)).expect("delete on empty");
        assert!(block_on(store_obj.load_all()).is_empty());

        block_on(store_obj.append(&sample("only.txt"))).expect("append");
        block_on(store_obj.delete_at(7)).expect("delete past end");
        assert_eq!(block_on(store_obj.load_all()).len(), 1);
    }

    #[test]
    fn clear_empties_a_non_empty_collection() {
        let store = MemoryFileStore::default();
        let store_obj: &dyn FileStore = &store;
        block_on(store_obj.append(&sample("first.txt"))).expect("append");
        block_on(store_obj.append(&sample("second.txt"))).expect("append");

        block_on(store_obj.clear()).expect("clear");
        assert!(block_on(store_obj.load_all()).is_empty());
    }

    #[test]
    fn noop_store_is_empty_and_successful() {
        let store = NoopFileStore;
        let store_obj: &dyn FileStore = &store;
        assert!(block_on(store_obj.load_all()).is_empty());
        block_on(store_obj.append(&sample("x"))).expect("append");
        block_on(store_obj.delete_at(0)).expect("delete");
        block_on(store_obj.clear()).expect("clear");
    }
}
