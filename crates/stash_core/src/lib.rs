//! Typed contracts and pure logic for the browser-local file stash.
//!
//! This crate is the API-first boundary for stash persistence and
//! filtering. It holds the persisted record model, the store trait with
//! in-memory and no-op adapters, and the pure filter engine, while the
//! concrete browser adapters live in `stash_host_web`.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod filter;
pub mod record;
pub mod store;
pub mod time;

pub use filter::{
    filter_records, FilterCriteria, IndexedRecord, FILTER_PREFS_KEY, TYPE_FILTER_ALL,
};
pub use record::{decode_collection, encode_collection, StoredFile};
pub use store::{FileStore, FileStoreFuture, MemoryFileStore, NoopFileStore, FILES_KEY};
pub use time::iso_timestamp_now;
