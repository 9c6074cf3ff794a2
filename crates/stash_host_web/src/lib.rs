//! Browser adapters for the file stash: `localStorage` persistence and
//! the FileReader-based ingestion pipeline.
//!
//! All browser interop is gated on `target_arch = "wasm32"`; on other
//! targets the adapters degrade to empty reads and no-op writes so the
//! crates above stay buildable and testable natively.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

mod ingest;
mod local_store;
mod read;

pub use ingest::{files_from_drop, files_from_input, ingest_files};
pub use local_store::{load_filter_prefs, save_filter_prefs, WebFileStore};
pub use read::read_file_as_data_url;
