//! Fire-and-forget ingestion of selected files into the store.

use std::rc::Rc;

use stash_core::FileStore;
#[cfg(target_arch = "wasm32")]
use stash_core::{iso_timestamp_now, StoredFile};

/// Collects the files currently selected in a file input.
pub fn files_from_input(input: &web_sys::HtmlInputElement) -> Vec<web_sys::File> {
    #[cfg(target_arch = "wasm32")]
    {
        input.files().map(flatten_file_list).unwrap_or_default()
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = input;
        Vec::new()
    }
}

/// Collects the files carried by a drop event's data transfer.
pub fn files_from_drop(event: &web_sys::DragEvent) -> Vec<web_sys::File> {
    #[cfg(target_arch = "wasm32")]
    {
        event
            .data_transfer()
            .and_then(|transfer| transfer.files())
            .map(flatten_file_list)
            .unwrap_or_default()
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = event;
        Vec::new()
    }
}

#[cfg(target_arch = "wasm32")]
fn flatten_file_list(list: web_sys::FileList) -> Vec<web_sys::File> {
    (0..list.length()).filter_map(|idx| list.get(idx)).collect()
}

/// Ingests each file as an independent detached task.
///
/// Per file: read the contents as a data URL, build a stored record
/// from the file metadata, append it, then invoke `on_stored` so the
/// caller can re-render. Completion order is unordered. A failed read
/// or append invokes `on_dropped` with the reason and creates no
/// record; sibling ingestions are unaffected.
pub fn ingest_files(
    store: Rc<dyn FileStore>,
    files: Vec<web_sys::File>,
    on_stored: Rc<dyn Fn()>,
    on_dropped: Rc<dyn Fn(String)>,
) {
    #[cfg(target_arch = "wasm32")]
    {
        for file in files {
            let store = store.clone();
            let on_stored = on_stored.clone();
            let on_dropped = on_dropped.clone();
            wasm_bindgen_futures::spawn_local(async move {
                let data_url = match crate::read_file_as_data_url(&file).await {
                    Ok(data_url) => data_url,
                    Err(err) => {
                        on_dropped(format!("{}: {err}", file.name()));
                        return;
                    }
                };
                let record = StoredFile {
                    name: file.name(),
                    mime_type: file.type_(),
                    size_bytes: file.size() as u64,
                    data_url,
                    stored_at: iso_timestamp_now(),
                };
                match store.append(&record).await {
                    Ok(()) => on_stored(),
                    Err(err) => on_dropped(format!("{}: {err}", record.name)),
                }
            });
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = (store, files, on_stored, on_dropped);
    }
}
