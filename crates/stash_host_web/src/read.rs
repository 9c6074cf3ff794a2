//! FileReader bridge producing base64 data URLs.

#[cfg(target_arch = "wasm32")]
use futures::channel::oneshot;
#[cfg(target_arch = "wasm32")]
use std::{cell::RefCell, rc::Rc};
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::{closure::Closure, JsCast};

/// Reads the full contents of `file` as a base64 data URI.
///
/// The read is a single asynchronous operation with no progress
/// reporting and no cancellation; it either yields the data URL or an
/// error describing why the file could not be read.
///
/// # Errors
///
/// Returns an error when the browser read fails or when called off the
/// wasm32 target.
pub async fn read_file_as_data_url(file: &web_sys::File) -> Result<String, String> {
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = file;
        Err("file reads are only available when compiled for wasm32".to_string())
    }

    #[cfg(target_arch = "wasm32")]
    {
        let reader = web_sys::FileReader::new().map_err(|err| format!("{err:?}"))?;
        let (tx, rx) = oneshot::channel::<Result<String, String>>();
        let sender = Rc::new(RefCell::new(Some(tx)));

        let reader_for_load = reader.clone();
        let load_sender = sender.clone();
        let on_load = Closure::<dyn FnMut(web_sys::ProgressEvent)>::wrap(Box::new(move |_| {
            let result = reader_for_load
                .result()
                .map_err(|err| format!("failed to read selected file: {err:?}"))
                .and_then(|value| {
                    value
                        .as_string()
                        .ok_or_else(|| "file reader returned non-string result".to_string())
                });
            if let Some(tx) = load_sender.borrow_mut().take() {
                let _ = tx.send(result);
            }
        }));
        reader.set_onload(Some(on_load.as_ref().unchecked_ref()));

        let error_sender = sender.clone();
        let on_error = Closure::<dyn FnMut(web_sys::ProgressEvent)>::wrap(Box::new(move |_| {
            if let Some(tx) = error_sender.borrow_mut().take() {
                let _ = tx.send(Err("selected file could not be loaded".to_string()));
            }
        }));
        reader.set_onerror(Some(on_error.as_ref().unchecked_ref()));

        reader
            .read_as_data_url(file)
            .map_err(|err| format!("failed to start file read: {err:?}"))?;

        let result = rx
            .await
            .map_err(|_| "file read was interrupted".to_string())?;
        on_load.forget();
        on_error.forget();
        result
    }
}
