//! Browser-local file stash: Leptos application component and mount
//! entrypoint.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

mod app;
pub mod rows;

pub use app::StashApp;

#[cfg(all(feature = "csr", target_arch = "wasm32"))]
/// Mounts the stash application onto the document body.
pub fn mount() {
    console_error_panic_hook::set_once();
    leptos::mount_to_body(|| leptos::view! { <StashApp /> })
}
