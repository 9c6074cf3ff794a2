//! Binary entrypoint for the browser-hosted stash application.

#[cfg(all(target_arch = "wasm32", feature = "csr"))]
fn main() {
    stash_app::mount();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    eprintln!(
        "This binary is intended for the browser/WASM workflow. Build `stash_app` for wasm32 with the `csr` feature (for example via `trunk serve`)."
    );
}
