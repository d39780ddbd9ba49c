//! Binary entrypoint for the browser-hosted component preview harness.

#[cfg(all(target_arch = "wasm32", feature = "csr"))]
fn main() {
    mantra_docs::mount();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    eprintln!(
        "This binary is intended for the browser/WASM workflow. Build `docs_app` for wasm32 with the `csr` feature and serve it with a static file server."
    );
}
