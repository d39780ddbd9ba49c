//! Preview harness for the mantra component library.
//!
//! Every component is listed with a set of stories: named attribute presets rendered through
//! the library's markup attribute conventions. Story pages expose the attributes as editable
//! controls and log the events a component emits.

mod preview;
mod stories;
mod web_app;

pub use preview::{render_story, ActionRecord};
pub use stories::{ComponentKind, Story, STORIES};
pub use web_app::{DocsApp, StoryIndex, StoryPage};

#[cfg(all(feature = "csr", target_arch = "wasm32"))]
pub fn mount() {
    console_error_panic_hook::set_once();
    leptos::mount_to_body(|| leptos::view! { <DocsApp /> })
}
