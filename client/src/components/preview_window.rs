//! Live preview of the composed template.

use leptos::prelude::*;

/// Sandboxed iframe rendering the composed document via `srcdoc`.
///
/// Scripts run inside the sandbox; the frame never navigates the editor.
#[component]
pub fn PreviewWindow(#[prop(into)] srcdoc: Signal<String>) -> impl IntoView {
    view! {
        <div class="preview-window">
            <iframe
                class="preview-window__frame"
                title="Website Preview"
                sandbox="allow-scripts allow-same-origin"
                srcdoc=move || srcdoc.get()
            ></iframe>
        </div>
    }
}
