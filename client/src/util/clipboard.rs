//! Clipboard write via the async Clipboard API.

/// Copy `text` to the clipboard. Fire-and-forget; the caller shows its own
/// confirmation badge. Outside the browser this is a no-op.
pub fn copy_text(text: &str) {
    #[cfg(feature = "hydrate")]
    {
        let Some(window) = web_sys::window() else {
            return;
        };
        let promise = window.navigator().clipboard().write_text(text);
        leptos::task::spawn_local(async move {
            if wasm_bindgen_futures::JsFuture::from(promise).await.is_err() {
                log::warn!("clipboard write rejected");
            }
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = text;
    }
}
