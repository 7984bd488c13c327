//! Theme application.
//!
//! Writes the selected palette's CSS custom properties onto the `<html>`
//! element; the stylesheet picks them up everywhere. Requires a browser
//! environment.

use template::Theme;

/// Apply `theme`'s variables to the document element.
pub fn apply(theme: Theme) {
    #[cfg(feature = "hydrate")]
    {
        use wasm_bindgen::JsCast;

        let Some(root) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.document_element())
        else {
            return;
        };
        let Ok(root) = root.dyn_into::<web_sys::HtmlElement>() else {
            return;
        };

        let style = root.style();
        for (name, value) in theme.variables() {
            let _ = style.set_property(name, value);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = theme;
    }
}
