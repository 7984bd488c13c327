//! File downloads via a transient object-URL anchor.

/// Write `contents` to the user's downloads as `filename`.
///
/// Creates a Blob, points a detached anchor at its object URL, clicks it,
/// and revokes the URL. Outside the browser this is a no-op.
pub fn save_file(filename: &str, contents: &str, mime: &str) {
    #[cfg(feature = "hydrate")]
    {
        use wasm_bindgen::JsCast;

        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            return;
        };
        let Some(body) = document.body() else {
            return;
        };

        let parts = js_sys::Array::new();
        parts.push(&wasm_bindgen::JsValue::from_str(contents));
        let options = web_sys::BlobPropertyBag::new();
        options.set_type(mime);
        let Ok(blob) = web_sys::Blob::new_with_str_sequence_and_options(&parts, &options) else {
            return;
        };
        let Ok(url) = web_sys::Url::create_object_url_with_blob(&blob) else {
            return;
        };

        let Ok(anchor) = document
            .create_element("a")
            .map_err(|_| ())
            .and_then(|el| el.dyn_into::<web_sys::HtmlAnchorElement>().map_err(|_| ()))
        else {
            let _ = web_sys::Url::revoke_object_url(&url);
            return;
        };
        anchor.set_href(&url);
        anchor.set_download(filename);
        let _ = body.append_child(&anchor);
        anchor.click();
        let _ = body.remove_child(&anchor);
        let _ = web_sys::Url::revoke_object_url(&url);
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (filename, contents, mime);
    }
}
