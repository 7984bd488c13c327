//! Browser localStorage persistence for the editor snapshot and theme.
//!
//! SYSTEM CONTEXT
//! ==============
//! Two independently keyed JSON records: the document snapshot and the theme
//! name. Read once at startup, overwritten on every change. Failures are
//! logged and otherwise ignored — the editor keeps its in-memory state.

use serde::Serialize;
use serde::de::DeserializeOwned;

use template::{Document, Theme};

const TEMPLATE_KEY: &str = "sitesmith_template";
const THEME_KEY: &str = "sitesmith_theme";

/// Load a JSON value from `localStorage` for `key`.
pub fn load_json<T: DeserializeOwned>(key: &str) -> Option<T> {
    #[cfg(feature = "hydrate")]
    {
        let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten())?;
        let raw = storage.get_item(key).ok().flatten()?;
        serde_json::from_str(&raw).ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = key;
        None
    }
}

/// Save a JSON value to `localStorage` for `key`.
pub fn save_json<T: Serialize>(key: &str, value: &T) {
    #[cfg(feature = "hydrate")]
    {
        let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) else {
            log::warn!("localStorage unavailable; {key} not persisted");
            return;
        };
        let Ok(raw) = serde_json::to_string(value) else {
            return;
        };
        if storage.set_item(key, &raw).is_err() {
            log::warn!("failed to persist {key}");
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (key, value);
    }
}

/// Restore the persisted document snapshot, if any.
pub fn load_document() -> Option<Document> {
    load_json(TEMPLATE_KEY)
}

/// Persist the document snapshot.
pub fn save_document(doc: &Document) {
    save_json(TEMPLATE_KEY, doc);
}

/// Restore the persisted theme selection, if any.
pub fn load_theme() -> Option<Theme> {
    load_json(THEME_KEY)
}

/// Persist the theme selection.
pub fn save_theme(theme: Theme) {
    save_json(THEME_KEY, &theme);
}
