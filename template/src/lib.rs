//! Shared template document model for the Sitesmith editor.
//!
//! This crate owns the one in-memory document the editor works on: a complete
//! HTML page held as three sibling buffers (markup, stylesheet, script). It is
//! deliberately I/O-free so the same splitter and composer run in the server,
//! the WASM client, and the CLI.

pub mod export;
pub mod split;
pub mod theme;

pub use split::split_document;
pub use theme::Theme;

use serde::{Deserialize, Serialize};

/// The editable template: one HTML page split into three buffers.
///
/// Invariant: `html` never contains a `<style>` element or an inline
/// (src-less) `<script>` element — [`split_document`] always extracts those
/// into `css` and `js`. External `src`-bearing scripts stay in `html`.
///
/// Missing fields default to empty so snapshots written by older builds still
/// load.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    /// Page markup without inline styles/scripts and without a doctype.
    #[serde(default)]
    pub html: String,
    /// Aggregated inline stylesheet content.
    #[serde(default)]
    pub css: String,
    /// Aggregated inline script content.
    #[serde(default)]
    pub js: String,
}

impl Document {
    /// `true` when the markup buffer is empty (nothing to preview or export).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.html.is_empty()
    }
}

/// Reassemble a split [`Document`] into one previewable HTML string.
///
/// Non-blank `css` is injected as a single `<style>` element before
/// `</head>` (falling back to before `<body`, then to the start of the
/// markup); non-blank `js` as a single `<script>` element before `</body>`
/// (falling back to the end). The output always opens with `<!DOCTYPE html>`
/// unless the markup already carries a doctype. An empty document composes to
/// the empty string.
#[must_use]
pub fn compose_document(doc: &Document) -> String {
    if doc.html.trim().is_empty() {
        return String::new();
    }

    let mut markup = doc.html.clone();

    if !doc.css.trim().is_empty() {
        let style = format!("<style>\n{}\n</style>", doc.css);
        let inserted = insert_before_marker(&mut markup, "</head>", &style)
            || insert_before_marker(&mut markup, "<body", &style);
        if !inserted {
            markup.insert_str(0, &style);
        }
    }

    if !doc.js.trim().is_empty() {
        let script = format!("<script>\n{}\n</script>", doc.js);
        if !insert_before_marker(&mut markup, "</body>", &script) {
            markup.push_str(&script);
        }
    }

    let head = markup.trim_start();
    if head.len() >= 9 && head.as_bytes()[..9].eq_ignore_ascii_case(b"<!doctype") {
        markup
    } else {
        format!("<!DOCTYPE html>\n{markup}")
    }
}

fn insert_before_marker(markup: &mut String, marker: &str, fragment: &str) -> bool {
    match split::find_ignore_case(markup, marker) {
        Some(at) => {
            markup.insert_str(at, fragment);
            true
        }
        None => false,
    }
}

/// Strip a wrapping markdown code fence from a model response.
///
/// Models occasionally ignore the "raw HTML only" instruction and wrap their
/// output in ```` ```html … ``` ````. Removes a leading fence line (with or
/// without a language tag) and a trailing fence, then trims whitespace. Input
/// without a fence comes back trimmed but otherwise unchanged.
#[must_use]
pub fn strip_markdown_fence(raw: &str) -> String {
    let mut text = raw.trim();
    for fence in ["```html", "```"] {
        if let Some(rest) = text.strip_prefix(fence) {
            text = rest;
            break;
        }
    }
    if let Some(rest) = text.strip_suffix("```") {
        text = rest;
    }
    text.trim().to_owned()
}

/// The page shown on first launch, before anything is generated or restored.
pub const WELCOME_TEMPLATE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>Welcome</title>
    <script src="https://cdn.tailwindcss.com"></script>
</head>
<body class="bg-gray-100">
    <div class="min-h-screen flex items-center justify-center">
        <div class="text-center p-8 bg-white rounded-lg shadow-lg">
            <h1 class="text-4xl font-bold text-gray-800 mb-4">Sitesmith</h1>
            <p class="text-lg text-gray-600">
                Describe the website you want to build in the panel on the left.
            </p>
            <p class="text-lg text-gray-600 mt-2">
                Click <span class="font-semibold text-indigo-600">"Generate"</span> to see it come to life!
            </p>
        </div>
    </div>
</body>
</html>
"#;

#[cfg(test)]
#[path = "lib_test.rs"]
mod lib_test;
