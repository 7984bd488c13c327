//! Export planning — which files a template exports, with what contents.
//!
//! Free of I/O so the gating rules are unit-testable: the browser feeds each
//! planned file to a download anchor, the CLI writes the same plan to disk.

#[cfg(test)]
#[path = "export_test.rs"]
mod export_test;

use crate::Document;

/// One file of an export.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExportFile {
    pub filename: &'static str,
    pub mime: &'static str,
    pub contents: String,
}

/// The markup buffer with the doctype the splitter removed.
#[must_use]
pub fn html_with_doctype(html: &str) -> String {
    format!("<!DOCTYPE html>\n{html}")
}

/// Plan the export for `doc`.
///
/// `index.html` is included only when the markup carries a `<body` marker
/// (an empty or fragmentary buffer exports nothing useful); `style.css` and
/// `script.js` only when non-blank.
#[must_use]
pub fn plan_export(doc: &Document) -> Vec<ExportFile> {
    let mut files = Vec::new();

    if doc.html.contains("<body") {
        files.push(ExportFile {
            filename: "index.html",
            mime: "text/html",
            contents: html_with_doctype(&doc.html),
        });
    }
    if !doc.css.trim().is_empty() {
        files.push(ExportFile { filename: "style.css", mime: "text/css", contents: doc.css.clone() });
    }
    if !doc.js.trim().is_empty() {
        files.push(ExportFile {
            filename: "script.js",
            mime: "text/javascript",
            contents: doc.js.clone(),
        });
    }

    files
}
