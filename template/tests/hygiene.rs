//! Hygiene — enforces coding standards at test time
//!
//! Scans the template crate's production sources for antipatterns. Each
//! pattern has a budget of zero; the splitter and composer are pure string
//! code and have no excuse for panics or silently dropped errors.

use std::fs;
use std::path::Path;

/// (needle, what it means) — every budget is zero.
const BANNED: [(&str, &str); 9] = [
    (".ok()", "discards the error without inspecting"),
    (".unwrap()", "panics on Err/None"),
    (".expect(", "panics on Err/None"),
    ("panic!(", "crashes the process"),
    ("unreachable!(", "crashes the process"),
    ("todo!(", "unfinished code"),
    ("unimplemented!(", "unfinished code"),
    ("let _ =", "silently discards a result"),
    ("#[allow(dead_code)]", "dead code should be removed"),
];

struct SourceFile {
    path: String,
    content: String,
}

/// Collect production `.rs` files from `src/`, excluding `_test.rs` siblings.
fn source_files() -> Vec<SourceFile> {
    let mut files = Vec::new();
    collect_rs_files(Path::new("src"), &mut files);
    files
}

fn collect_rs_files(dir: &Path, out: &mut Vec<SourceFile>) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };
    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            collect_rs_files(&path, out);
        } else if path.extension().is_some_and(|e| e == "rs") {
            let path_str = path.to_string_lossy().to_string();
            if path_str.ends_with("_test.rs") {
                continue;
            }
            if let Ok(content) = fs::read_to_string(&path) {
                out.push(SourceFile { path: path_str, content });
            }
        }
    }
}

#[test]
fn production_sources_carry_no_banned_patterns() {
    let files = source_files();
    assert!(!files.is_empty(), "no sources found; run from the crate root");

    let mut violations = Vec::new();
    for (needle, why) in BANNED {
        for file in &files {
            for (idx, line) in file.content.lines().enumerate() {
                if line.contains(needle) {
                    violations.push(format!("  {}:{}: {needle} ({why})", file.path, idx + 1));
                }
            }
        }
    }

    assert!(violations.is_empty(), "hygiene violations:\n{}", violations.join("\n"));
}
