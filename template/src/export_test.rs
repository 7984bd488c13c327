use super::*;

fn full_document() -> Document {
    Document {
        html: "<html><head></head><body><p>x</p></body></html>".to_owned(),
        css: "p { margin: 0; }".to_owned(),
        js: "boot();".to_owned(),
    }
}

#[test]
fn full_document_exports_three_files() {
    let files = plan_export(&full_document());
    let names: Vec<&str> = files.iter().map(|f| f.filename).collect();
    assert_eq!(names, ["index.html", "style.css", "script.js"]);
}

#[test]
fn exported_html_regains_its_doctype() {
    let files = plan_export(&full_document());
    assert!(files[0].contents.starts_with("<!DOCTYPE html>\n<html>"));
    assert_eq!(files[0].mime, "text/html");
}

#[test]
fn markup_without_body_marker_is_not_exported() {
    let doc = Document { html: "<div>fragment</div>".to_owned(), ..full_document() };
    let files = plan_export(&doc);
    let names: Vec<&str> = files.iter().map(|f| f.filename).collect();
    assert_eq!(names, ["style.css", "script.js"]);
}

#[test]
fn blank_buffers_are_skipped() {
    let doc = Document {
        html: "<html><body></body></html>".to_owned(),
        css: "  \n".to_owned(),
        js: String::new(),
    };
    let files = plan_export(&doc);
    let names: Vec<&str> = files.iter().map(|f| f.filename).collect();
    assert_eq!(names, ["index.html"]);
}

#[test]
fn empty_document_plans_nothing() {
    assert!(plan_export(&Document::default()).is_empty());
}
