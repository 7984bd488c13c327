use super::*;

fn sample_document() -> Document {
    Document {
        html: "<html><head><title>T</title></head><body><p>hi</p></body></html>".to_owned(),
        css: "p { color: blue; }".to_owned(),
        js: "console.log('hi');".to_owned(),
    }
}

// =========================================================================
// compose_document
// =========================================================================

#[test]
fn compose_injects_style_into_head_and_script_into_body() {
    let composed = compose_document(&sample_document());
    let style_at = composed.find("<style>").expect("style element");
    let head_close = composed.find("</head>").expect("head close");
    let script_at = composed.find("<script>").expect("script element");
    let body_close = composed.find("</body>").expect("body close");
    assert!(style_at < head_close);
    assert!(script_at < body_close);
}

#[test]
fn compose_prepends_doctype() {
    let composed = compose_document(&sample_document());
    assert!(composed.starts_with("<!DOCTYPE html>\n"));
}

#[test]
fn compose_keeps_existing_doctype() {
    let doc = Document { html: "<!doctype html><html></html>".to_owned(), ..Document::default() };
    let composed = compose_document(&doc);
    assert!(composed.starts_with("<!doctype html>"));
    assert_eq!(composed.matches("octype").count(), 1);
}

#[test]
fn compose_empty_document_is_empty_string() {
    assert_eq!(compose_document(&Document::default()), "");
}

#[test]
fn compose_skips_blank_buffers() {
    let doc = Document {
        html: "<html><head></head><body></body></html>".to_owned(),
        css: "   ".to_owned(),
        js: String::new(),
    };
    let composed = compose_document(&doc);
    assert!(!composed.contains("<style>"));
    assert!(!composed.contains("<script>"));
}

#[test]
fn compose_falls_back_without_head_or_body_close() {
    let doc = Document {
        html: "<body><p>x</p>".to_owned(),
        css: "p{}".to_owned(),
        js: "go();".to_owned(),
    };
    let composed = compose_document(&doc);
    let style_at = composed.find("<style>").expect("style element");
    let body_at = composed.find("<body>").expect("body tag");
    assert!(style_at < body_at);
    assert!(composed.trim_end().ends_with("</script>"));
}

#[test]
fn split_then_compose_round_trips_buffers() {
    let original = "<!DOCTYPE html>\n<html><head><title>T</title>\
<style>h1 { margin: 0; }</style></head>\
<body><h1>Hi</h1><script>boot();</script></body></html>";
    let first = split_document(original);
    let second = split_document(&compose_document(&first));
    assert_eq!(second, first);
}

#[test]
fn welcome_template_splits_cleanly() {
    let doc = split_document(WELCOME_TEMPLATE);
    assert!(!doc.is_empty());
    assert!(doc.html.contains("cdn.tailwindcss.com"));
    assert!(doc.css.is_empty());
    assert!(doc.js.is_empty());
}

// =========================================================================
// strip_markdown_fence
// =========================================================================

#[test]
fn fence_with_language_tag_is_removed() {
    let fenced = "```html\n<!DOCTYPE html><html></html>\n```";
    assert_eq!(strip_markdown_fence(fenced), "<!DOCTYPE html><html></html>");
}

#[test]
fn bare_fence_is_removed() {
    let fenced = "```\n<p>x</p>\n```";
    assert_eq!(strip_markdown_fence(fenced), "<p>x</p>");
}

#[test]
fn unfenced_input_is_only_trimmed() {
    assert_eq!(strip_markdown_fence("  <p>x</p>\n"), "<p>x</p>");
}

#[test]
fn fenced_and_unfenced_responses_clean_to_the_same_html() {
    let plain = "<!DOCTYPE html><html><body></body></html>";
    let fenced = format!("```html\n{plain}\n```");
    assert_eq!(strip_markdown_fence(&fenced), strip_markdown_fence(plain));
}

// =========================================================================
// Document serde
// =========================================================================

#[test]
fn document_serde_round_trip() {
    let doc = sample_document();
    let json = serde_json::to_string(&doc).expect("serialize");
    let restored: Document = serde_json::from_str(&json).expect("deserialize");
    assert_eq!(restored, doc);
}

#[test]
fn missing_fields_default_to_empty() {
    let restored: Document = serde_json::from_str(r#"{"html":"<html></html>"}"#).expect("deserialize");
    assert_eq!(restored.html, "<html></html>");
    assert!(restored.css.is_empty());
    assert!(restored.js.is_empty());
}
