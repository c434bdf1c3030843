use prosa_core::{render, render_raw};

#[test]
fn empty_document_renders_empty_but_valid() {
    let out = render("");
    assert_eq!(out.html, "");
    assert!(out.toc.is_empty());
    assert_eq!(out.metadata.word_count, 0);
    assert_eq!(out.metadata.reading_time_minutes, 1);
}

#[test]
fn sanitized_output_drops_script_tags() {
    let out = render("Hola <script>alert(1)</script> mundo\n");
    assert!(!out.html.contains("<script"));
    assert!(out.html.contains("Hola"));
    assert!(out.html.contains("mundo"));
}

#[test]
fn sanitized_output_strips_javascript_urls() {
    let out = render("[click](javascript:alert(1))\n");
    assert!(!out.html.contains("javascript:"));
}

#[test]
fn raw_inline_html_is_neutralized_not_fatal() {
    let out = render("<div onclick=\"evil()\">texto</div>\n");
    assert!(!out.html.contains("onclick"));
    assert!(!out.html.contains("<div"));
    assert!(out.html.contains("texto"));
}

#[test]
fn sanitizer_keeps_heading_ids_and_link_targets() {
    let out = render("## Costos\n\nVer [fuente](https://example.com) oficial.\n");
    assert!(out.html.contains("id=\"costos\""));
    assert!(out.html.contains("href=\"https://example.com\""));
    assert!(out.html.contains("target=\"_blank\""));
    assert!(out.html.contains("rel=\"noopener noreferrer\""));
}

#[test]
fn metadata_counts_raw_source_words_not_markup_output() {
    // 4 tokens in the raw source, tag names never counted.
    let out = render_raw("## Titulo\n\n**dos** palabras\n");
    assert_eq!(out.metadata.word_count, 4);
    assert_eq!(out.metadata.reading_time_minutes, 1);
}

#[test]
fn raw_and_sanitized_share_toc_and_metadata() {
    let source = "## Uno\n\ntexto\n\n## Dos\n";
    let raw = render_raw(source);
    let clean = render(source);
    assert_eq!(raw.toc, clean.toc);
    assert_eq!(raw.metadata, clean.metadata);
}
