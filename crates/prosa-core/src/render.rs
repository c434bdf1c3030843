use crate::ast::{DocumentMetadata, TocEntry};
use crate::emit::{emit_document, sanitize};
use crate::meta::derive_metadata;
use crate::segment::segment;
use crate::slug::Slugger;

/// Everything a page needs from one article source: display HTML, the
/// navigation outline, and the derived metadata.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RenderOutput {
    pub html: String,
    pub toc: Vec<TocEntry>,
    pub metadata: DocumentMetadata,
}

/// Renders one article. The single entry point consumed by page code.
///
/// Blocks are segmented once and HTML and TOC come out of that one
/// traversal over a slugger allocated here, so anchor assignment cannot
/// diverge between the two. The HTML is sanitized and safe to inject
/// as trusted markup. Pure and synchronous; every call is independent.
pub fn render(source: &str) -> RenderOutput {
    let mut output = render_raw(source);
    output.html = sanitize(&output.html);
    output
}

/// Same as [`render`] but skips sanitization, for callers that feed the
/// fragment into their own cleaning or templating step.
pub fn render_raw(source: &str) -> RenderOutput {
    let blocks = segment(source);
    let mut slugger = Slugger::new();
    let emitted = emit_document(&blocks, &mut slugger);
    RenderOutput {
        html: emitted.html,
        toc: emitted.toc,
        metadata: derive_metadata(source),
    }
}
