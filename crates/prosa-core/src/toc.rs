use crate::ast::TocEntry;
use crate::emit::emit_document;
use crate::segment::segment;
use crate::slug::Slugger;

/// Produces the ordered outline of navigable headings (levels 1–3).
///
/// This runs the same block walk as `render` over a fresh `Slugger`, so
/// for equal source text the entries here and the anchors in the rendered
/// HTML are always the same, collision suffixes included. Level 4
/// headings never appear: they are reserved for in-body sub-labels.
pub fn extract_toc(source: &str) -> Vec<TocEntry> {
    let mut slugger = Slugger::new();
    emit_document(&segment(source), &mut slugger).toc
}
