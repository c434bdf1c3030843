//! Markup-to-HTML conversion engine for long-form article pages.
//!
//! Articles are written in a small fixed markup subset (headings 1–4,
//! paragraphs, unordered lists, simple tables, emphasis, inline code,
//! links). One call to [`render`] produces sanitized display HTML, a
//! table of contents whose anchors match the emitted heading ids, and
//! derived document metadata (word count, reading time).

mod ast;
mod emit;
mod inline;
mod meta;
mod render;
mod segment;
mod slug;
mod toc;

pub use ast::{Block, DocumentMetadata, TocEntry};
pub use inline::format_inline;
pub use meta::derive_metadata;
pub use render::{RenderOutput, render, render_raw};
pub use segment::segment;
pub use slug::Slugger;
pub use toc::extract_toc;
