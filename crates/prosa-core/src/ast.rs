/// A structurally distinct unit of article content.
///
/// Blocks are produced in document order and are positionally final;
/// contiguous `ListItem`s and `TableRow`s are grouped into a single
/// container at emission time, never merged during segmentation.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Block {
    Heading { level: u8, text: String },
    ListItem { text: String },
    TableRow { cells: Vec<String> },
    Paragraph { text: String },
}

/// One navigable heading: its level (1–3), display text, and anchor id.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TocEntry {
    pub level: u8,
    pub text: String,
    pub id: String,
}

/// Derived document statistics, recomputed on every render.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct DocumentMetadata {
    pub word_count: usize,
    /// Estimate at 200 words per minute, never below 1.
    pub reading_time_minutes: u64,
}
