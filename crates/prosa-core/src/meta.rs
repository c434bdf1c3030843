use crate::ast::DocumentMetadata;

/// Average reading speed behind the "N min read" estimate.
const WORDS_PER_MINUTE: usize = 200;

/// Counts words and estimates reading time from the raw source text.
///
/// Counting runs over the source rather than the rendered HTML so tag
/// names never inflate the total. The estimate rounds up and is floored
/// at one minute, so even an empty document reports 1.
pub fn derive_metadata(source: &str) -> DocumentMetadata {
    let word_count = source.split_whitespace().count();
    let reading_time_minutes = word_count.div_ceil(WORDS_PER_MINUTE).max(1) as u64;
    DocumentMetadata {
        word_count,
        reading_time_minutes,
    }
}
