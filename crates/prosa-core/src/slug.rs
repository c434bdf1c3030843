use std::collections::HashSet;

/// Per-render mapping from heading text to unique anchor ids.
///
/// The collision table lives for exactly one render call. The HTML
/// emission pass and the TOC pass must share one instance so that a
/// repeated heading resolves to the same suffixed anchor in both the
/// `id` attribute and the navigation link target.
#[derive(Debug, Default)]
pub struct Slugger {
    seen: HashSet<String>,
}

impl Slugger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Normalizes heading text to an anchor id and registers it.
    ///
    /// The second occurrence of a base id gets `-2`, the third `-3`,
    /// and so on, in document order.
    pub fn slug(&mut self, text: &str) -> String {
        let base = normalize(text);
        let mut id = base.clone();
        let mut suffix = 2;
        while !self.seen.insert(id.clone()) {
            id = format!("{base}-{suffix}");
            suffix += 1;
        }
        id
    }
}

/// Lowercases, strips everything outside `[a-z0-9\s-]`, and collapses
/// whitespace runs to single hyphens. Accented characters are dropped
/// rather than transliterated, so `Introducción` becomes `introduccin`.
fn normalize(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut pending_hyphen = false;
    for ch in text.to_lowercase().chars() {
        if ch.is_whitespace() {
            if !out.is_empty() {
                pending_hyphen = true;
            }
            continue;
        }
        if !(ch.is_ascii_lowercase() || ch.is_ascii_digit() || ch == '-') {
            continue;
        }
        if pending_hyphen {
            out.push('-');
            pending_hyphen = false;
        }
        out.push(ch);
    }
    if out.is_empty() {
        // Punctuation-only headings still need a usable anchor.
        "section".to_string()
    } else {
        out
    }
}
