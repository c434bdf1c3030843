use crate::ast::{Block, TocEntry};
use crate::inline::format_inline;
use crate::slug::Slugger;
use ammonia::Builder;
use std::collections::{HashMap, HashSet};

/// Headings up to this level are navigable: they get an anchor id and a
/// TOC entry. Level 4 headings are in-body sub-labels and get neither,
/// which keeps the id/TOC bijection exact.
pub(crate) const MAX_NAV_LEVEL: u8 = 3;

pub(crate) struct Emitted {
    pub html: String,
    pub toc: Vec<TocEntry>,
}

/// Walks the block sequence once, producing HTML and the TOC together.
///
/// Sharing one traversal (and one `Slugger`) is what guarantees that the
/// anchor a TOC link points at is the id the heading was actually given;
/// two independent scans could disagree on collision numbering.
pub(crate) fn emit_document(blocks: &[Block], slugger: &mut Slugger) -> Emitted {
    let mut writer = HtmlWriter::new();
    let mut toc = Vec::new();
    let mut iter = blocks.iter().peekable();

    while let Some(block) = iter.next() {
        match block {
            Block::Heading { level, text } => {
                if *level <= MAX_NAV_LEVEL {
                    let id = slugger.slug(text);
                    writer.line(&format!(
                        "<h{level} id=\"{id}\">{}</h{level}>",
                        format_inline(text)
                    ));
                    toc.push(TocEntry {
                        level: *level,
                        text: text.clone(),
                        id,
                    });
                } else {
                    writer.line(&format!("<h{level}>{}</h{level}>", format_inline(text)));
                }
            }
            Block::Paragraph { text } => {
                writer.line(&format!("<p>{}</p>", format_inline(text)));
            }
            Block::ListItem { text } => {
                // Wrap this item and every contiguous follower in one list.
                writer.line("<ul>");
                writer.indent += 1;
                writer.line(&format!("<li>{}</li>", format_inline(text)));
                while let Some(Block::ListItem { text }) = iter.peek() {
                    writer.line(&format!("<li>{}</li>", format_inline(text)));
                    iter.next();
                }
                writer.indent -= 1;
                writer.line("</ul>");
            }
            Block::TableRow { cells } => {
                writer.line("<table>");
                writer.indent += 1;
                writer.line(&table_row(cells));
                while let Some(Block::TableRow { cells }) = iter.peek() {
                    writer.line(&table_row(cells));
                    iter.next();
                }
                writer.indent -= 1;
                writer.line("</table>");
            }
        }
    }

    Emitted {
        html: writer.finish(),
        toc,
    }
}

fn table_row(cells: &[String]) -> String {
    let mut row = String::from("<tr>");
    for cell in cells {
        row.push_str("<td>");
        row.push_str(&format_inline(cell));
        row.push_str("</td>");
    }
    row.push_str("</tr>");
    row
}

/// Cleans emitted HTML against the allow-list of tags this engine can
/// produce. Anything else in the source text, inline HTML included,
/// comes out escaped or stripped rather than live markup.
pub(crate) fn sanitize(html: &str) -> String {
    let tags: HashSet<&'static str> = [
        "a", "code", "em", "h1", "h2", "h3", "h4", "li", "p", "strong", "table", "td", "tr", "ul",
    ]
    .iter()
    .copied()
    .collect();

    let mut generic_attributes: HashSet<&'static str> = HashSet::new();
    generic_attributes.insert("id");

    let mut tag_attributes = HashMap::new();
    // `rel` is re-applied by ammonia's default link_rel, so only href and
    // target need to survive the clean.
    tag_attributes.insert("a", ["href", "target"].iter().copied().collect());

    Builder::new()
        .tags(tags)
        .generic_attributes(generic_attributes)
        .tag_attributes(tag_attributes)
        .clean(html)
        .to_string()
}

struct HtmlWriter {
    out: String,
    indent: usize,
}

impl HtmlWriter {
    fn new() -> Self {
        Self {
            out: String::new(),
            indent: 0,
        }
    }

    fn line(&mut self, line: &str) {
        for _ in 0..self.indent {
            self.out.push_str("  ");
        }
        self.out.push_str(line);
        self.out.push('\n');
    }

    fn finish(mut self) -> String {
        if self.out.ends_with('\n') {
            self.out.pop();
        }
        self.out
    }
}
