/// Applies inline transforms to one unit of raw text.
///
/// The scanner walks the text left to right and resolves each delimiter at
/// the position it appears: `` ` `` opens a code span, `[` a link, and a
/// run of `*` the longest emphasis form it can close (`***x***` before
/// `**x**` before `*x*`, so the single-star pattern can never split a
/// triple-star run). Code span content is never re-scanned for emphasis
/// or links, which keeps bracket and paren characters inside backticks
/// out of the link parser. A delimiter without a matching closer is
/// emitted as literal text.
///
/// Delimiter characters inside code spans and link URLs are emitted as
/// character entities, so consumed delimiters never resurface and
/// applying the transform to its own output leaves it unchanged.
pub fn format_inline(text: &str) -> String {
    let bytes = text.as_bytes();
    let mut out = String::with_capacity(text.len() + 16);
    // Start of the pending literal run, flushed before each emitted tag.
    let mut literal = 0;
    let mut i = 0;

    while i < bytes.len() {
        let matched = match bytes[i] {
            b'`' => code_span(text, i),
            b'*' => emphasis(text, i),
            b'[' => link(text, i),
            _ => None,
        };
        match matched {
            Some((rendered, next)) => {
                out.push_str(&text[literal..i]);
                out.push_str(&rendered);
                literal = next;
                i = next;
            }
            None => i += 1,
        }
    }
    out.push_str(&text[literal..]);
    out
}

/// `` `content` `` with non-empty content. The content keeps its text
/// verbatim apart from delimiter escaping; it is never parsed further.
fn code_span(text: &str, start: usize) -> Option<(String, usize)> {
    let rest = &text[start + 1..];
    let close = rest.find('`')?;
    if close == 0 {
        return None;
    }
    let content = escape_delimiters(&rest[..close]);
    Some((format!("<code>{content}</code>"), start + 1 + close + 1))
}

/// `*`-delimited emphasis. The run length at the opener picks the form:
/// three or more stars try bold-italic first, then bold, then italic,
/// matching the closer of the same width.
fn emphasis(text: &str, start: usize) -> Option<(String, usize)> {
    let run = text[start..]
        .bytes()
        .take_while(|byte| *byte == b'*')
        .count()
        .min(3);

    for width in (1..=run).rev() {
        let delim = &"***"[..width];
        let open_end = start + width;
        let Some(close) = text[open_end..].find(delim) else {
            continue;
        };
        if close == 0 {
            continue;
        }
        let content = format_inline(&text[open_end..open_end + close]);
        let rendered = match width {
            3 => format!("<strong><em>{content}</em></strong>"),
            2 => format!("<strong>{content}</strong>"),
            _ => format!("<em>{content}</em>"),
        };
        return Some((rendered, open_end + close + width));
    }
    None
}

/// `[text](url)`. Link text is formatted recursively; the URL is kept
/// verbatim. Article links open in a new tab.
fn link(text: &str, start: usize) -> Option<(String, usize)> {
    let rest = &text[start + 1..];
    let label_end = rest.find(']')?;
    if label_end == 0 {
        return None;
    }
    let after_label = &rest[label_end + 1..];
    let url_body = after_label.strip_prefix('(')?;
    let url_end = url_body.find(')')?;
    if url_end == 0 {
        return None;
    }

    let label = format_inline(&rest[..label_end]);
    let url = escape_delimiters(&url_body[..url_end]);
    let rendered = format!(
        "<a href=\"{url}\" target=\"_blank\" rel=\"noopener noreferrer\">{label}</a>"
    );
    // 1 opener + label + 2 brackets/parens over the label end + url + closer.
    let next = start + 1 + label_end + 1 + 1 + url_end + 1;
    Some((rendered, next))
}

/// Replaces the scanner's delimiter characters with character entities.
/// Entities render identically but contain no delimiter bytes, so code
/// span content and hrefs can never re-trigger a transform on a second
/// pass. Double quotes are covered too: hrefs land in attribute position.
fn escape_delimiters(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '`' => out.push_str("&#96;"),
            '*' => out.push_str("&#42;"),
            '[' => out.push_str("&#91;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(ch),
        }
    }
    out
}
