use crate::ast::Block;

/// Splits raw article source into an ordered sequence of typed blocks.
///
/// Classification is a single pass that consumes each line exactly once.
/// Heading, list, and table markers are checked before the paragraph
/// fallback, so block-level content is never wrapped a second time as
/// paragraph text. Consecutive plain lines belong to the same paragraph;
/// a blank line closes it. Table divider rows (dashes/pipes/whitespace
/// only) are dropped here rather than rendered as data rows.
///
/// There is no failure mode: lines that do not match any marker, including
/// malformed table rows, degrade to paragraph text.
pub fn segment(source: &str) -> Vec<Block> {
    let mut blocks = Vec::new();
    let mut paragraph: Vec<&str> = Vec::new();

    for line in source.lines() {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            flush_paragraph(&mut blocks, &mut paragraph);
            continue;
        }

        if let Some((level, text)) = parse_heading(trimmed) {
            flush_paragraph(&mut blocks, &mut paragraph);
            blocks.push(Block::Heading {
                level,
                text: text.to_string(),
            });
            continue;
        }

        if let Some(text) = trimmed.strip_prefix("* ") {
            flush_paragraph(&mut blocks, &mut paragraph);
            blocks.push(Block::ListItem {
                text: text.trim().to_string(),
            });
            continue;
        }

        if is_table_row(trimmed) {
            flush_paragraph(&mut blocks, &mut paragraph);
            if !is_divider_row(trimmed) {
                blocks.push(Block::TableRow {
                    cells: split_cells(trimmed),
                });
            }
            continue;
        }

        paragraph.push(trimmed);
    }
    flush_paragraph(&mut blocks, &mut paragraph);

    blocks
}

fn flush_paragraph(blocks: &mut Vec<Block>, lines: &mut Vec<&str>) {
    if !lines.is_empty() {
        blocks.push(Block::Paragraph {
            text: lines.join(" "),
        });
        lines.clear();
    }
}

/// `#` through `####` followed by a space. Deeper runs and missing spaces
/// are not headings and fall through to paragraph text.
fn parse_heading(line: &str) -> Option<(u8, &str)> {
    let hashes = line.bytes().take_while(|byte| *byte == b'#').count();
    if hashes == 0 || hashes > 4 {
        return None;
    }
    let text = line[hashes..].strip_prefix(' ')?.trim();
    if text.is_empty() {
        return None;
    }
    Some((hashes as u8, text))
}

/// A table row starts with a pipe and carries at least one more.
fn is_table_row(line: &str) -> bool {
    line.starts_with('|') && line[1..].contains('|')
}

/// Divider rows separate a header row from data rows and are never
/// rendered: only dashes, pipes, and whitespace, with at least one dash.
fn is_divider_row(line: &str) -> bool {
    line.contains('-')
        && line
            .chars()
            .all(|ch| ch == '-' || ch == '|' || ch.is_whitespace())
}

fn split_cells(line: &str) -> Vec<String> {
    line.split('|')
        .map(str::trim)
        .filter(|cell| !cell.is_empty())
        .map(str::to_string)
        .collect()
}
