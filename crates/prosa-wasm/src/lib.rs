use serde::Serialize;
use wasm_bindgen::prelude::*;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct RenderResult {
    html: String,
    toc: Vec<JsTocEntry>,
    word_count: usize,
    reading_time_minutes: u64,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsTocEntry {
    level: u8,
    text: String,
    id: String,
}

/// Renders article markup and returns `{ html, toc, wordCount,
/// readingTimeMinutes }` as a plain JS object. The HTML is sanitized.
#[wasm_bindgen]
pub fn render(source: &str) -> Result<JsValue, JsValue> {
    let output = prosa_core::render(source);
    let result = RenderResult {
        html: output.html,
        toc: output.toc.into_iter().map(JsTocEntry::from).collect(),
        word_count: output.metadata.word_count,
        reading_time_minutes: output.metadata.reading_time_minutes,
    };
    serde_wasm_bindgen::to_value(&result).map_err(|err| JsValue::from_str(&err.to_string()))
}

/// Returns only the table of contents for `source`, with the same anchor
/// ids `render` would emit.
#[wasm_bindgen]
pub fn extract_toc(source: &str) -> Result<JsValue, JsValue> {
    let toc: Vec<JsTocEntry> = prosa_core::extract_toc(source)
        .into_iter()
        .map(JsTocEntry::from)
        .collect();
    serde_wasm_bindgen::to_value(&toc).map_err(|err| JsValue::from_str(&err.to_string()))
}

impl From<prosa_core::TocEntry> for JsTocEntry {
    fn from(entry: prosa_core::TocEntry) -> Self {
        Self {
            level: entry.level,
            text: entry.text,
            id: entry.id,
        }
    }
}
