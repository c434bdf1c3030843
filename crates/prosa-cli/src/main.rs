use std::env;
use std::fs;
use std::io::{self, Read};
use std::process;

use prosa_core::{RenderOutput, TocEntry, render, render_raw};

fn main() {
    let mut input: Option<String> = None;
    let mut raw = false;
    let mut mode = OutputMode::Html;

    let mut args = env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-h" | "--help" => {
                print_usage();
                return;
            }
            "--raw" => raw = true,
            "--json" => mode = OutputMode::Json,
            "--toc" => mode = OutputMode::Toc,
            _ => {
                if input.is_none() {
                    input = Some(arg);
                } else {
                    eprintln!("unexpected argument: {}", arg);
                    print_usage();
                    process::exit(2);
                }
            }
        }
    }

    let source = match input {
        Some(path) => fs::read_to_string(&path).unwrap_or_else(|err| {
            eprintln!("failed to read {}: {}", path, err);
            process::exit(1);
        }),
        None => {
            let mut buffer = String::new();
            io::stdin()
                .read_to_string(&mut buffer)
                .unwrap_or_else(|err| {
                    eprintln!("failed to read stdin: {}", err);
                    process::exit(1);
                });
            buffer
        }
    };

    let output = if raw { render_raw(&source) } else { render(&source) };

    match mode {
        OutputMode::Html => print!("{}", output.html),
        OutputMode::Json => println!("{}", output_to_json(&output)),
        OutputMode::Toc => println!("{}", toc_to_json(&output.toc)),
    }
}

fn print_usage() {
    eprintln!("Usage: prosa-cli [--raw] [--json | --toc] [input]");
    eprintln!();
    eprintln!("Reads article markup from a file or stdin and prints sanitized");
    eprintln!("HTML. --raw skips sanitization, --json prints the full render");
    eprintln!("result, --toc only the table of contents.");
}

#[derive(Clone, Copy)]
enum OutputMode {
    Html,
    Json,
    Toc,
}

fn output_to_json(output: &RenderOutput) -> String {
    let mut out = String::from("{\n");
    out.push_str(&format!("  \"html\": \"{}\",\n", escape_json(&output.html)));
    out.push_str(&format!("  \"toc\": {},\n", indent(&toc_to_json(&output.toc), 2)));
    out.push_str(&format!("  \"wordCount\": {},\n", output.metadata.word_count));
    out.push_str(&format!(
        "  \"readingTimeMinutes\": {}\n",
        output.metadata.reading_time_minutes
    ));
    out.push('}');
    out
}

fn toc_to_json(toc: &[TocEntry]) -> String {
    if toc.is_empty() {
        return "[]".to_string();
    }

    let mut out = String::from("[\n");
    for (idx, entry) in toc.iter().enumerate() {
        out.push_str("  {\n");
        out.push_str(&format!("    \"level\": {},\n", entry.level));
        out.push_str(&format!("    \"text\": \"{}\",\n", escape_json(&entry.text)));
        out.push_str(&format!("    \"id\": \"{}\"\n", escape_json(&entry.id)));
        out.push_str("  }");
        if idx + 1 < toc.len() {
            out.push_str(",\n");
        } else {
            out.push('\n');
        }
    }
    out.push(']');
    out
}

// JSON arrays are emitted at top level and nested inside the render
// result; re-indent all lines after the first when nesting.
fn indent(json: &str, spaces: usize) -> String {
    let pad = " ".repeat(spaces);
    let mut lines = json.lines();
    let mut out = String::new();
    if let Some(first) = lines.next() {
        out.push_str(first);
    }
    for line in lines {
        out.push('\n');
        out.push_str(&pad);
        out.push_str(line);
    }
    out
}

fn escape_json(value: &str) -> String {
    let mut out = String::new();
    for ch in value.chars() {
        match ch {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            // Remaining C0 controls are invalid raw inside JSON strings;
            // user text can contain any of them.
            ch if (ch as u32) < 0x20 => out.push_str(&format!("\\u{:04x}", ch as u32)),
            _ => out.push(ch),
        }
    }
    out
}
