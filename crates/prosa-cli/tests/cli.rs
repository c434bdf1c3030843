use std::env;
use std::fs;
use std::path::PathBuf;
use std::process::Command;
use std::time::{SystemTime, UNIX_EPOCH};

fn bin_path() -> PathBuf {
    if let Some(path) = env::var_os("CARGO_BIN_EXE_prosa-cli") {
        return PathBuf::from(path);
    }
    if let Some(path) = env::var_os("CARGO_BIN_EXE_prosa_cli") {
        return PathBuf::from(path);
    }
    let exe = env::current_exe().expect("current exe");
    let mut debug_dir = exe.as_path();
    while let Some(parent) = debug_dir.parent() {
        if parent.file_name().and_then(|name| name.to_str()) == Some("debug") {
            let candidate = parent.join("prosa-cli");
            if candidate.exists() {
                return candidate;
            }
        }
        debug_dir = parent;
    }
    panic!("binary path missing");
}

fn temp_file(name: &str, contents: &str) -> PathBuf {
    let mut path = env::temp_dir();
    let now = SystemTime::now().duration_since(UNIX_EPOCH).expect("time");
    let file_name = format!(
        "prosa_cli_{}_{}_{}.md",
        name,
        now.as_secs(),
        now.subsec_nanos()
    );
    path.push(file_name);
    fs::write(&path, contents).expect("write temp file");
    path
}

#[test]
fn renders_html_fragment() {
    let input = temp_file("fragment", "## Costos\n\nUn parrafo.\n");
    let output = Command::new(bin_path())
        .args([input.to_str().expect("path")])
        .output()
        .expect("run");

    assert!(output.status.success(), "expected success exit code");
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("<h2 id=\"costos\">Costos</h2>"));
    assert!(stdout.contains("<p>Un parrafo.</p>"));
}

#[test]
fn json_output_is_well_formed_and_complete() {
    let input = temp_file("json", "# Titulo\n\nHola mundo con \"comillas\".\n");
    let output = Command::new(bin_path())
        .args(["--json", input.to_str().expect("path")])
        .output()
        .expect("run");

    assert!(output.status.success(), "expected success exit code");
    let stdout = String::from_utf8_lossy(&output.stdout);
    let value: serde_json::Value = serde_json::from_str(&stdout).expect("valid JSON");

    assert!(value["html"].as_str().expect("html").contains("Titulo"));
    assert_eq!(value["toc"][0]["id"], "titulo");
    assert_eq!(value["wordCount"], 6);
    assert_eq!(value["readingTimeMinutes"], 1);
}

#[test]
fn json_escapes_control_characters() {
    let input = temp_file("ctrl", "antes\u{0c}despues\n\nsegundo\u{1b}parrafo\n");
    let output = Command::new(bin_path())
        .args(["--json", input.to_str().expect("path")])
        .output()
        .expect("run");

    assert!(output.status.success(), "expected success exit code");
    let stdout = String::from_utf8_lossy(&output.stdout);
    let value: serde_json::Value = serde_json::from_str(&stdout).expect("valid JSON");
    assert!(value["html"].as_str().expect("html").contains("antes"));
}

#[test]
fn toc_output_lists_only_navigable_headings() {
    let input = temp_file("toc", "## Seccion\n\n#### Sublabel\n");
    let output = Command::new(bin_path())
        .args(["--toc", input.to_str().expect("path")])
        .output()
        .expect("run");

    assert!(output.status.success(), "expected success exit code");
    let stdout = String::from_utf8_lossy(&output.stdout);
    let value: serde_json::Value = serde_json::from_str(&stdout).expect("valid JSON");
    let toc = value.as_array().expect("array");
    assert_eq!(toc.len(), 1);
    assert_eq!(toc[0]["id"], "seccion");
}

#[test]
fn raw_flag_skips_sanitization() {
    let input = temp_file("raw", "texto con <span>inline</span>\n");

    let clean = Command::new(bin_path())
        .args([input.to_str().expect("path")])
        .output()
        .expect("run");
    let raw = Command::new(bin_path())
        .args(["--raw", input.to_str().expect("path")])
        .output()
        .expect("run");

    let clean_stdout = String::from_utf8_lossy(&clean.stdout);
    let raw_stdout = String::from_utf8_lossy(&raw.stdout);
    assert!(!clean_stdout.contains("<span>"), "sanitized output kept span");
    assert!(raw_stdout.contains("<span>"), "raw output lost span");
}

#[test]
fn missing_file_exits_with_error() {
    let output = Command::new(bin_path())
        .args(["/no/such/file.md"])
        .output()
        .expect("run");

    assert!(!output.status.success(), "expected failure exit code");
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("failed to read"));
}

#[test]
fn unexpected_argument_exits_with_usage() {
    let output = Command::new(bin_path())
        .args(["a.md", "b.md"])
        .output()
        .expect("run");

    assert_eq!(output.status.code(), Some(2));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Usage:"));
}
