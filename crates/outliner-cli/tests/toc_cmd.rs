//! Integration tests for the `toc` subcommand.

use assert_cmd::Command;
use predicates::prelude::*;

fn cmd() -> Command {
    Command::cargo_bin("outliner").unwrap()
}

fn fragment(text: &str, x: f64, y: f64, size: f64) -> serde_json::Value {
    serde_json::json!({
        "text": text,
        "x": x,
        "y": y,
        "scale_x": size,
        "scale_y": size,
        "width": text.len() as f64 * size * 0.5,
        "font": "F1",
    })
}

fn page(number: usize, lines: &[(&str, f64)]) -> serde_json::Value {
    let fragments: Vec<serde_json::Value> = lines
        .iter()
        .enumerate()
        .map(|(i, (text, x))| fragment(text, *x, 720.0 - i as f64 * 20.0, 12.0))
        .collect();
    serde_json::json!({
        "number": number,
        "fragments": fragments,
        "fonts": { "F1": { "name": "Helvetica", "weight": null } },
    })
}

fn toc_dump() -> String {
    serde_json::json!([
        page(
            1,
            &[
                ("Índice", 250.0),
                ("Prólogo...........3", 72.0),
                ("El comienzo.......4", 72.0),
                ("La trama..........5", 72.0),
                ("Epílogo...........6", 72.0),
            ]
        ),
        page(2, &[("plain body text without numbers", 72.0)]),
        page(3, &[("more body text", 72.0)]),
        page(4, &[("more body text", 72.0)]),
        page(5, &[("more body text", 72.0)]),
        page(6, &[("more body text", 72.0)]),
    ])
    .to_string()
}

fn write_dump(dir: &tempfile::TempDir, contents: &str) -> std::path::PathBuf {
    let path = dir.path().join("pages.json");
    std::fs::write(&path, contents).unwrap();
    path
}

#[test]
fn toc_text_output_reports_pages_and_entries() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_dump(&dir, &toc_dump());

    cmd()
        .arg("toc")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("TOC pages: 1"))
        .stdout(predicate::str::contains("Prólogo"))
        .stdout(predicate::str::contains("Epílogo"));
}

#[test]
fn toc_json_output_is_parseable() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_dump(&dir, &toc_dump());

    let output = cmd()
        .arg("toc")
        .arg(&path)
        .arg("--format")
        .arg("json")
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["toc_pages"], serde_json::json!([1]));
    assert_eq!(json["entries"][0]["label"], "Prólogo");
    assert_eq!(json["entries"][0]["page"], 3);
}

#[test]
fn document_without_toc_reports_none() {
    let dir = tempfile::tempdir().unwrap();
    let dump = serde_json::json!([page(1, &[("just some prose", 72.0)])]).to_string();
    let path = write_dump(&dir, &dump);

    cmd()
        .arg("toc")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("No printed TOC found."));
}
