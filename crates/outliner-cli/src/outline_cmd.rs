use std::path::Path;

use outliner::{Outline, OutlineSource, VecSource, extract_outline};

use crate::cli::OutputFormat;
use crate::shared::load_pages;

pub fn run(file: &Path, format: &OutputFormat) -> Result<(), i32> {
    let pages = load_pages(file)?;
    let outline = extract_outline(VecSource::new(pages)).map_err(|e| {
        eprintln!("error: {e}");
        1
    })?;

    match format {
        OutputFormat::Text => write_text(&outline),
        OutputFormat::Json => write_json(&outline),
    }
}

fn write_text(outline: &Outline) -> Result<(), i32> {
    if outline.is_empty() {
        println!("No outline found (no usable text or no detectable headings).");
        return Ok(());
    }

    let source = match outline.source {
        OutlineSource::Toc => "toc",
        OutlineSource::Headings => "headings",
    };
    println!("source: {source}");
    println!("level\tpage\tlabel");

    for entry in &outline.entries {
        let indent = "  ".repeat(entry.level - 1);
        println!("{}\t{}\t{}{}", entry.level, entry.page, indent, entry.label);
    }

    Ok(())
}

fn write_json(outline: &Outline) -> Result<(), i32> {
    let json = serde_json::to_string(outline).map_err(|e| {
        eprintln!("error: {e}");
        1
    })?;
    println!("{json}");
    Ok(())
}
