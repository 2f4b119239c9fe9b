use std::collections::BTreeMap;
use std::path::Path;

use outliner::{
    MAX_TOC_PAGES, PageContent, TOC_SCAN_WINDOW, TocEntry, is_toc_page, is_toc_start_page,
    parse_toc_pages,
};

use crate::cli::OutputFormat;
use crate::shared::load_pages;

pub fn run(file: &Path, format: &OutputFormat) -> Result<(), i32> {
    let pages = load_pages(file)?;
    let total = pages.iter().map(|p| p.number).max().unwrap_or(0);
    let by_number: BTreeMap<usize, &PageContent> = pages.iter().map(|p| (p.number, p)).collect();

    let Some(toc_pages) = locate(&by_number, total) else {
        println!("No printed TOC found.");
        return Ok(());
    };

    let page_refs: Vec<&PageContent> = toc_pages
        .iter()
        .filter_map(|n| by_number.get(n).copied())
        .collect();
    let entries = parse_toc_pages(&page_refs, total);

    match format {
        OutputFormat::Text => write_text(&toc_pages, &entries),
        OutputFormat::Json => write_json(&toc_pages, &entries),
    }
}

/// The same window scan and continuation walk the extractor performs,
/// over the already-loaded page set.
fn locate(by_number: &BTreeMap<usize, &PageContent>, total: usize) -> Option<Vec<usize>> {
    let window = total.min(TOC_SCAN_WINDOW);
    let start = (1..=window).find(|n| by_number.get(n).is_some_and(|p| is_toc_start_page(p)))?;

    let mut toc_pages = vec![start];
    let mut next = start + 1;
    while next <= total && toc_pages.len() <= MAX_TOC_PAGES {
        match by_number.get(&next) {
            Some(page) if is_toc_page(page) => toc_pages.push(next),
            _ => break,
        }
        next += 1;
    }
    Some(toc_pages)
}

fn write_text(toc_pages: &[usize], entries: &[TocEntry]) -> Result<(), i32> {
    let pages: Vec<String> = toc_pages.iter().map(|n| n.to_string()).collect();
    println!("TOC pages: {}", pages.join(", "));

    if entries.is_empty() {
        println!("No entries parsed.");
        return Ok(());
    }

    println!("level\tpage\tlabel");
    for entry in entries {
        println!("{}\t{}\t{}", entry.level, entry.page, entry.label);
    }

    Ok(())
}

fn write_json(toc_pages: &[usize], entries: &[TocEntry]) -> Result<(), i32> {
    let json = serde_json::json!({
        "toc_pages": toc_pages,
        "entries": entries,
    });
    println!("{json}");
    Ok(())
}
