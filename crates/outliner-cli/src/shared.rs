use std::path::Path;

use outliner::PageContent;

/// Load a JSON page dump: a top-level array of page objects, each with
/// `number`, `fragments`, and `fonts`.
///
/// Prints a diagnostic to stderr and returns an exit code on failure.
pub fn load_pages(file: &Path) -> Result<Vec<PageContent>, i32> {
    let data = std::fs::read_to_string(file).map_err(|e| {
        eprintln!("error: cannot read {}: {e}", file.display());
        1
    })?;
    serde_json::from_str(&data).map_err(|e| {
        eprintln!("error: invalid page dump {}: {e}", file.display());
        1
    })
}
