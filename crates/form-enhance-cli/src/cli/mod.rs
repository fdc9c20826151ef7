//! CLI subcommand implementations for the form-enhance binary.

pub mod inspect_cmd;
pub mod output;
pub mod run_cmd;
pub mod steps;

use anyhow::{Context, Result};
use form_enhance::{enhance, Markers, Page};
use std::path::Path;
use tracing::debug;

/// Default markers, or the JSON override at `path`.
pub fn load_markers(path: Option<&Path>) -> Result<Markers> {
    match path {
        Some(path) => Markers::from_file(path)
            .with_context(|| format!("loading markers from {}", path.display())),
        None => Ok(Markers::default()),
    }
}

/// Read an HTML file and enhance it the way a browser would: register the
/// enhancer while the document is loading, then signal that parsing finished.
pub fn load_page(path: &Path, markers: &Markers) -> Result<Page> {
    let html = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let mut page = Page::loading(&html);
    enhance(&mut page, markers.clone())?;
    page.finish_parsing();
    debug!(path = %path.display(), nodes = page.document().len(), "page loaded");
    Ok(page)
}
