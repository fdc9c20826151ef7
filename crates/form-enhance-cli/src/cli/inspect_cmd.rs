//! `form-enhance inspect <file>` — show what the enhancer binds on a page.

use crate::cli::{load_page, output};
use anyhow::Result;
use form_enhance::{Markers, PageReport};
use std::path::Path;

/// Run the inspect command.
pub fn run(path: &Path, markers: &Markers) -> Result<PageReport> {
    let page = load_page(path, markers)?;
    let report = PageReport::capture(&page, markers);

    if output::is_json() {
        output::print_json(&serde_json::to_value(&report)?);
    } else if !output::is_quiet() {
        let s = output::Styled::new();
        output::print_header(&s);
        output::print_report(&s, &report);
    }

    Ok(report)
}
