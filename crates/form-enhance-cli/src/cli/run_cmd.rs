//! `form-enhance run <file> --step ...` — replay user actions on an enhanced page.

use crate::cli::steps::{self, Step, StepResult};
use crate::cli::{load_page, output};
use anyhow::Result;
use form_enhance::{Markers, PageReport, SubmitOutcome};
use serde::Serialize;
use std::path::Path;

/// Everything `run` produced, also the `--json` payload.
#[derive(Debug, Serialize)]
pub struct RunOutput {
    pub steps: Vec<StepResult>,
    pub report: PageReport,
    /// Markup of `<body>` after the steps, when requested.
    pub html: Option<String>,
}

/// Run the run command.
pub fn run(path: &Path, markers: &Markers, steps: &[Step], with_html: bool) -> Result<RunOutput> {
    let mut page = load_page(path, markers)?;
    let results = steps::apply_all(&mut page, steps)?;
    let report = PageReport::capture(&page, markers);

    let html = if with_html {
        let doc = page.document();
        doc.find_first(doc.root(), &form_enhance::Matcher::Tag("body".into()))
            .map(|body| doc.outer_html(body))
    } else {
        None
    };

    let out = RunOutput {
        steps: results,
        report,
        html,
    };

    if output::is_json() {
        output::print_json(&serde_json::to_value(&out)?);
    } else {
        if !output::is_quiet() {
            print_text(&out);
        }
        // Markup goes to stdout even when the report is suppressed.
        if let Some(html) = &out.html {
            println!("{html}");
        }
    }

    Ok(out)
}

fn print_text(out: &RunOutput) {
    let s = output::Styled::new();
    output::print_header(&s);

    output::print_section(&s, "Steps");
    if out.steps.is_empty() {
        eprintln!("    {}", s.dim("none"));
    }
    for result in &out.steps {
        match result.submit {
            Some(SubmitOutcome::Submitted) => {
                output::print_check(s.ok_sym(), &result.step, &s.green("submitted"))
            }
            Some(SubmitOutcome::Blocked) => {
                output::print_check(s.fail_sym(), &result.step, &s.red("blocked"))
            }
            None => output::print_check(s.ok_sym(), &result.step, ""),
        }
    }
    eprintln!();

    output::print_report(&s, &out.report);
}
