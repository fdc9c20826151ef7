//! Shared CLI output formatting with colors, symbols, and structured display.

use form_enhance::report::{FieldReport, IconState, ToggleReport};
use form_enhance::toggle::Mode;
use form_enhance::validate::FieldState;
use form_enhance::PageReport;
use std::io::IsTerminal;

/// Check if color output is enabled.
pub fn color_enabled() -> bool {
    // Respect NO_COLOR env (https://no-color.org/)
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }
    if std::env::var("FORM_ENHANCE_NO_COLOR").is_ok() {
        return false;
    }
    std::io::stderr().is_terminal()
}

// ANSI color codes
const GREEN: &str = "\x1b[32m";
const RED: &str = "\x1b[31m";
const YELLOW: &str = "\x1b[33m";
const DIM: &str = "\x1b[2m";
const BOLD: &str = "\x1b[1m";
const RESET: &str = "\x1b[0m";

/// Colored string builder.
pub struct Styled {
    use_color: bool,
}

impl Default for Styled {
    fn default() -> Self {
        Self::new()
    }
}

impl Styled {
    pub fn new() -> Self {
        Self {
            use_color: color_enabled(),
        }
    }

    /// Green checkmark symbol.
    pub fn ok_sym(&self) -> &str {
        if self.use_color {
            "\x1b[32m\u{2713}\x1b[0m"
        } else {
            "OK"
        }
    }

    /// Red X symbol.
    pub fn fail_sym(&self) -> &str {
        if self.use_color {
            "\x1b[31m\u{2717}\x1b[0m"
        } else {
            "!!"
        }
    }

    /// Yellow warning symbol.
    pub fn warn_sym(&self) -> &str {
        if self.use_color {
            "\x1b[33m\u{26a0}\x1b[0m"
        } else {
            "??"
        }
    }

    pub fn green(&self, s: &str) -> String {
        self.paint(GREEN, s)
    }

    pub fn red(&self, s: &str) -> String {
        self.paint(RED, s)
    }

    pub fn yellow(&self, s: &str) -> String {
        self.paint(YELLOW, s)
    }

    pub fn dim(&self, s: &str) -> String {
        self.paint(DIM, s)
    }

    pub fn bold(&self, s: &str) -> String {
        self.paint(BOLD, s)
    }

    fn paint(&self, code: &str, s: &str) -> String {
        if self.use_color {
            format!("{code}{s}{RESET}")
        } else {
            s.to_string()
        }
    }
}

/// Print a branded header for CLI output.
pub fn print_header(s: &Styled) {
    eprintln!(
        "  {} {}",
        s.bold("form-enhance"),
        s.dim(&format!("v{}", env!("CARGO_PKG_VERSION")))
    );
    eprintln!();
}

/// Print a section header (e.g., "Bindings", "Toggles").
pub fn print_section(s: &Styled, title: &str) {
    eprintln!("  {}", s.bold(title));
}

/// Print a check result line with symbol and label/value.
pub fn print_check(symbol: &str, label: &str, value: &str) {
    eprintln!("    {symbol} {label:<24} {value}");
}

/// Print the bindings, toggles and fields of a captured report.
pub fn print_report(s: &Styled, report: &PageReport) {
    print_section(s, "Bindings");
    match &report.bindings {
        Some(b) => {
            print_check(
                s.ok_sym(),
                "toggle pairs",
                &format!("{} bound, {} skipped", b.toggle_pairs, b.skipped_wrappers),
            );
            print_check(
                s.ok_sym(),
                "validated forms",
                &format!("{} ({} required fields)", b.forms, b.blur_fields),
            );
        }
        None => print_check(s.warn_sym(), "enhancer", "not installed"),
    }
    eprintln!();

    print_section(s, "Toggles");
    if report.toggles.is_empty() {
        eprintln!("    {}", s.dim("none"));
    }
    for toggle in &report.toggles {
        print_toggle(s, toggle);
    }
    eprintln!();

    print_section(s, "Required fields");
    if report.fields.is_empty() {
        eprintln!("    {}", s.dim("none"));
    }
    for field in &report.fields {
        print_field(s, field);
    }
}

fn print_toggle(s: &Styled, toggle: &ToggleReport) {
    let (Some(input), Some(mode)) = (&toggle.input, toggle.mode) else {
        print_check(s.warn_sym(), &toggle.wrapper, &s.dim("incomplete, skipped"));
        return;
    };
    let mode = match mode {
        Mode::Hidden => s.green("hidden"),
        Mode::Visible => s.yellow("visible"),
    };
    let icon = match toggle.icon {
        Some(IconState::Open) => "icon open",
        Some(IconState::Slashed) => "icon slashed",
        Some(IconState::Unmarked) => "icon unmarked",
        None => "no icon",
    };
    let label = toggle.label.as_deref().unwrap_or("-");
    print_check(s.ok_sym(), input, &format!("{mode}  \"{label}\"  {}", s.dim(icon)));
}

fn print_field(s: &Styled, field: &FieldReport) {
    let group = field.group.as_deref().unwrap_or("no group");
    match field.state {
        Some(FieldState::Valid) => print_check(
            s.ok_sym(),
            &field.field,
            &format!("{}  {}", s.green("valid"), s.dim(group)),
        ),
        Some(FieldState::Invalid) => print_check(
            s.fail_sym(),
            &field.field,
            &format!("{}  {}", s.red("invalid"), s.dim(group)),
        ),
        None => print_check(s.warn_sym(), &field.field, &s.dim(group)),
    }
}

/// Check if --quiet mode is active.
pub fn is_quiet() -> bool {
    std::env::var("FORM_ENHANCE_QUIET").is_ok()
}

/// Check if --json mode is active.
pub fn is_json() -> bool {
    std::env::var("FORM_ENHANCE_JSON").is_ok()
}

/// Print JSON output to stdout.
pub fn print_json(value: &serde_json::Value) {
    if let Ok(s) = serde_json::to_string_pretty(value) {
        println!("{s}");
    }
}
