//! Terminal output formatter
//!
//! Errors are prefixed with `(!)` in red, warnings with `(i)` in yellow.

use crate::crossref::Severity;
use crate::report::ValidationReport;

const RED: &str = "\x1b[31m";
const YELLOW: &str = "\x1b[33m";
const GRAY: &str = "\x1b[37m";
const UNDERLINE: &str = "\x1b[4m";
const RESET: &str = "\x1b[0m";

/// Convert a validation report to terminal text
#[must_use]
pub fn to_text(report: &ValidationReport, color: bool) -> String {
    let paint = |code: &str, text: &str| {
        if color {
            format!("{code}{text}{RESET}")
        } else {
            text.to_string()
        }
    };

    let mut output = String::new();
    output.push_str(&header("Validating components"));
    output.push('\n');
    output.push_str(&paint(
        GRAY,
        &format!("(i) {}", report.components_dir.display()),
    ));
    output.push('\n');

    let mut current = None;
    for diagnostic in &report.diagnostics {
        if current != Some(&diagnostic.path) {
            output.push_str(&format!(
                "\n{}\n",
                paint(UNDERLINE, &diagnostic.path.display().to_string())
            ));
            current = Some(&diagnostic.path);
        }
        let (color, marker) = match diagnostic.severity {
            Severity::Error => (RED, "(!)"),
            Severity::Warning => (YELLOW, "(i)"),
        };
        let line = paint(
            color,
            &format!("{marker} {}: {}", diagnostic.kind, diagnostic.message),
        );
        output.push_str("  ");
        output.push_str(&line);
        output.push('\n');
    }

    output.push('\n');
    output.push_str(&summary(report));
    output.push('\n');
    output
}

/// One-line summary, e.g. `2 components: 0 errors, 3 warnings`
#[must_use]
pub fn summary(report: &ValidationReport) -> String {
    let components = report.components.len();
    format!(
        "{} component{}: {} error{}, {} warning{}",
        components,
        plural(components),
        report.error_count(),
        plural(report.error_count()),
        report.warning_count(),
        plural(report.warning_count()),
    )
}

/// `== text ==` section header
#[must_use]
pub fn header(text: &str) -> String {
    format!("== {text} ==")
}

fn plural(count: usize) -> &'static str {
    if count == 1 {
        ""
    } else {
        "s"
    }
}
