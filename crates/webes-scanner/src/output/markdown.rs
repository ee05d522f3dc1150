//! Markdown output formatter

use crate::report::ValidationReport;
use crate::types::SectionState;

/// Convert a validation report to a Markdown document
#[must_use]
pub fn to_markdown(report: &ValidationReport) -> String {
    let mut output = String::new();

    output.push_str("# webes Validation Report\n\n");
    output.push_str(&format!(
        "**Validated at:** {}\n\n",
        report.validated_at.format("%Y-%m-%d %H:%M:%S UTC")
    ));
    output.push_str(&format!(
        "- **Components directory:** {}\n",
        report.components_dir.display()
    ));
    output.push_str(&format!("- **Components:** {}\n", report.components.len()));
    output.push_str(&format!("- **Errors:** {}\n", report.error_count()));
    output.push_str(&format!("- **Warnings:** {}\n\n", report.warning_count()));

    // Components
    output.push_str("## Components\n\n");
    if report.components.is_empty() {
        output.push_str("_No components found_\n\n");
    } else {
        output.push_str("| Component | Template | Style | Script | Findings |\n");
        output.push_str("|---|---|---|---|---|\n");
        for component in &report.components {
            output.push_str(&format!(
                "| {} | {} | {} | {} | {} |\n",
                component.path.display(),
                state_label(component.sections.template),
                state_label(component.sections.style),
                state_label(component.sections.script),
                report.diagnostics_for(&component.path).count()
            ));
        }
        output.push('\n');
    }

    // Findings
    output.push_str("## Findings\n\n");
    if report.has_findings() {
        let mut current = None;
        for diagnostic in &report.diagnostics {
            if current != Some(&diagnostic.path) {
                if current.is_some() {
                    output.push('\n');
                }
                output.push_str(&format!("### {}\n\n", diagnostic.path.display()));
                current = Some(&diagnostic.path);
            }
            output.push_str(&format!(
                "- **{}** ({:?}): {}\n",
                diagnostic.kind, diagnostic.severity, diagnostic.message
            ));
        }
        output.push('\n');
    } else {
        output.push_str("_No findings_\n\n");
    }

    output
}

fn state_label(state: SectionState) -> &'static str {
    match state {
        SectionState::Present => "yes",
        SectionState::Absent => "-",
        SectionState::Malformed => "malformed",
    }
}
