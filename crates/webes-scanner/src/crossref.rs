//! Cross-reference analysis and diagnostic types

use crate::identifiers::{IdentifierSet, ParsedComponent};
use crate::types::SectionKind;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};

/// Diagnostic severity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Warning,
}

/// What a diagnostic reports
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DiagnosticKind {
    /// Class selector in style never used by the template
    UnusedStyleClass,
    /// Id selector in style never used by the template
    UnusedStyleId,
    /// Script function never referenced by a template event handler
    UnusedScriptFunction,
    /// Template class never declared in style
    UnusedTemplateClass,
    /// Template id never declared in style
    UnusedTemplateId,
    /// Template event handler calling a function the script never declares
    UnusedTemplateFunction,
    /// Opening section tag without a closing tag
    MalformedSection,
    /// Component file could not be read
    FileRead,
    /// Entry in the components directory that cannot be a component
    UnsupportedEntry,
}

impl DiagnosticKind {
    /// Severity attached to this kind
    #[must_use]
    pub const fn severity(self) -> Severity {
        match self {
            DiagnosticKind::FileRead => Severity::Error,
            _ => Severity::Warning,
        }
    }

    /// Stable kebab-case code, as used in JSON output
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            DiagnosticKind::UnusedStyleClass => "unused-style-class",
            DiagnosticKind::UnusedStyleId => "unused-style-id",
            DiagnosticKind::UnusedScriptFunction => "unused-script-function",
            DiagnosticKind::UnusedTemplateClass => "unused-template-class",
            DiagnosticKind::UnusedTemplateId => "unused-template-id",
            DiagnosticKind::UnusedTemplateFunction => "unused-template-function",
            DiagnosticKind::MalformedSection => "malformed-section",
            DiagnosticKind::FileRead => "file-read",
            DiagnosticKind::UnsupportedEntry => "unsupported-entry",
        }
    }
}

impl fmt::Display for DiagnosticKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// A single finding tied to a path
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    /// What was found
    pub kind: DiagnosticKind,
    /// Severity level
    pub severity: Severity,
    /// Component (or directory entry) the finding belongs to
    pub path: PathBuf,
    /// Identifier involved, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub identifier: Option<String>,
    /// Human-readable message
    pub message: String,
}

impl Diagnostic {
    /// Diagnostic for one of the six cross-reference comparisons
    #[must_use]
    pub fn unused(kind: DiagnosticKind, path: &Path, identifier: &str) -> Self {
        let message = match kind {
            DiagnosticKind::UnusedStyleClass => {
                format!("class `.{identifier}` is declared in <style> but never used in <template>")
            }
            DiagnosticKind::UnusedStyleId => {
                format!("id `#{identifier}` is declared in <style> but never used in <template>")
            }
            DiagnosticKind::UnusedScriptFunction => format!(
                "function `{identifier}` is declared in <script> but no <template> event handler calls it"
            ),
            DiagnosticKind::UnusedTemplateClass => {
                format!("class `{identifier}` is used in <template> but never declared in <style>")
            }
            DiagnosticKind::UnusedTemplateId => {
                format!("id `{identifier}` is used in <template> but never declared in <style>")
            }
            DiagnosticKind::UnusedTemplateFunction => format!(
                "handler `{identifier}` is called from <template> but never declared in <script>"
            ),
            other => format!("{other}: {identifier}"),
        };

        Self {
            kind,
            severity: kind.severity(),
            path: path.to_path_buf(),
            identifier: Some(identifier.to_string()),
            message,
        }
    }

    /// An opening section tag with no closing tag
    #[must_use]
    pub fn malformed_section(path: &Path, kind: SectionKind) -> Self {
        Self {
            kind: DiagnosticKind::MalformedSection,
            severity: DiagnosticKind::MalformedSection.severity(),
            path: path.to_path_buf(),
            identifier: Some(kind.tag().to_string()),
            message: format!(
                "{} has no matching {}; section was not analysed",
                kind.open_tag(),
                kind.close_tag()
            ),
        }
    }

    /// A component file that could not be read
    #[must_use]
    pub fn file_read(path: &Path, error: &std::io::Error) -> Self {
        Self {
            kind: DiagnosticKind::FileRead,
            severity: DiagnosticKind::FileRead.severity(),
            path: path.to_path_buf(),
            identifier: None,
            message: format!("failed to read component: {error}"),
        }
    }

    /// A nested directory inside the components directory
    #[must_use]
    pub fn nested_directory(path: &Path) -> Self {
        Self {
            kind: DiagnosticKind::UnsupportedEntry,
            severity: DiagnosticKind::UnsupportedEntry.severity(),
            path: path.to_path_buf(),
            identifier: None,
            message: "nested component directories are not supported; skipped".to_string(),
        }
    }
}

/// Run the six cross-reference comparisons for one component.
///
/// Every comparison reports the identifiers of its first set that are
/// missing from the second, in scan order. Comparisons run in a fixed order
/// and are never deduplicated against each other.
#[must_use]
pub fn cross_reference(path: &Path, parsed: &ParsedComponent) -> Vec<Diagnostic> {
    let template = &parsed.template;
    let style = &parsed.style;
    let script = &parsed.script;

    let comparisons: [(DiagnosticKind, &IdentifierSet, &IdentifierSet); 6] = [
        (DiagnosticKind::UnusedStyleClass, &style.classes, &template.classes),
        (DiagnosticKind::UnusedStyleId, &style.ids, &template.ids),
        (DiagnosticKind::UnusedScriptFunction, &script.functions, &template.handlers),
        (DiagnosticKind::UnusedTemplateClass, &template.classes, &style.classes),
        (DiagnosticKind::UnusedTemplateId, &template.ids, &style.ids),
        (DiagnosticKind::UnusedTemplateFunction, &template.handlers, &script.functions),
    ];

    comparisons
        .into_iter()
        .flat_map(|(kind, declared, counterpart)| {
            declared
                .difference(counterpart)
                .map(move |identifier| Diagnostic::unused(kind, path, identifier))
        })
        .collect()
}
