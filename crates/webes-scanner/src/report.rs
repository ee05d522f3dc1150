//! Report types for validation results

use crate::crossref::{Diagnostic, Severity};
use crate::identifiers::ParsedComponent;
use crate::types::SectionState;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Complete result of validating a components directory
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationReport {
    /// Project root
    pub root: PathBuf,
    /// Components directory that was scanned
    pub components_dir: PathBuf,
    /// Components that were read and analysed, sorted by path
    pub components: Vec<ComponentReport>,
    /// All findings, sorted by path
    pub diagnostics: Vec<Diagnostic>,
    /// When the validation ran
    pub validated_at: DateTime<Utc>,
}

/// Analysis result for one component
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComponentReport {
    /// Path to the component file
    pub path: PathBuf,
    /// How each section was found
    pub sections: SectionStates,
    /// Identifiers collected from the sections
    pub identifiers: ParsedComponent,
}

/// Extraction outcome per section kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionStates {
    pub template: SectionState,
    pub style: SectionState,
    pub script: SectionState,
}

impl ValidationReport {
    /// Number of error-severity diagnostics
    #[must_use]
    pub fn error_count(&self) -> usize {
        self.count(Severity::Error)
    }

    /// Number of warning-severity diagnostics
    #[must_use]
    pub fn warning_count(&self) -> usize {
        self.count(Severity::Warning)
    }

    /// Check if anything was reported
    #[must_use]
    pub fn has_findings(&self) -> bool {
        !self.diagnostics.is_empty()
    }

    /// Diagnostics belonging to one path, in report order
    pub fn diagnostics_for<'a>(&'a self, path: &'a Path) -> impl Iterator<Item = &'a Diagnostic> {
        self.diagnostics.iter().filter(move |d| d.path == path)
    }

    fn count(&self, severity: Severity) -> usize {
        self.diagnostics
            .iter()
            .filter(|d| d.severity == severity)
            .count()
    }
}
