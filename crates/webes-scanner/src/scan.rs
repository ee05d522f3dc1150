//! Main validator implementation

use crate::config::{load_config, WebesConfig};
use crate::crossref::{cross_reference, Diagnostic};
use crate::error::{ScanError, ScanResult};
use crate::identifiers::parse_component;
use crate::report::{ComponentReport, SectionStates, ValidationReport};
use crate::section::extract_sections;
use crate::types::Component;
use chrono::Utc;
use rayon::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// The main validator struct
#[derive(Debug, Default)]
pub struct Validator {
    /// Configuration to use instead of the project's `webes.config.json`
    pub config: Option<WebesConfig>,
}

/// Result of running the pipeline over one component
#[derive(Debug, Clone)]
pub struct ComponentAnalysis {
    /// Sections and identifiers found
    pub report: ComponentReport,
    /// Malformed-section and cross-reference findings, in emission order
    pub diagnostics: Vec<Diagnostic>,
}

impl Validator {
    /// Create a new validator
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Use an explicit configuration
    #[must_use]
    pub fn with_config(mut self, config: WebesConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Validate the components directory under a project root
    ///
    /// # Errors
    /// Returns an error if the root is not a directory or the components
    /// directory cannot be listed
    pub fn validate_project(&self, root: &Path) -> ScanResult<ValidationReport> {
        if !root.exists() {
            return Err(ScanError::InvalidPath(format!(
                "Project root does not exist: {}",
                root.display()
            )));
        }

        if !root.is_dir() {
            return Err(ScanError::InvalidPath(format!(
                "Project root is not a directory: {}",
                root.display()
            )));
        }

        let config = self.config.clone().unwrap_or_else(|| load_config(root));
        let components_dir = config.components_path(root);
        self.validate_directory(root, &components_dir, &config)
    }

    /// Validate every component directly inside `components_dir`, reporting
    /// against the project `root`
    ///
    /// # Errors
    /// Returns an error if the directory cannot be listed
    pub fn validate_directory(
        &self,
        root: &Path,
        components_dir: &Path,
        config: &WebesConfig,
    ) -> ScanResult<ValidationReport> {
        if components_dir.exists() && !components_dir.is_dir() {
            return Err(ScanError::InvalidPath(format!(
                "Components path is not a directory: {}",
                components_dir.display()
            )));
        }

        let mut groups: Vec<(PathBuf, Vec<Diagnostic>)> = Vec::new();
        let mut candidates = Vec::new();

        for entry in WalkDir::new(components_dir)
            .min_depth(1)
            .max_depth(1)
            .sort_by_file_name()
        {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) if e.depth() == 0 => {
                    return Err(ScanError::DirectoryRead {
                        path: components_dir.to_path_buf(),
                        source: e,
                    });
                }
                Err(e) => {
                    let path = e.path().map(Path::to_path_buf).unwrap_or_default();
                    tracing::warn!("Failed to inspect entry {path:?}: {e}");
                    let error = std::io::Error::other(e.to_string());
                    groups.push((path.clone(), vec![Diagnostic::file_read(&path, &error)]));
                    continue;
                }
            };

            let path = entry.path();
            if path.is_dir() {
                tracing::warn!("Skipping nested directory {path:?}");
                groups.push((path.to_path_buf(), vec![Diagnostic::nested_directory(path)]));
            } else if path.is_file() && config.is_component(path) {
                candidates.push(path.to_path_buf());
            } else {
                tracing::trace!("Ignoring non-component entry {path:?}");
            }
        }

        tracing::info!(
            "Validating {} components in {}",
            candidates.len(),
            components_dir.display()
        );

        let outcomes: Vec<(PathBuf, Option<ComponentReport>, Vec<Diagnostic>)> = candidates
            .par_iter()
            .map(|path| match load_component(path) {
                Ok(component) => {
                    let analysis = analyze_component(&component.path, &component.content);
                    (component.path, Some(analysis.report), analysis.diagnostics)
                }
                Err(e) => {
                    tracing::warn!("Failed to read component {path:?}: {e}");
                    (path.clone(), None, vec![Diagnostic::file_read(path, &e)])
                }
            })
            .collect();

        let mut components = Vec::new();
        for (path, component, diagnostics) in outcomes {
            components.extend(component);
            groups.push((path, diagnostics));
        }

        // Completion order of the parallel pass is irrelevant: output is
        // ordered by path, keeping each component's emission order.
        components.sort_by(|a, b| a.path.cmp(&b.path));
        groups.sort_by(|a, b| a.0.cmp(&b.0));
        let diagnostics = groups.into_iter().flat_map(|(_, group)| group).collect();

        Ok(ValidationReport {
            root: root.to_path_buf(),
            components_dir: components_dir.to_path_buf(),
            components,
            diagnostics,
            validated_at: Utc::now(),
        })
    }
}

/// Read a component file at its exact length.
///
/// Bytes that are not valid UTF-8 are replaced rather than rejected, so an
/// encoding slip in a comment does not hide the rest of the component.
///
/// # Errors
/// Returns the underlying IO error if the file cannot be read
pub fn load_component(path: &Path) -> std::io::Result<Component> {
    let bytes = fs::read(path)?;
    let content = match String::from_utf8(bytes) {
        Ok(content) => content,
        Err(e) => {
            tracing::warn!("Component {path:?} is not valid UTF-8, decoding lossily");
            String::from_utf8_lossy(e.as_bytes()).into_owned()
        }
    };

    Ok(Component {
        path: path.to_path_buf(),
        content,
    })
}

/// Run the per-component pipeline: sections, identifiers, cross-reference.
///
/// Malformed sections are reported first (template, style, script), then
/// the cross-reference findings.
#[must_use]
pub fn analyze_component(path: &Path, content: &str) -> ComponentAnalysis {
    let sections = extract_sections(content);
    let identifiers = parse_component(&sections);

    let mut diagnostics: Vec<Diagnostic> = sections
        .malformed()
        .into_iter()
        .map(|kind| Diagnostic::malformed_section(path, kind))
        .collect();
    diagnostics.extend(cross_reference(path, &identifiers));

    tracing::debug!(
        "Analysed {path:?}: {} diagnostics",
        diagnostics.len()
    );

    ComponentAnalysis {
        report: ComponentReport {
            path: path.to_path_buf(),
            sections: SectionStates {
                template: sections.template.state,
                style: sections.style.state,
                script: sections.script.state,
            },
            identifiers,
        },
        diagnostics,
    }
}
