//! Section extraction
//!
//! Splits component source into its `template`, `style` and `script`
//! regions. Each kind is located independently, so sections may appear in
//! any order and any of them may be missing.

use crate::types::{Section, SectionKind};

/// The three sections of one component
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sections<'a> {
    pub template: Section<'a>,
    pub style: Section<'a>,
    pub script: Section<'a>,
}

impl<'a> Sections<'a> {
    /// Iterate over the sections in template, style, script order
    pub fn iter(&self) -> impl Iterator<Item = &Section<'a>> {
        [&self.template, &self.style, &self.script].into_iter()
    }

    /// Kinds whose opening tag has no closing tag
    #[must_use]
    pub fn malformed(&self) -> Vec<SectionKind> {
        self.iter().filter(|s| s.is_malformed()).map(|s| s.kind).collect()
    }
}

/// Extract all three sections from component source
#[must_use]
pub fn extract_sections(content: &str) -> Sections<'_> {
    Sections {
        template: extract_section(content, SectionKind::Template),
        style: extract_section(content, SectionKind::Style),
        script: extract_section(content, SectionKind::Script),
    }
}

/// Extract a single section.
///
/// Uses the first opening tag and the first closing tag after it.
#[must_use]
pub fn extract_section(content: &str, kind: SectionKind) -> Section<'_> {
    let open_tag = kind.open_tag();
    let close_tag = kind.close_tag();

    let Some(open) = content.find(&open_tag) else {
        return Section::absent(kind);
    };
    let body = &content[open + open_tag.len()..];

    match body.find(&close_tag) {
        Some(close) => Section::present(kind, &body[..close]),
        None => Section::malformed(kind),
    }
}
