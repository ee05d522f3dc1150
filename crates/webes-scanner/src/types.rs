//! Shared types for the webes scanner

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

/// Kind of a delimited section inside a component
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionKind {
    /// `<template>…</template>` markup
    Template,
    /// `<style>…</style>` rules
    Style,
    /// `<script>…</script>` code
    Script,
}

impl SectionKind {
    /// Tag name used in the component source
    #[must_use]
    pub const fn tag(self) -> &'static str {
        match self {
            SectionKind::Template => "template",
            SectionKind::Style => "style",
            SectionKind::Script => "script",
        }
    }

    /// Opening tag, e.g. `<style>`
    #[must_use]
    pub fn open_tag(self) -> String {
        format!("<{}>", self.tag())
    }

    /// Closing tag, e.g. `</style>`
    #[must_use]
    pub fn close_tag(self) -> String {
        format!("</{}>", self.tag())
    }
}

impl fmt::Display for SectionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// Whether a section was found in the component
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionState {
    /// Opening and closing tags were both found
    Present,
    /// No opening tag
    Absent,
    /// Opening tag without a matching closing tag
    Malformed,
}

/// One delimited region of a component
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section<'a> {
    /// Section kind
    pub kind: SectionKind,
    /// Text between the tags (empty unless present)
    pub text: &'a str,
    /// Extraction outcome
    pub state: SectionState,
}

impl<'a> Section<'a> {
    /// A section whose tags were both found
    #[must_use]
    pub const fn present(kind: SectionKind, text: &'a str) -> Self {
        Self {
            kind,
            text,
            state: SectionState::Present,
        }
    }

    /// A section with no opening tag
    #[must_use]
    pub const fn absent(kind: SectionKind) -> Self {
        Self {
            kind,
            text: "",
            state: SectionState::Absent,
        }
    }

    /// A section with an opening tag but no closing tag
    #[must_use]
    pub const fn malformed(kind: SectionKind) -> Self {
        Self {
            kind,
            text: "",
            state: SectionState::Malformed,
        }
    }

    /// Check if the section was malformed
    #[must_use]
    pub fn is_malformed(&self) -> bool {
        self.state == SectionState::Malformed
    }
}

/// A component file loaded from disk
#[derive(Debug, Clone)]
pub struct Component {
    /// Path to the component file
    pub path: PathBuf,
    /// Full file content
    pub content: String,
}
