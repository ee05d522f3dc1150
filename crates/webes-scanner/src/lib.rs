//! webes Scanner - single-file component consistency checking
//!
//! This crate reads `.webes` components, splits them into their
//! `template`, `style` and `script` sections, collects the identifiers each
//! section declares or uses, and reports identifiers that have no
//! counterpart in the related section.

#![forbid(unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(
    clippy::missing_errors_doc,
    clippy::must_use_candidate,
    clippy::module_name_repetitions,
    clippy::too_many_lines,
    clippy::items_after_statements,
    clippy::single_match_else,
    clippy::match_same_arms,
    clippy::unnecessary_debug_formatting,
    clippy::needless_pass_by_value,
    clippy::map_unwrap_or,
    clippy::manual_let_else
)]

pub mod config;
pub mod crossref;
pub mod error;
pub mod identifiers;
pub mod output;
pub mod report;
pub mod scan;
pub mod section;
pub mod token;
pub mod types;

pub use config::WebesConfig;
pub use crossref::{Diagnostic, DiagnosticKind, Severity};
pub use error::{ScanError, ScanResult};
pub use identifiers::{IdentifierSet, ParsedComponent};
pub use report::ValidationReport;
pub use scan::Validator;
pub use token::TokenScanner;
