//! Identifier collection
//!
//! Runs the [`TokenScanner`] over each section with the delimiter pairs of
//! that section's grammar and records what it finds.

use crate::section::Sections;
use crate::token::TokenScanner;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Inline DOM event attributes recognised as handler references
pub const EVENT_HANDLER_ATTRIBUTES: &[&str] = &[
    "onabort",
    "onafterprint",
    "onbeforeprint",
    "onbeforeunload",
    "onblur",
    "oncanplay",
    "oncanplaythrough",
    "onchange",
    "onclick",
    "oncontextmenu",
    "oncopy",
    "oncuechange",
    "oncut",
    "ondblclick",
    "ondrag",
    "ondragend",
    "ondragenter",
    "ondragleave",
    "ondragover",
    "ondragstart",
    "ondrop",
    "ondurationchange",
    "onemptied",
    "onended",
    "onerror",
    "onfocus",
    "onhashchange",
    "oninput",
    "oninvalid",
    "onkeydown",
    "onkeypress",
    "onkeyup",
    "onload",
    "onloadeddata",
    "onloadedmetadata",
    "onloadstart",
    "onmessage",
    "onmousedown",
    "onmousemove",
    "onmouseout",
    "onmouseover",
    "onmouseup",
    "onmousewheel",
    "onoffline",
    "ononline",
    "onpagehide",
    "onpageshow",
    "onpaste",
    "onpause",
    "onplay",
    "onplaying",
    "onpopstate",
    "onprogress",
    "onratechange",
    "onreset",
    "onresize",
    "onscroll",
    "onsearch",
    "onseeked",
    "onseeking",
    "onselect",
    "onstalled",
    "onstorage",
    "onsubmit",
    "onsuspend",
    "ontimeupdate",
    "ontoggle",
    "onunload",
    "onvolumechange",
    "onwaiting",
    "onwheel",
];

/// Case-sensitive set of identifiers that remembers first-occurrence order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<String>", into = "Vec<String>")]
pub struct IdentifierSet {
    items: Vec<String>,
    seen: HashSet<String>,
}

impl IdentifierSet {
    /// Insert an identifier, returning `false` if it was already present
    pub fn insert(&mut self, identifier: &str) -> bool {
        if self.seen.contains(identifier) {
            return false;
        }
        self.seen.insert(identifier.to_string());
        self.items.push(identifier.to_string());
        true
    }

    /// Check membership
    #[must_use]
    pub fn contains(&self, identifier: &str) -> bool {
        self.seen.contains(identifier)
    }

    /// Iterate in first-occurrence order
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.items.iter().map(String::as_str)
    }

    /// Identifiers in `self` that `other` does not contain, in scan order
    pub fn difference<'a>(&'a self, other: &'a IdentifierSet) -> impl Iterator<Item = &'a str> {
        self.iter().filter(move |id| !other.contains(id))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<S: AsRef<str>> FromIterator<S> for IdentifierSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut set = IdentifierSet::default();
        for id in iter {
            set.insert(id.as_ref());
        }
        set
    }
}

impl From<Vec<String>> for IdentifierSet {
    fn from(items: Vec<String>) -> Self {
        items.into_iter().collect()
    }
}

impl From<IdentifierSet> for Vec<String> {
    fn from(set: IdentifierSet) -> Self {
        set.items
    }
}

/// Identifiers found in the template section
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplateIdentifiers {
    /// Class names from `class` attributes
    pub classes: IdentifierSet,
    /// Element ids from `id` attributes
    pub ids: IdentifierSet,
    /// Functions called from inline event attributes
    pub handlers: IdentifierSet,
}

/// Identifiers declared in the style section
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StyleIdentifiers {
    /// Class selectors
    pub classes: IdentifierSet,
    /// Id selectors
    pub ids: IdentifierSet,
}

/// Identifiers declared in the script section
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScriptIdentifiers {
    /// Function declarations and arrow-function bindings
    pub functions: IdentifierSet,
}

/// All identifiers of one component
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedComponent {
    pub template: TemplateIdentifiers,
    pub style: StyleIdentifiers,
    pub script: ScriptIdentifiers,
}

/// Collect identifiers from every section.
///
/// Absent and malformed sections have empty text and therefore yield empty
/// sets.
#[must_use]
pub fn parse_component(sections: &Sections<'_>) -> ParsedComponent {
    ParsedComponent {
        template: collect_template(sections.template.text),
        style: collect_style(sections.style.text),
        script: collect_script(sections.script.text),
    }
}

/// Collect classes, ids and handler references from template markup
#[must_use]
pub fn collect_template(text: &str) -> TemplateIdentifiers {
    let mut identifiers = TemplateIdentifiers::default();

    for (start, end) in [("class=\"", "\""), ("class='", "'")] {
        for value in TokenScanner::new(start, end).scan(text) {
            // A class attribute may list several classes.
            for class in value.split_ascii_whitespace() {
                identifiers.classes.insert(class);
            }
        }
    }

    TokenScanner::new("id=\"", "\"").collect_into(text, &mut identifiers.ids);
    TokenScanner::new("id='", "'").collect_into(text, &mut identifiers.ids);

    for attribute in EVENT_HANDLER_ATTRIBUTES {
        for quote in ['"', '\''] {
            let start = format!("{attribute}={quote}");
            let end = quote.to_string();
            for value in TokenScanner::new(&start, &end).scan(text) {
                for callee in handler_callees(value) {
                    identifiers.handlers.insert(callee);
                }
            }
        }
    }

    tracing::trace!(
        classes = identifiers.classes.len(),
        ids = identifiers.ids.len(),
        handlers = identifiers.handlers.len(),
        "collected template identifiers"
    );
    identifiers
}

/// Collect class and id selectors from style rules
#[must_use]
pub fn collect_style(text: &str) -> StyleIdentifiers {
    let mut identifiers = StyleIdentifiers::default();
    TokenScanner::new(".", "{").collect_into(text, &mut identifiers.classes);
    TokenScanner::new("#", "{").collect_into(text, &mut identifiers.ids);

    tracing::trace!(
        classes = identifiers.classes.len(),
        ids = identifiers.ids.len(),
        "collected style identifiers"
    );
    identifiers
}

/// Collect declared function names from script code
#[must_use]
pub fn collect_script(text: &str) -> ScriptIdentifiers {
    let mut identifiers = ScriptIdentifiers::default();

    for signature in TokenScanner::new("function ", "{").scan(text) {
        if let Some(name) = declared_function_name(signature) {
            identifiers.functions.insert(name);
        }
    }
    for name in arrow_bindings(text) {
        identifiers.functions.insert(name);
    }

    tracing::trace!(
        functions = identifiers.functions.len(),
        "collected script identifiers"
    );
    identifiers
}

/// Name from a `function name(args)` signature; `None` when anonymous
fn declared_function_name(signature: &str) -> Option<&str> {
    let head = signature.split('(').next().unwrap_or_default();
    let name = head.trim_start_matches('*').trim();
    is_identifier(name).then_some(name)
}

/// Names bound to zero-argument arrow functions: `const name = () => {`
fn arrow_bindings(text: &str) -> impl Iterator<Item = &str> {
    text.match_indices("() =>").filter_map(move |(at, _)| {
        let before = text[..at].trim_end();
        let before = before.strip_suffix("async").unwrap_or(before).trim_end();
        let lhs = before.strip_suffix('=')?;
        if lhs.ends_with(['=', '!', '<', '>']) {
            return None;
        }
        let lhs = lhs.trim_end();
        let start = lhs
            .char_indices()
            .rev()
            .take_while(|(_, c)| is_identifier_char(*c))
            .last()
            .map_or(lhs.len(), |(i, _)| i);
        let name = &lhs[start..];
        is_identifier(name).then_some(name)
    })
}

/// Callees of the statements in an inline handler, e.g. `save(event); close()`
fn handler_callees(value: &str) -> impl Iterator<Item = &str> {
    value.split(';').filter_map(|statement| {
        let statement = statement.trim();
        let statement = statement.strip_prefix("return ").unwrap_or(statement);
        let callee = statement.split('(').next().unwrap_or_default().trim();
        is_identifier(callee).then_some(callee)
    })
}

fn is_identifier_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_' || c == '$'
}

fn is_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) if !first.is_numeric() && is_identifier_char(first) => {
            chars.all(is_identifier_char)
        }
        _ => false,
    }
}
