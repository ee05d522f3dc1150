//! Delimiter-pair token scanner
//!
//! Every identifier the checker knows about is pulled out of a section by
//! the same primitive: find a literal start delimiter, then the nearest
//! literal end delimiter after it, and take whatever lies between.
//! Matches never nest and never overlap.

use crate::identifiers::IdentifierSet;

/// Extracts the text found between a pair of literal delimiters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TokenScanner<'d> {
    start: &'d str,
    end: &'d str,
}

impl<'d> TokenScanner<'d> {
    /// Create a scanner for the given delimiter pair
    #[must_use]
    pub const fn new(start: &'d str, end: &'d str) -> Self {
        Self { start, end }
    }

    /// Iterate over all trimmed matches in `haystack`, left to right.
    ///
    /// Scanning stops as soon as either delimiter can no longer be found in
    /// the unscanned suffix; an unterminated start delimiter produces no
    /// partial match. Matches that are empty after trimming are skipped.
    #[must_use]
    pub fn scan<'h>(&self, haystack: &'h str) -> Tokens<'d, 'h> {
        Tokens {
            start: self.start,
            end: self.end,
            rest: haystack,
        }
    }

    /// Append every match to `set` in first-occurrence order.
    ///
    /// Returns the number of matches scanned, duplicates included.
    pub fn collect_into(&self, haystack: &str, set: &mut IdentifierSet) -> usize {
        let mut count = 0;
        for token in self.scan(haystack) {
            set.insert(token);
            count += 1;
        }
        count
    }
}

/// Iterator returned by [`TokenScanner::scan`]
#[derive(Debug, Clone)]
pub struct Tokens<'d, 'h> {
    start: &'d str,
    end: &'d str,
    rest: &'h str,
}

impl<'h> Iterator for Tokens<'_, 'h> {
    type Item = &'h str;

    fn next(&mut self) -> Option<&'h str> {
        // An empty delimiter would match everywhere and never advance.
        if self.start.is_empty() || self.end.is_empty() {
            return None;
        }

        loop {
            let Some(open) = self.rest.find(self.start) else {
                self.rest = "";
                return None;
            };
            let body = &self.rest[open + self.start.len()..];

            // The end delimiter is only searched after the start delimiter,
            // so a span can never run backwards.
            let Some(close) = body.find(self.end) else {
                self.rest = "";
                return None;
            };

            let token = body[..close].trim();
            self.rest = &body[close + self.end.len()..];

            if !token.is_empty() {
                return Some(token);
            }
        }
    }
}

impl std::iter::FusedIterator for Tokens<'_, '_> {}
