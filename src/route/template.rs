//! Path templates with `:name` placeholders.

use std::collections::BTreeSet;
use std::sync::LazyLock;

use regex::Regex;

use super::RouteError;

/// `:` followed by an identifier. The identifier ends at the first character
/// that cannot continue it, so `/:year-:slug` holds two placeholders.
static PLACEHOLDER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r":([A-Za-z_][A-Za-z0-9_]*)").unwrap());

/// A parsed path template such as `/nyheter/:slug`.
///
/// Invariants:
/// - Starts with a single `/`
/// - Contains no query string or fragment
/// - Every `:` introduces a placeholder
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathTemplate {
    raw: String,
    placeholders: Vec<String>,
}

impl PathTemplate {
    pub fn parse(raw: &str) -> Result<Self, RouteError> {
        let invalid = |reason: &str| RouteError::InvalidTemplate {
            template: raw.to_string(),
            reason: reason.to_string(),
        };

        if !raw.starts_with('/') {
            return Err(invalid("must start with `/`"));
        }
        if raw.starts_with("//") {
            return Err(invalid("`//` at the start would make a protocol-relative URL"));
        }
        if raw.contains(['?', '#']) {
            return Err(invalid("must not contain a query string or fragment"));
        }

        let mut placeholders = Vec::new();
        let mut covered = 0;
        for m in PLACEHOLDER.find_iter(raw) {
            if raw[covered..m.start()].contains(':') {
                return Err(invalid("`:` must be followed by a placeholder name"));
            }
            let name = &m.as_str()[1..];
            if !placeholders.iter().any(|p| p == name) {
                placeholders.push(name.to_string());
            }
            covered = m.end();
        }
        if raw[covered..].contains(':') {
            return Err(invalid("`:` must be followed by a placeholder name"));
        }

        Ok(Self {
            raw: raw.to_string(),
            placeholders,
        })
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Placeholder names in order of first appearance.
    #[inline]
    pub fn placeholders(&self) -> &[String] {
        &self.placeholders
    }

    pub fn placeholder_set(&self) -> BTreeSet<&str> {
        self.placeholders.iter().map(String::as_str).collect()
    }

    /// Substitute every placeholder with the value `lookup` returns for it.
    ///
    /// Values are inserted verbatim. On failure the name of the first
    /// placeholder without a value is returned.
    pub fn render<'v>(&self, lookup: impl Fn(&str) -> Option<&'v str>) -> Result<String, String> {
        let mut out = String::with_capacity(self.raw.len() + 16);
        let mut last = 0;
        for m in PLACEHOLDER.find_iter(&self.raw) {
            let name = &m.as_str()[1..];
            let value = lookup(name).ok_or_else(|| name.to_string())?;
            out.push_str(&self.raw[last..m.start()]);
            out.push_str(value);
            last = m.end();
        }
        out.push_str(&self.raw[last..]);
        Ok(out)
    }
}
