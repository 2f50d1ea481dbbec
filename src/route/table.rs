//! Route table: content-type key -> per-locale path template.

use std::collections::BTreeMap;

use rustc_hash::FxHashMap;

use super::{Locale, PathTemplate, RouteError};

/// Per-locale template sources for one content type, as written in config.
pub type RouteSpec = BTreeMap<Locale, String>;

/// Built-in routes of the agency site: `(kind, no, en)`.
///
/// `[routes.<kind>]` in `wayfinder.toml` overrides or extends these.
pub const BUILTIN_ROUTES: &[(&str, &str, &str)] = &[
    ("frontPage", "/", "/"),
    ("page", "/:slug", "/:slug"),
    ("article", "/artikler/:slug", "/articles/:slug"),
    ("service", "/tjenester/:slug", "/services/:slug"),
    ("newsArticle", "/nyheter/:slug", "/news/:slug"),
    ("event", "/arrangementer/:slug", "/events/:slug"),
    ("ebook", "/e-boker/:slug", "/e-books/:slug"),
    ("seminar", "/seminarer/:slug", "/seminars/:slug"),
    ("caseStudy", "/prosjekter/:slug", "/work/:slug"),
];

/// Templates for one content type, one per supported locale.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteEntry {
    kind: String,
    no: PathTemplate,
    en: PathTemplate,
}

impl RouteEntry {
    /// Build an entry, checking that every locale has a template and that all
    /// templates share one placeholder set.
    pub fn new(kind: &str, spec: &RouteSpec) -> Result<Self, RouteError> {
        let template = |locale: Locale| -> Result<PathTemplate, RouteError> {
            let raw = spec.get(&locale).ok_or_else(|| RouteError::MissingLocaleTemplate {
                kind: kind.to_string(),
                locale: locale.to_string(),
            })?;
            PathTemplate::parse(raw)
        };

        let entry = Self {
            kind: kind.to_string(),
            no: template(Locale::No)?,
            en: template(Locale::En)?,
        };

        if entry.no.placeholder_set() != entry.en.placeholder_set() {
            return Err(RouteError::InconsistentPlaceholders {
                kind: kind.to_string(),
            });
        }
        Ok(entry)
    }

    #[inline]
    pub fn kind(&self) -> &str {
        &self.kind
    }

    #[inline]
    pub const fn template(&self, locale: Locale) -> &PathTemplate {
        match locale {
            Locale::No => &self.no,
            Locale::En => &self.en,
        }
    }

    /// Placeholder names, identical for every locale.
    #[inline]
    pub fn placeholders(&self) -> &[String] {
        self.no.placeholders()
    }
}

/// Immutable map from content-type key to [`RouteEntry`].
#[derive(Debug, Clone, Default)]
pub struct RouteTable {
    entries: FxHashMap<String, RouteEntry>,
}

impl RouteTable {
    /// Table holding only [`BUILTIN_ROUTES`].
    pub fn builtin() -> Result<Self, RouteError> {
        Self::with_overrides(&BTreeMap::new())
    }

    /// Built-in routes with `overrides` replacing or adding entries.
    pub fn with_overrides(overrides: &BTreeMap<String, RouteSpec>) -> Result<Self, RouteError> {
        let builtin = BUILTIN_ROUTES.iter().map(|(kind, no, en)| {
            let spec =
                RouteSpec::from([(Locale::No, no.to_string()), (Locale::En, en.to_string())]);
            (kind.to_string(), spec)
        });
        let mut specs: BTreeMap<String, RouteSpec> = builtin.collect();
        specs.extend(overrides.iter().map(|(k, v)| (k.clone(), v.clone())));
        Self::from_specs(&specs)
    }

    pub fn from_specs(specs: &BTreeMap<String, RouteSpec>) -> Result<Self, RouteError> {
        let entries = specs
            .iter()
            .map(|(kind, spec)| Ok((kind.clone(), RouteEntry::new(kind, spec)?)))
            .collect::<Result<_, RouteError>>()?;
        Ok(Self { entries })
    }

    pub fn lookup(&self, kind: &str) -> Result<&RouteEntry, RouteError> {
        self.entries
            .get(kind)
            .ok_or_else(|| RouteError::UnknownRouteKind {
                kind: kind.to_string(),
            })
    }

    #[inline]
    pub fn contains(&self, kind: &str) -> bool {
        self.entries.contains_key(kind)
    }

    /// Registered keys in sorted order.
    pub fn kinds(&self) -> Vec<&str> {
        let mut kinds: Vec<_> = self.entries.keys().map(String::as_str).collect();
        kinds.sort_unstable();
        kinds
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
