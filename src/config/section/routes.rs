//! `[routes.<key>]` route template overrides.
//!
//! ```toml
//! [routes.newsArticle]
//! no = "/aktuelt/:slug"
//! en = "/news/:slug"
//! ```
//!
//! A key not in the built-in table adds a route for that content type.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::config::{ConfigDiagnostics, FieldPath};
use crate::route::{Locale, RouteEntry, RouteSpec};

/// Templates for one content type, one per locale.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteOverride {
    #[serde(default)]
    pub no: Option<String>,
    #[serde(default)]
    pub en: Option<String>,
}

impl RouteOverride {
    pub const FIELD: FieldPath = FieldPath::new("routes");

    pub fn spec(&self) -> RouteSpec {
        [(Locale::No, &self.no), (Locale::En, &self.en)]
            .into_iter()
            .filter_map(|(locale, raw)| Some((locale, raw.clone()?)))
            .collect()
    }

    /// Check every override builds a valid [`RouteEntry`].
    pub fn validate_all(routes: &BTreeMap<String, Self>, diag: &mut ConfigDiagnostics) {
        for (kind, route) in routes {
            if let Err(e) = RouteEntry::new(kind, &route.spec()) {
                diag.report(Self::FIELD, format!("[routes.{kind}]: {e}"))
                    .hint("set `no` and `en` to `/`-rooted templates with the same `:params`");
            }
        }
    }
}
