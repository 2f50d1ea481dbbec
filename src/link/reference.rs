//! Link reference and resolved link types.

use serde::{Deserialize, Serialize};

use crate::route::{Locale, RouteParams};

/// A link field value as delivered by the content layer.
///
/// Tagged by `linkType`, exactly one variant per value:
///
/// ```json
/// { "linkType": "internal", "type": "newsArticle",
///   "document": { "slug": "hello", "locale": "en" }, "anchor": "team" }
/// { "linkType": "external", "url": "https://example.com" }
/// { "linkType": "download", "url": "https://cdn.example.com/files/a.pdf" }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "linkType", rename_all = "camelCase")]
pub enum LinkReference {
    Internal(InternalLink),
    External { url: String },
    Download(DownloadLink),
}

impl LinkReference {
    pub fn internal(kind: &str, document: Option<DocumentRef>) -> Self {
        Self::Internal(InternalLink {
            kind: kind.to_string(),
            document,
            query: None,
            anchor: None,
        })
    }

    pub fn external(url: &str) -> Self {
        Self::External {
            url: url.to_string(),
        }
    }

    pub fn download(url: Option<&str>) -> Self {
        Self::Download(DownloadLink {
            url: url.map(str::to_string),
            filename: None,
        })
    }

    /// The `linkType` tag of this value.
    pub const fn tag(&self) -> &'static str {
        match self {
            Self::Internal(_) => "internal",
            Self::External { .. } => "external",
            Self::Download(_) => "download",
        }
    }
}

/// Reference to another document of the site.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InternalLink {
    /// Content-type key of the target.
    #[serde(rename = "type")]
    pub kind: String,
    /// Target document, joined at fetch time. `None` when it was deleted or
    /// never published.
    #[serde(default)]
    pub document: Option<DocumentRef>,
    /// Query string without the leading `?`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub query: Option<String>,
    /// Fragment without the leading `#`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub anchor: Option<String>,
}

/// The routing fields of a referenced document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentRef {
    #[serde(default)]
    pub slug: Option<String>,
    /// The document's own locale; `None` for types that are not localized.
    #[serde(default)]
    pub locale: Option<Locale>,
    #[serde(default, skip_serializing_if = "RouteParams::is_empty")]
    pub params: RouteParams,
}

impl DocumentRef {
    pub fn new(slug: Option<&str>, locale: Option<Locale>) -> Self {
        Self {
            slug: slug.map(str::to_string),
            locale,
            params: RouteParams::new(),
        }
    }

    pub fn route_params(&self) -> RouteParams {
        let mut params = self.params.clone();
        if let Some(slug) = &self.slug {
            params.insert("slug".to_string(), slug.clone());
        }
        params
    }
}

/// A downloadable asset. `url` is the CDN URL the asset resolved to.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DownloadLink {
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filename: Option<String>,
}

/// Navigation target handed to the rendering layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedLink {
    pub href: String,
    pub is_external: bool,
}

impl ResolvedLink {
    pub fn internal(href: String) -> Self {
        Self {
            href,
            is_external: false,
        }
    }

    pub fn external(href: String) -> Self {
        Self {
            href,
            is_external: true,
        }
    }
}
