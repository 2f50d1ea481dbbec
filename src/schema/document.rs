//! Content documents as exported from the CMS dataset.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::route::{Locale, RouteParams};

/// Id prefix the CMS gives unpublished drafts.
const DRAFT_PREFIX: &str = "drafts.";

/// The routing-relevant slice of a CMS document.
///
/// ```json
/// { "_id": "a1", "_type": "newsArticle", "slug": "hello", "locale": "no",
///   "translationOf": "b2", "_updatedAt": "2025-01-01T10:00:00Z" }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(rename = "_type")]
    pub kind: String,
    #[serde(default)]
    pub slug: Option<String>,
    /// `None` for types that are not localized.
    #[serde(default)]
    pub locale: Option<Locale>,
    /// Id of the document this one translates, shared by a translation group.
    #[serde(default)]
    pub translation_of: Option<String>,
    #[serde(default, rename = "_updatedAt")]
    pub updated_at: Option<String>,
    /// Extra route parameters beyond `slug`.
    #[serde(default, skip_serializing_if = "RouteParams::is_empty")]
    pub params: RouteParams,
}

impl Document {
    pub fn new(id: &str, kind: &str, slug: Option<&str>, locale: Option<Locale>) -> Self {
        Self {
            id: id.to_string(),
            kind: kind.to_string(),
            slug: slug.map(str::to_string),
            locale,
            translation_of: None,
            updated_at: None,
            params: RouteParams::new(),
        }
    }

    #[inline]
    pub fn is_draft(&self) -> bool {
        self.id.starts_with(DRAFT_PREFIX)
    }

    /// Id shared by every translation of this document.
    #[inline]
    pub fn translation_group(&self) -> &str {
        self.translation_of.as_deref().unwrap_or(&self.id)
    }

    /// Route parameters: `params` plus `slug` when present.
    pub fn route_params(&self) -> RouteParams {
        let mut params = self.params.clone();
        if let Some(slug) = &self.slug {
            params.insert("slug".to_string(), slug.clone());
        }
        params
    }

    /// Date part of `_updatedAt`, as used by sitemaps.
    pub fn lastmod(&self) -> Option<&str> {
        self.updated_at
            .as_deref()
            .map(|ts| ts.split_once('T').map_or(ts, |(date, _)| date))
    }

    /// Parse an export: a JSON array, or newline-delimited JSON (one document
    /// per line, the CMS export format).
    pub fn parse_export(content: &str) -> Result<Vec<Self>> {
        let trimmed = content.trim_start();
        if trimmed.starts_with('[') {
            return serde_json::from_str(trimmed).context("invalid document array");
        }

        trimmed
            .lines()
            .enumerate()
            .filter(|(_, line)| !line.trim().is_empty())
            .map(|(idx, line)| {
                serde_json::from_str(line)
                    .with_context(|| format!("invalid document on line {}", idx + 1))
            })
            .collect()
    }

    pub fn load_export(path: &Path) -> Result<Vec<Self>> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read documents from {}", path.display()))?;
        Self::parse_export(&content).with_context(|| format!("in {}", path.display()))
    }
}
