//! Sitemap generation.
//!
//! One `<url>` per published document per locale it is reachable in.
//! Translations of the same document link to each other with hreflang
//! alternates.
//!
//! ```xml
//! <?xml version="1.0" encoding="UTF-8"?>
//! <urlset xmlns="http://www.sitemaps.org/schemas/sitemap/0.9"
//!         xmlns:xhtml="http://www.w3.org/1999/xhtml">
//!   <url>
//!     <loc>https://byra.no/tjenester/merkevare</loc>
//!     <lastmod>2025-01-01</lastmod>
//!     <xhtml:link rel="alternate" hreflang="no" href="https://byra.no/tjenester/merkevare"/>
//!     <xhtml:link rel="alternate" hreflang="en" href="https://byra.no/en/services/branding"/>
//!   </url>
//! </urlset>
//! ```

use rayon::prelude::*;
use rustc_hash::FxHashMap;
use std::borrow::Cow;

use crate::route::{Locale, Router};
use crate::schema::Document;
use crate::utils::encode_path;

const SITEMAP_NS: &str = "http://www.sitemaps.org/schemas/sitemap/0.9";
const XHTML_NS: &str = "http://www.w3.org/1999/xhtml";

#[derive(Debug, Default)]
pub struct Sitemap {
    urls: Vec<UrlEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlEntry {
    pub loc: String,
    pub lastmod: Option<String>,
    /// `(hreflang, absolute URL)`, empty when the page has no translations.
    pub alternates: Vec<(Locale, String)>,
}

impl Sitemap {
    /// Collect entries for every published, linkable document.
    ///
    /// Documents that fail to route are skipped; `check` reports them.
    pub fn build(router: &Router, base_url: &str, documents: &[Document]) -> Self {
        let base_url = base_url.trim_end_matches('/');
        let published: Vec<&Document> = documents
            .iter()
            .filter(|doc| !doc.is_draft() && router.linkable_types().contains(&doc.kind))
            .collect();

        let mut groups: FxHashMap<&str, Vec<&Document>> = FxHashMap::default();
        for doc in &published {
            groups.entry(doc.translation_group()).or_default().push(doc);
        }

        let absolute = |path: &str| format!("{base_url}{}", encode_path(path));

        let mut urls: Vec<UrlEntry> = published
            .par_iter()
            .flat_map_iter(|doc| {
                let alternates: Vec<(Locale, String)> = groups
                    .get(doc.translation_group())
                    .map(|group| router.alternates(group.iter().copied()))
                    .unwrap_or_default()
                    .into_iter()
                    .map(|(locale, path)| (locale, absolute(&path)))
                    .collect();
                let alternates = if alternates.len() > 1 { alternates } else { Vec::new() };

                router
                    .document_paths(doc)
                    .into_iter()
                    .filter_map(|(_, path)| path.ok())
                    .map(move |path| UrlEntry {
                        loc: absolute(&path),
                        lastmod: doc.lastmod().map(str::to_string),
                        alternates: alternates.clone(),
                    })
                    .collect::<Vec<_>>()
            })
            .collect();

        urls.sort_by(|a, b| a.loc.cmp(&b.loc));
        urls.dedup_by(|a, b| a.loc == b.loc);
        Self { urls }
    }

    pub fn len(&self) -> usize {
        self.urls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.urls.is_empty()
    }

    pub fn urls(&self) -> &[UrlEntry] {
        &self.urls
    }

    pub fn into_xml(self) -> String {
        let mut xml = String::with_capacity(4096);

        xml.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
        xml.push_str(&format!(
            "<urlset xmlns=\"{SITEMAP_NS}\" xmlns:xhtml=\"{XHTML_NS}\">\n"
        ));

        for entry in self.urls {
            xml.push_str("  <url>\n    <loc>");
            xml.push_str(&escape_xml(&entry.loc));
            xml.push_str("</loc>\n");
            if let Some(lastmod) = entry.lastmod {
                xml.push_str("    <lastmod>");
                xml.push_str(&escape_xml(&lastmod));
                xml.push_str("</lastmod>\n");
            }
            for (locale, href) in &entry.alternates {
                xml.push_str(&format!(
                    "    <xhtml:link rel=\"alternate\" hreflang=\"{}\" href=\"{}\"/>\n",
                    locale.code(),
                    escape_xml(href)
                ));
            }
            xml.push_str("  </url>\n");
        }

        xml.push_str("</urlset>\n");
        xml
    }
}

/// Escape special XML characters.
fn escape_xml(s: &str) -> Cow<'_, str> {
    if !s.contains(['&', '<', '>', '"', '\'']) {
        return Cow::Borrowed(s);
    }

    Cow::Owned(
        s.replace('&', "&amp;")
            .replace('<', "&lt;")
            .replace('>', "&gt;")
            .replace('"', "&quot;")
            .replace('\'', "&apos;"),
    )
}
