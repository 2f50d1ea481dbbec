//! Output generated from a document export.
//!
//! - **Sitemap**: localized URLs with hreflang alternates (`sitemap.xml`)

pub mod sitemap;

use std::borrow::Cow;

/// Strip indentation and blank lines from XML when enabled.
pub fn minify_xml(content: &str, enabled: bool) -> Cow<'_, str> {
    if enabled {
        Cow::Owned(
            content
                .lines()
                .map(str::trim)
                .filter(|line| !line.is_empty())
                .collect(),
        )
    } else {
        Cow::Borrowed(content)
    }
}
