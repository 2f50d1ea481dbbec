//! `[site]` section configuration.
//!
//! ```toml
//! [site]
//! url = "https://byra.no"
//! not_found = "/404"
//! ```

use serde::{Deserialize, Serialize};

use crate::config::{ConfigDiagnostics, FieldPath};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteSectionConfig {
    /// Public base URL, required for absolute URLs (sitemap).
    pub url: Option<String>,

    /// Path broken links resolve to, before localization.
    pub not_found: String,
}

impl Default for SiteSectionConfig {
    fn default() -> Self {
        Self {
            url: None,
            not_found: "/404".into(),
        }
    }
}

pub struct SiteFields {
    pub url: FieldPath,
    pub not_found: FieldPath,
}

impl SiteSectionConfig {
    pub const FIELDS: SiteFields = SiteFields {
        url: FieldPath::new("site.url"),
        not_found: FieldPath::new("site.not_found"),
    };

    /// Base URL without trailing slash.
    pub fn base_url(&self) -> Option<&str> {
        self.url.as_deref().map(|url| url.trim_end_matches('/'))
    }

    /// # Checks
    /// - `url` parses, uses http or https, and has a host
    /// - `not_found` is an internal path
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if let Some(raw) = &self.url {
            const EXAMPLE: &str = "url = \"https://byra.no\"";
            match url::Url::parse(raw) {
                Ok(parsed) if !matches!(parsed.scheme(), "http" | "https") => {
                    diag.report(
                        Self::FIELDS.url,
                        format!("`{}:` links are not web pages", parsed.scheme()),
                    )
                    .hint(EXAMPLE);
                }
                Ok(parsed) if !parsed.has_host() => {
                    diag.report(Self::FIELDS.url, format!("`{raw}` has no host"))
                        .hint(EXAMPLE);
                }
                Ok(_) => {}
                Err(e) => {
                    diag.report(Self::FIELDS.url, format!("`{raw}` is not a URL ({e})"))
                        .hint(EXAMPLE);
                }
            }
        }

        if !self.not_found.starts_with('/') || self.not_found.starts_with("//") {
            diag.report(
                Self::FIELDS.not_found,
                format!("`{}` is not an internal path", self.not_found),
            )
            .hint("not_found = \"/404\"");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;

    fn validate(extra: &str) -> ConfigDiagnostics {
        let mut diag = ConfigDiagnostics::new();
        test_parse_config(extra).site.validate(&mut diag);
        diag
    }

    #[test]
    fn test_defaults() {
        let config = test_parse_config("");
        assert_eq!(config.site.url, None);
        assert_eq!(config.site.not_found, "/404");
    }

    #[test]
    fn test_base_url() {
        let config = test_parse_config("[site]\nurl = \"https://byra.no/\"");
        assert_eq!(config.site.base_url(), Some("https://byra.no"));
    }

    #[test]
    fn test_valid() {
        let diag = validate("[site]\nurl = \"https://byra.no\"\nnot_found = \"/ikke-funnet\"");
        assert!(diag.is_empty());
    }

    #[test]
    fn test_invalid_url() {
        assert_eq!(validate("[site]\nurl = \"byra.no\"").len(), 1);
        assert_eq!(validate("[site]\nurl = \"ftp://byra.no\"").len(), 1);

        let diag = validate("[site]\nurl = \"mailto:post@byra.no\"");
        assert!(diag.problems()[0].message.contains("mailto"));
        assert!(diag.problems()[0].hint.is_some());
    }

    #[test]
    fn test_invalid_not_found() {
        let diag = validate("[site]\nnot_found = \"404\"");
        assert_eq!(diag.problems()[0].field, SiteSectionConfig::FIELDS.not_found);
        assert_eq!(validate("[site]\nnot_found = \"//cdn/404\"").len(), 1);
    }
}
