//! Supported locales and the URL prefix policy.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::RouteError;

/// A locale the site is published in.
///
/// The set is closed: anything else fails to parse with
/// [`RouteError::UnsupportedLocale`].
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    /// Norwegian.
    #[default]
    No,
    /// English.
    En,
}

impl Locale {
    /// Every supported locale.
    pub const ALL: [Self; 2] = [Self::No, Self::En];

    /// Locale code, also used as the URL prefix segment.
    #[inline]
    pub const fn code(self) -> &'static str {
        match self {
            Self::No => "no",
            Self::En => "en",
        }
    }

    /// Match a single path segment against the supported locale codes.
    #[inline]
    pub fn from_segment(segment: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|l| l.code() == segment)
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Locale {
    type Err = RouteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_segment(s.trim()).ok_or_else(|| RouteError::UnsupportedLocale {
            code: s.to_string(),
        })
    }
}

/// Whether the default locale carries a URL prefix.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PrefixStrategy {
    /// `/nyheter/foo` for the default locale, `/en/news/foo` for others (default).
    #[default]
    OmitDefault,
    /// Every locale is prefixed, including the default.
    Always,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse() {
        assert_eq!("no".parse::<Locale>().unwrap(), Locale::No);
        assert_eq!("en".parse::<Locale>().unwrap(), Locale::En);
        assert_eq!(" en ".parse::<Locale>().unwrap(), Locale::En);
    }

    #[test]
    fn test_parse_unsupported() {
        let err = "sv".parse::<Locale>().unwrap_err();
        assert_eq!(err, RouteError::UnsupportedLocale { code: "sv".into() });
        assert!("EN".parse::<Locale>().is_err());
        assert!("".parse::<Locale>().is_err());
    }

    #[test]
    fn test_from_segment() {
        assert_eq!(Locale::from_segment("en"), Some(Locale::En));
        assert_eq!(Locale::from_segment("news"), None);
    }

    #[test]
    fn test_serde() {
        let json = serde_json::to_string(&Locale::En).unwrap();
        assert_eq!(json, r#""en""#);
        let parsed: Locale = serde_json::from_str(r#""no""#).unwrap();
        assert_eq!(parsed, Locale::No);
        assert!(serde_json::from_str::<Locale>(r#""de""#).is_err());

        let strategy: PrefixStrategy = serde_json::from_str(r#""omit-default""#).unwrap();
        assert_eq!(strategy, PrefixStrategy::OmitDefault);
    }
}
