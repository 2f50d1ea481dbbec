//! `[slug]` section configuration.

use serde::{Deserialize, Serialize};

/// Slug generation mode.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SlugMode {
    /// Transliterate Unicode to ASCII (`blåbær` -> `blabaer`) (default).
    #[default]
    Full,
    /// Keep Unicode letters, only collapse separators.
    Safe,
    /// No modification; preserve original text.
    No,
}

/// Case transformation mode for slugs.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SlugCase {
    #[default]
    Lower,
    Upper,
    /// Capitalize each word.
    Capitalize,
    Preserve,
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SlugSeparator {
    #[default]
    Dash,
    Underscore,
}

impl SlugSeparator {
    pub const fn as_char(&self) -> char {
        match self {
            Self::Dash => '-',
            Self::Underscore => '_',
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SlugConfig {
    pub mode: SlugMode,
    pub separator: SlugSeparator,
    pub case: SlugCase,
    /// Maximum slug length in characters.
    pub max_len: usize,
}

impl Default for SlugConfig {
    fn default() -> Self {
        Self {
            mode: SlugMode::Full,
            separator: SlugSeparator::Dash,
            case: SlugCase::Lower,
            max_len: 96,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;

    #[test]
    fn test_defaults() {
        let config = test_parse_config("");
        assert_eq!(config.slug.mode, SlugMode::Full);
        assert_eq!(config.slug.separator, SlugSeparator::Dash);
        assert_eq!(config.slug.case, SlugCase::Lower);
        assert_eq!(config.slug.max_len, 96);
    }

    #[test]
    fn test_mode_parsing() {
        for (input, expected) in [
            ("full", SlugMode::Full),
            ("safe", SlugMode::Safe),
            ("no", SlugMode::No),
        ] {
            let config = test_parse_config(&format!("[slug]\nmode = \"{input}\""));
            assert_eq!(config.slug.mode, expected, "mode failed for {input}");
        }
    }

    #[test]
    fn test_separator_and_case() {
        let config = test_parse_config(
            "[slug]\nseparator = \"underscore\"\ncase = \"capitalize\"\nmax_len = 40",
        );
        assert_eq!(config.slug.separator.as_char(), '_');
        assert_eq!(config.slug.case, SlugCase::Capitalize);
        assert_eq!(config.slug.max_len, 40);
    }
}
