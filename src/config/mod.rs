//! Site configuration management for `wayfinder.toml`.
//!
//! # Module Structure
//!
//! ```text
//! config/
//! ├── section/       # [site], [i18n], [slug], [routes.<key>]
//! ├── types/         # ConfigError, ConfigDiagnostics, FieldPath
//! ├── util           # config file discovery
//! └── mod.rs         # SiteConfig (this file)
//! ```
//!
//! Every section is optional; an empty file (or no file at all) yields the
//! built-in agency routes with Norwegian as the unprefixed default locale.

pub mod section;
pub mod types;
mod util;

pub use section::{
    I18nConfig, RouteOverride, SiteSectionConfig, SlugCase, SlugConfig, SlugMode, SlugSeparator,
};
pub use types::{ConfigDiagnostic, ConfigDiagnostics, ConfigError, FieldPath};
pub use util::{find_config_file, find_config_file_from};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::{collections::BTreeMap, fs, path::Path};

use crate::route::RouteSpec;
use crate::{debug, log};

/// File name searched for when no `--config` is given.
pub const CONFIG_FILE: &str = "wayfinder.toml";

// ============================================================================
// root configuration
// ============================================================================

/// Root configuration structure representing wayfinder.toml
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SiteConfig {
    #[serde(default)]
    pub site: SiteSectionConfig,

    #[serde(default)]
    pub i18n: I18nConfig,

    #[serde(default)]
    pub slug: SlugConfig,

    #[serde(default)]
    pub routes: BTreeMap<String, RouteOverride>,
}

impl SiteConfig {
    /// Load and validate configuration.
    ///
    /// An explicit path must exist. Without one, `wayfinder.toml` is searched
    /// upward from the working directory and defaults apply when none is found.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current working directory")?;

        let path = match explicit {
            Some(path) => {
                let path = cwd.join(path);
                if !path.is_file() {
                    return Err(ConfigError::Missing(path).into());
                }
                Some(path)
            }
            None => find_config_file(Path::new(CONFIG_FILE)),
        };

        let config = match &path {
            Some(path) => {
                debug!("config"; "using {}", path.display());
                Self::from_path(path)?
            }
            None => {
                debug!("config"; "no {} found, using defaults", CONFIG_FILE);
                Self::default()
            }
        };

        config.validate()?;
        Ok(config)
    }

    /// Load configuration from file path with unknown field detection.
    fn from_path(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let (config, ignored) = Self::parse_with_ignored(&content)
            .with_context(|| format!("failed to parse {}", path.display()))?;

        if !ignored.is_empty() {
            Self::print_unknown_fields_warning(&ignored, path);
        }
        Ok(config)
    }

    /// Parse TOML content, collecting any unknown fields.
    pub fn parse_with_ignored(content: &str) -> Result<(Self, Vec<String>), ConfigError> {
        let mut ignored = Vec::new();
        let deserializer = toml::Deserializer::new(content);
        let config = serde_ignored::deserialize(deserializer, |path: serde_ignored::Path| {
            ignored.push(path.to_string());
        })?;
        Ok((config, ignored))
    }

    fn print_unknown_fields_warning(fields: &[String], path: &Path) {
        let display_path = path
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_else(|| path.to_string_lossy());
        log!("warning"; "unknown fields in {}, ignoring:", display_path);
        for field in fields {
            eprintln!("- {field}");
        }
    }

    /// Route overrides as table specs.
    pub fn route_specs(&self) -> BTreeMap<String, RouteSpec> {
        self.routes
            .iter()
            .map(|(kind, route)| (kind.clone(), route.spec()))
            .collect()
    }

    /// Validate every section, reporting all problems at once.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut diag = ConfigDiagnostics::new();
        self.site.validate(&mut diag);
        RouteOverride::validate_all(&self.routes, &mut diag);
        diag.into_result().map_err(ConfigError::Invalid)
    }
}

// ============================================================================
// Test Helpers (available to all modules via `use crate::config::test_*`)
// ============================================================================

/// Parse config, panicking on unknown fields (to catch typos in tests).
#[cfg(test)]
pub fn test_parse_config(content: &str) -> SiteConfig {
    let (parsed, ignored) = SiteConfig::parse_with_ignored(content).unwrap();
    assert!(
        ignored.is_empty(),
        "test config has unknown fields: {ignored:?}"
    );
    parsed
}

// ============================================================================
// tests
// ============================================================================
