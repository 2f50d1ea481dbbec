//! `[i18n]` section configuration.
//!
//! ```toml
//! [i18n]
//! default = "no"
//! prefix = "omit-default"   # or "always"
//! ```

use serde::{Deserialize, Serialize};

use crate::route::{Locale, Localizer, PrefixStrategy};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct I18nConfig {
    /// Locale served without a URL prefix under `omit-default`.
    pub default: Locale,

    pub prefix: PrefixStrategy,
}

impl I18nConfig {
    #[inline]
    pub const fn localizer(&self) -> Localizer {
        Localizer::new(self.default, self.prefix)
    }
}
