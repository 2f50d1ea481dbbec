//! Configuration section definitions.
//!
//! | Module   | TOML Section     | Purpose                          |
//! |----------|------------------|----------------------------------|
//! | `site`   | `[site]`         | Public URL, not-found path       |
//! | `i18n`   | `[i18n]`         | Default locale, prefix strategy  |
//! | `slug`   | `[slug]`         | Slug generation                  |
//! | `routes` | `[routes.<key>]` | Route template overrides         |

mod i18n;
mod routes;
mod site;
mod slug;

pub use i18n::I18nConfig;
pub use routes::RouteOverride;
pub use site::SiteSectionConfig;
pub use slug::{SlugCase, SlugConfig, SlugMode, SlugSeparator};
