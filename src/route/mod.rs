//! Localized routing.
//!
//! # Module Structure
//!
//! ```text
//! route/
//! ├── locale     # Locale, PrefixStrategy
//! ├── template   # PathTemplate (`:name` placeholders)
//! ├── table      # RouteEntry, RouteTable, built-in routes
//! ├── localize   # Localizer (prefix rewriting)
//! ├── router     # Router: resolve + localize over the table
//! ├── conflict   # duplicate path detection across documents
//! └── error      # RouteError
//! ```
//!
//! # Flow
//!
//! ```text
//! ("newsArticle", en, {slug: "foo"})
//!     │
//!     ├── RouteTable::lookup      -> /news/:slug
//!     ├── PathTemplate::render    -> /news/foo
//!     └── Localizer::localize     -> /en/news/foo
//! ```

pub mod conflict;
mod error;
mod locale;
mod localize;
mod router;
mod table;
mod template;

pub use error::RouteError;
pub use locale::{Locale, PrefixStrategy};
pub use localize::{Localizer, strip_locale};
pub use router::{LOCALE_PARAM, RouteParams, Router};
pub use table::{BUILTIN_ROUTES, RouteEntry, RouteSpec, RouteTable};
pub use template::PathTemplate;

/// Router over the built-in routes, `no` default, `/404` fallback.
#[cfg(test)]
pub(crate) fn test_router() -> Router {
    Router::new(
        RouteTable::builtin().unwrap(),
        Localizer::default(),
        crate::schema::compute_linkable_types(crate::schema::CONTENT_TYPES),
        "/404",
    )
    .unwrap()
}
