//! Wayfinder - localized route and link resolution for a CMS-driven site.
//!
//! Build a [`Router`] once, then resolve paths and link fields against it
//! from any number of threads:
//!
//! ```ignore
//! let router = Router::from_config(&SiteConfig::load(None)?)?;
//! let resolver = LinkResolver::new(&router, ResolveMode::Lenient);
//! let link = resolver.resolve_link(&reference, Locale::En)?;
//! ```

pub mod cli;
pub mod config;
pub mod generator;
pub mod link;
pub mod logger;
pub mod route;
pub mod schema;
pub mod utils;

pub use config::SiteConfig;
pub use link::{LinkReference, LinkResolver, ResolveMode, ResolvedLink};
pub use route::{Locale, Localizer, PrefixStrategy, RouteError, RouteTable, Router};
pub use schema::{LinkableTypeSet, compute_linkable_types};
