//! Command-line interface module.

mod args;
pub mod check;
pub mod resolve;
pub mod sitemap;

pub use args::{Cli, Commands, LinkArgs, SitemapArgs};
