//! Command-line interface definitions.

use clap::{ColorChoice, Parser, Subcommand};
use std::path::PathBuf;

use crate::route::Locale;

/// Localized route and link resolution for the agency site
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Control colored output (auto, always, never)
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,

    /// Config file path (default: nearest wayfinder.toml)
    #[arg(short = 'C', long, global = true, value_hint = clap::ValueHint::FilePath)]
    pub config: Option<PathBuf>,

    /// Enable verbose output for debugging
    #[arg(short = 'v', long, global = true)]
    pub verbose: bool,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Resolve a content type and params to a localized path
    #[command(visible_alias = "r")]
    Resolve {
        /// Content type key, e.g. `newsArticle`
        kind: String,

        /// Target locale (default: configured default)
        #[arg(short, long)]
        locale: Option<Locale>,

        /// Route parameter as `name=value`, repeatable
        #[arg(short, long = "param", value_name = "NAME=VALUE", value_parser = parse_param)]
        params: Vec<(String, String)>,

        /// Print the template path without a locale prefix
        #[arg(long)]
        unlocalized: bool,
    },

    /// Rewrite a path for a locale
    #[command(visible_alias = "l")]
    Localize {
        path: String,

        #[arg(short, long)]
        locale: Locale,
    },

    /// Resolve a link field given as JSON
    Link {
        #[command(flatten)]
        args: LinkArgs,
    },

    /// List linkable content types and their routes
    #[command(visible_alias = "t")]
    Types {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Generate a slug from a title
    Slug {
        /// Title words, joined with spaces
        #[arg(required = true)]
        text: Vec<String>,
    },

    /// Check routes and path uniqueness of a document export
    #[command(visible_alias = "c")]
    Check {
        /// Document export (JSON array or NDJSON)
        #[arg(value_hint = clap::ValueHint::FilePath)]
        documents: PathBuf,

        /// Output the report as JSON
        #[arg(long)]
        json: bool,
    },

    /// Generate sitemap.xml from a document export
    Sitemap {
        #[command(flatten)]
        args: SitemapArgs,
    },
}

/// Link command arguments.
#[derive(clap::Args, Debug, Clone)]
pub struct LinkArgs {
    /// Link JSON, or `-` to read from stdin
    pub input: String,

    /// Locale of the page the link is rendered on (default: configured default)
    #[arg(short, long)]
    pub locale: Option<Locale>,

    /// Input is a flat studio record (`linkType`, `internalType`, ...)
    #[arg(long)]
    pub raw: bool,

    /// Log configuration errors and fall back to the not-found path
    #[arg(long)]
    pub lenient: bool,
}

/// Sitemap command arguments.
#[derive(clap::Args, Debug, Clone)]
pub struct SitemapArgs {
    /// Document export (JSON array or NDJSON)
    #[arg(value_hint = clap::ValueHint::FilePath)]
    pub documents: PathBuf,

    /// Output file (default: stdout)
    #[arg(short, long, value_hint = clap::ValueHint::FilePath)]
    pub output: Option<PathBuf>,

    /// Override `site.url`
    #[arg(short = 'U', long = "site-url", value_hint = clap::ValueHint::Url)]
    pub site_url: Option<String>,

    /// Minify the XML output
    #[arg(short, long)]
    pub minify: bool,
}

/// Parse `name=value`.
fn parse_param(s: &str) -> Result<(String, String), String> {
    match s.split_once('=') {
        Some((name, value)) if !name.is_empty() => Ok((name.to_string(), value.to_string())),
        _ => Err(format!("expected NAME=VALUE, got `{s}`")),
    }
}
