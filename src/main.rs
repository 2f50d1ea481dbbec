//! Wayfinder command-line entry point.

use anyhow::{Context, Result};
use clap::{ColorChoice, Parser};
use wayfinder::cli::{self, Cli, Commands};
use wayfinder::{Router, SiteConfig, logger};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }
    logger::set_verbose(cli.verbose);

    let config = SiteConfig::load(cli.config.as_deref())?;
    let router = Router::from_config(&config).context("invalid route configuration")?;

    match &cli.command {
        Commands::Resolve {
            kind,
            locale,
            params,
            unlocalized,
        } => {
            let path = cli::resolve::resolve_path(&router, kind, *locale, params, *unlocalized)?;
            println!("{path}");
            Ok(())
        }
        Commands::Localize { path, locale } => {
            println!("{}", router.localize(path, *locale));
            Ok(())
        }
        Commands::Link { args } => cli::resolve::run_link(&router, args),
        Commands::Types { json } => cli::resolve::run_types(&router, *json),
        Commands::Check { documents, json } => cli::check::run_check(&router, documents, *json),
        Commands::Sitemap { args } => cli::sitemap::run_sitemap(&config, &router, args),
        Commands::Slug { text } => {
            cli::resolve::run_slug(&config, text);
            Ok(())
        }
    }
}
