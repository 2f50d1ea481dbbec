//! `sitemap` command.

use std::fs;

use anyhow::{Context, Result, anyhow};

use super::args::SitemapArgs;
use crate::config::SiteConfig;
use crate::generator::{minify_xml, sitemap::Sitemap};
use crate::log;
use crate::route::Router;
use crate::schema::Document;
use crate::utils::plural_count;

/// Build the sitemap XML for an export, using `--site-url` over `site.url`.
pub fn render_sitemap(
    config: &SiteConfig,
    router: &Router,
    args: &SitemapArgs,
    documents: &[Document],
) -> Result<String> {
    let base_url = args
        .site_url
        .as_deref()
        .or_else(|| config.site.base_url())
        .ok_or_else(|| anyhow!("sitemap needs `site.url` in the config or --site-url"))?;

    let sitemap = Sitemap::build(router, base_url, documents);
    log!("sitemap"; "{}", plural_count(sitemap.len(), "url"));

    let xml = sitemap.into_xml();
    Ok(minify_xml(&xml, args.minify).into_owned())
}

pub fn run_sitemap(config: &SiteConfig, router: &Router, args: &SitemapArgs) -> Result<()> {
    let documents = Document::load_export(&args.documents)?;
    let xml = render_sitemap(config, router, args, &documents)?;

    match &args.output {
        Some(path) => {
            fs::write(path, xml)
                .with_context(|| format!("Failed to write sitemap to {}", path.display()))?;
            log!("sitemap"; "{}", path.display());
        }
        None => print!("{xml}"),
    }
    Ok(())
}
