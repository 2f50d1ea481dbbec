//! Single-value commands: `resolve`, `localize`, `link`, `types`, `slug`.

use std::collections::BTreeMap;
use std::io::Read;

use anyhow::{Context, Result};
use serde::Serialize;

use super::args::LinkArgs;
use crate::config::SiteConfig;
use crate::link::{LinkReference, LinkResolver, RawLink, ResolveMode, ResolvedLink};
use crate::route::{Locale, RouteParams, Router};
use crate::schema::find_content_type;
use crate::utils::slugify;

/// Localized (or bare template) path for `kind`.
pub fn resolve_path(
    router: &Router,
    kind: &str,
    locale: Option<Locale>,
    params: &[(String, String)],
    unlocalized: bool,
) -> Result<String> {
    let locale = locale.unwrap_or_else(|| router.default_locale());
    let params: RouteParams = params.iter().cloned().collect();
    let path = if unlocalized {
        router.resolve(kind, locale, &params)?
    } else {
        router.path_for(kind, locale, &params)?
    };
    Ok(path)
}

/// Parse link JSON and resolve it for a page in `args.locale`.
pub fn resolve_link_json(router: &Router, args: &LinkArgs, json: &str) -> Result<ResolvedLink> {
    let link: LinkReference = if args.raw {
        let raw: RawLink = serde_json::from_str(json).context("invalid link record")?;
        raw.try_into()?
    } else {
        serde_json::from_str(json).context("invalid link JSON")?
    };

    let mode = if args.lenient {
        ResolveMode::Lenient
    } else {
        ResolveMode::Strict
    };
    let current = args.locale.unwrap_or_else(|| router.default_locale());
    Ok(LinkResolver::new(router, mode).resolve_link(&link, current)?)
}

pub fn run_link(router: &Router, args: &LinkArgs) -> Result<()> {
    let json = if args.input == "-" {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("Failed to read link from stdin")?;
        buf
    } else {
        args.input.clone()
    };

    let resolved = resolve_link_json(router, args, &json)?;
    println!("{}", serde_json::to_string(&resolved)?);
    Ok(())
}

/// A linkable content type and its templates.
#[derive(Debug, Serialize)]
pub struct TypeInfo {
    pub name: &'static str,
    pub title: &'static str,
    pub singleton: bool,
    pub routes: BTreeMap<Locale, String>,
}

pub fn linkable_types(router: &Router) -> Vec<TypeInfo> {
    router
        .linkable_types()
        .sorted()
        .into_iter()
        .filter_map(|name| {
            let decl = find_content_type(name)?;
            let entry = router.table().lookup(name).ok()?;
            let routes = Locale::ALL
                .into_iter()
                .map(|locale| (locale, entry.template(locale).as_str().to_string()))
                .collect();
            Some(TypeInfo {
                name,
                title: decl.title,
                singleton: decl.singleton,
                routes,
            })
        })
        .collect()
}

pub fn run_types(router: &Router, json: bool) -> Result<()> {
    let types = linkable_types(router);
    if json {
        println!("{}", serde_json::to_string_pretty(&types)?);
        return Ok(());
    }

    let width = types.iter().map(|t| t.name.len()).max().unwrap_or(0);
    for info in &types {
        let routes: Vec<String> = info
            .routes
            .iter()
            .map(|(locale, template)| format!("{locale}: {template}"))
            .collect();
        println!("{:width$}  {}", info.name, routes.join("  "));
    }
    Ok(())
}

pub fn run_slug(config: &SiteConfig, words: &[String]) {
    println!("{}", slugify(&words.join(" "), &config.slug));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::route::test_router;

    fn link_args(raw: bool, lenient: bool, locale: Option<Locale>) -> LinkArgs {
        LinkArgs {
            input: String::new(),
            locale,
            raw,
            lenient,
        }
    }

    #[test]
    fn test_resolve_path() {
        let router = test_router();
        let params = [("slug".to_string(), "foo".to_string())];
        assert_eq!(
            resolve_path(&router, "newsArticle", Some(Locale::En), &params, false).unwrap(),
            "/en/news/foo"
        );
        assert_eq!(
            resolve_path(&router, "newsArticle", Some(Locale::En), &params, true).unwrap(),
            "/news/foo"
        );
        assert_eq!(
            resolve_path(&router, "newsArticle", None, &params, false).unwrap(),
            "/nyheter/foo"
        );
        assert!(resolve_path(&router, "newsArticle", None, &[], false).is_err());
    }

    #[test]
    fn test_resolve_link_json() {
        let router = test_router();
        let resolved = resolve_link_json(
            &router,
            &link_args(false, false, Some(Locale::En)),
            r#"{"linkType":"internal","type":"service","document":{"slug":"branding","locale":"en"}}"#,
        )
        .unwrap();
        assert_eq!(resolved, ResolvedLink::internal("/en/services/branding".into()));
    }

    #[test]
    fn test_resolve_raw_link_json() {
        let router = test_router();
        let args = link_args(true, false, None);
        let resolved = resolve_link_json(
            &router,
            &args,
            r#"{"linkType":"external","externalUrl":"https://example.com"}"#,
        )
        .unwrap();
        assert!(resolved.is_external);

        let err = resolve_link_json(&router, &args, r#"{"linkType":"phone"}"#).unwrap_err();
        assert!(err.to_string().contains("phone"));
    }

    #[test]
    fn test_resolve_link_modes() {
        let router = test_router();
        let json = r#"{"linkType":"internal","type":"podcast","document":{"slug":"x"}}"#;
        assert!(resolve_link_json(&router, &link_args(false, false, None), json).is_err());
        let resolved = resolve_link_json(&router, &link_args(false, true, None), json).unwrap();
        assert_eq!(resolved.href, "/404");
    }

    #[test]
    fn test_linkable_types() {
        let router = test_router();
        let types = linkable_types(&router);
        assert_eq!(types.len(), router.linkable_types().len());
        assert!(types.windows(2).all(|w| w[0].name < w[1].name));

        let news = types.iter().find(|t| t.name == "newsArticle").unwrap();
        assert_eq!(news.routes[&Locale::No], "/nyheter/:slug");
        assert!(!types.iter().any(|t| t.name == "siteSettings"));

        let json = serde_json::to_value(&types).unwrap();
        assert!(json[0]["routes"]["no"].is_string());
    }
}
