//! Link reference dispatch.

use super::{InternalLink, LinkReference, ResolvedLink};
use crate::debug;
use crate::log;
use crate::route::{Locale, RouteError, Router};
use crate::utils::is_web_url;

/// How configuration-shaped errors are handled while resolving links.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ResolveMode {
    /// Propagate unknown routes and missing params (development, CI).
    #[default]
    Strict,
    /// Log them and fall back to the not-found path (production rendering).
    Lenient,
}

impl ResolveMode {
    #[inline]
    pub const fn is_strict(self) -> bool {
        matches!(self, Self::Strict)
    }
}

/// Resolves [`LinkReference`] values against a shared [`Router`].
#[derive(Debug, Clone, Copy)]
pub struct LinkResolver<'a> {
    router: &'a Router,
    mode: ResolveMode,
}

impl<'a> LinkResolver<'a> {
    pub const fn new(router: &'a Router, mode: ResolveMode) -> Self {
        Self { router, mode }
    }

    #[inline]
    pub const fn mode(&self) -> ResolveMode {
        self.mode
    }

    /// Turn a link field into an href for a page rendered in `current`.
    ///
    /// Data problems never fail: they resolve to the not-found path in
    /// `current` (see [`RouteError::is_data_error`]). Unknown routes and
    /// missing params fail only in [`ResolveMode::Strict`].
    pub fn resolve_link(
        &self,
        link: &LinkReference,
        current: Locale,
    ) -> Result<ResolvedLink, RouteError> {
        let result = match link {
            LinkReference::External { url } => Self::pass_through(url),
            LinkReference::Download(download) => match &download.url {
                Some(url) => Self::pass_through(url),
                None => Err(RouteError::BrokenInternalReference {
                    kind: "download".to_string(),
                }),
            },
            LinkReference::Internal(internal) => self
                .resolve_internal(internal, current)
                .map(ResolvedLink::internal),
        };

        match result {
            Ok(resolved) => Ok(resolved),
            Err(err) if err.is_data_error() => {
                debug!("link"; "{err}, using not-found path");
                Ok(self.fallback(current))
            }
            Err(err) if self.mode.is_strict() => Err(err),
            Err(err) => {
                log!("link"; "{err}, using not-found path");
                Ok(self.fallback(current))
            }
        }
    }

    fn pass_through(url: &str) -> Result<ResolvedLink, RouteError> {
        if is_web_url(url) {
            Ok(ResolvedLink::external(url.to_string()))
        } else {
            Err(RouteError::InvalidExternalUrl {
                url: url.to_string(),
            })
        }
    }

    fn resolve_internal(&self, link: &InternalLink, current: Locale) -> Result<String, RouteError> {
        let Some(document) = &link.document else {
            return Err(RouteError::BrokenInternalReference {
                kind: link.kind.clone(),
            });
        };

        let locale = document.locale.unwrap_or(current);
        let mut href = self
            .router
            .path_for(&link.kind, locale, &document.route_params())?;

        if let Some(query) = link.query.as_deref().filter(|q| !q.is_empty()) {
            href.push('?');
            href.push_str(query.trim_start_matches('?'));
        }
        if let Some(anchor) = link.anchor.as_deref().filter(|a| !a.is_empty()) {
            href.push('#');
            href.push_str(anchor.trim_start_matches('#'));
        }
        Ok(href)
    }

    #[inline]
    fn fallback(&self, current: Locale) -> ResolvedLink {
        ResolvedLink::internal(self.router.not_found(current))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::link::{DocumentRef, InternalLink};
    use crate::route::test_router;

    fn internal(kind: &str, slug: &str, locale: Option<Locale>) -> LinkReference {
        LinkReference::internal(kind, Some(DocumentRef::new(Some(slug), locale)))
    }

    #[test]
    fn test_external_unchanged() {
        let router = test_router();
        let resolver = LinkResolver::new(&router, ResolveMode::Strict);
        let url = "https://Example.com/a%20b?q=1#frag";
        for locale in Locale::ALL {
            let resolved = resolver
                .resolve_link(&LinkReference::external(url), locale)
                .unwrap();
            assert_eq!(resolved.href, url);
            assert!(resolved.is_external);
        }
    }

    #[test]
    fn test_download_unchanged() {
        let router = test_router();
        let resolver = LinkResolver::new(&router, ResolveMode::Strict);
        let url = "https://cdn.sanity.io/files/abc/prod/rapport.pdf";
        let resolved = resolver
            .resolve_link(&LinkReference::download(Some(url)), Locale::En)
            .unwrap();
        assert_eq!(resolved, ResolvedLink::external(url.to_string()));
    }

    #[test]
    fn test_non_absolute_external_falls_back() {
        let router = test_router();
        let resolver = LinkResolver::new(&router, ResolveMode::Strict);
        for link in [
            LinkReference::external("relative/x"),
            LinkReference::external("//evil.example"),
            LinkReference::download(Some("files/a.pdf")),
        ] {
            let resolved = resolver.resolve_link(&link, Locale::No).unwrap();
            assert_eq!(resolved, ResolvedLink::internal("/404".into()));
        }
    }

    #[test]
    fn test_download_without_asset() {
        let router = test_router();
        let resolver = LinkResolver::new(&router, ResolveMode::Strict);
        let resolved = resolver
            .resolve_link(&LinkReference::download(None), Locale::En)
            .unwrap();
        assert_eq!(resolved, ResolvedLink::internal("/en/404".into()));
    }

    #[test]
    fn test_internal() {
        let router = test_router();
        let resolver = LinkResolver::new(&router, ResolveMode::Strict);

        let resolved = resolver
            .resolve_link(&internal("service", "merkevare", Some(Locale::No)), Locale::No)
            .unwrap();
        assert_eq!(resolved, ResolvedLink::internal("/tjenester/merkevare".into()));

        let resolved = resolver
            .resolve_link(&internal("newsArticle", "foo", Some(Locale::En)), Locale::En)
            .unwrap();
        assert_eq!(resolved.href, "/en/news/foo");
        assert!(!resolved.is_external);
    }

    #[test]
    fn test_internal_uses_document_locale() {
        let router = test_router();
        let resolver = LinkResolver::new(&router, ResolveMode::Strict);
        // English page linking to a Norwegian-only article
        let resolved = resolver
            .resolve_link(&internal("article", "hei", Some(Locale::No)), Locale::En)
            .unwrap();
        assert_eq!(resolved.href, "/artikler/hei");
    }

    #[test]
    fn test_internal_unlocalized_document() {
        let router = test_router();
        let resolver = LinkResolver::new(&router, ResolveMode::Strict);
        let front = LinkReference::internal("frontPage", Some(DocumentRef::default()));
        assert_eq!(resolver.resolve_link(&front, Locale::No).unwrap().href, "/");
        assert_eq!(resolver.resolve_link(&front, Locale::En).unwrap().href, "/en");
    }

    #[test]
    fn test_internal_query_and_anchor() {
        let router = test_router();
        let resolver = LinkResolver::new(&router, ResolveMode::Strict);
        let link = LinkReference::Internal(InternalLink {
            kind: "event".into(),
            document: Some(DocumentRef::new(Some("open-house"), Some(Locale::En))),
            query: Some("ref=menu".into()),
            anchor: Some("#signup".into()),
        });
        assert_eq!(
            resolver.resolve_link(&link, Locale::En).unwrap().href,
            "/en/events/open-house?ref=menu#signup"
        );
    }

    #[test]
    fn test_missing_document_falls_back() {
        let router = test_router();
        for mode in [ResolveMode::Strict, ResolveMode::Lenient] {
            let resolver = LinkResolver::new(&router, mode);
            let link = LinkReference::internal("page", None);
            assert_eq!(
                resolver.resolve_link(&link, Locale::No).unwrap(),
                ResolvedLink::internal("/404".into())
            );
            assert_eq!(
                resolver.resolve_link(&link, Locale::En).unwrap().href,
                "/en/404"
            );
        }
    }

    #[test]
    fn test_rootless_slug_falls_back() {
        let router = test_router();
        for mode in [ResolveMode::Strict, ResolveMode::Lenient] {
            let resolver = LinkResolver::new(&router, mode);
            for slug in ["/evil.example", ""] {
                let resolved = resolver
                    .resolve_link(&internal("page", slug, Some(Locale::En)), Locale::En)
                    .unwrap();
                assert_eq!(resolved, ResolvedLink::internal("/en/404".into()));
            }
        }
    }

    #[test]
    fn test_config_errors_strict() {
        let router = test_router();
        let resolver = LinkResolver::new(&router, ResolveMode::Strict);

        let err = resolver
            .resolve_link(&internal("podcast", "x", Some(Locale::No)), Locale::No)
            .unwrap_err();
        assert!(matches!(err, RouteError::UnknownRouteKind { .. }));

        let no_slug =
            LinkReference::internal("newsArticle", Some(DocumentRef::new(None, Some(Locale::No))));
        let err = resolver.resolve_link(&no_slug, Locale::No).unwrap_err();
        assert!(matches!(err, RouteError::MissingRouteParam { .. }));
    }

    #[test]
    fn test_config_errors_lenient() {
        let router = test_router();
        let resolver = LinkResolver::new(&router, ResolveMode::Lenient);
        let resolved = resolver
            .resolve_link(&internal("podcast", "x", Some(Locale::No)), Locale::En)
            .unwrap();
        assert_eq!(resolved, ResolvedLink::internal("/en/404".into()));
    }

    #[test]
    fn test_resolver_across_threads() {
        let router = test_router();
        let resolver = LinkResolver::new(&router, ResolveMode::Strict);
        std::thread::scope(|s| {
            for locale in Locale::ALL {
                s.spawn(move || {
                    let href = resolver
                        .resolve_link(&internal("seminar", "ux", Some(locale)), locale)
                        .unwrap()
                        .href;
                    assert!(href.ends_with("/ux"));
                });
            }
        });
    }
}
