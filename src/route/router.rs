//! The routing context: route table, localizer and linkable types, built once.

use std::collections::BTreeMap;

use super::{Locale, Localizer, RouteError, RouteTable};
use crate::config::SiteConfig;
use crate::schema::{CONTENT_TYPES, Document, LinkableTypeSet, compute_linkable_types};

/// Route parameter values by placeholder name.
pub type RouteParams = BTreeMap<String, String>;

/// Placeholder filled with the target locale code unless given explicitly.
pub const LOCALE_PARAM: &str = "locale";

/// Immutable routing state shared by every resolver call.
///
/// Construct once at startup with [`Router::from_config`] (or [`Router::new`])
/// and pass by reference. All methods are pure, so a `Router` can be shared
/// across threads without locking.
#[derive(Debug, Clone)]
pub struct Router {
    table: RouteTable,
    localizer: Localizer,
    linkable: LinkableTypeSet,
    not_found: String,
}

impl Router {
    /// Assemble a router, checking that every linkable type is routable.
    pub fn new(
        table: RouteTable,
        localizer: Localizer,
        linkable: LinkableTypeSet,
        not_found: &str,
    ) -> Result<Self, RouteError> {
        if let Some(kind) = linkable.sorted().into_iter().find(|k| !table.contains(k)) {
            return Err(RouteError::UnroutedLinkableType {
                kind: kind.to_string(),
            });
        }
        if !not_found.starts_with('/') {
            return Err(RouteError::InvalidTemplate {
                template: not_found.to_string(),
                reason: "not-found path must start with `/`".into(),
            });
        }

        Ok(Self {
            table,
            localizer,
            linkable,
            not_found: not_found.to_string(),
        })
    }

    /// Build from the site configuration and the static content-type literal.
    pub fn from_config(config: &SiteConfig) -> Result<Self, RouteError> {
        let table = RouteTable::with_overrides(&config.route_specs())?;
        Self::new(
            table,
            config.i18n.localizer(),
            compute_linkable_types(CONTENT_TYPES),
            &config.site.not_found,
        )
    }

    #[inline]
    pub fn table(&self) -> &RouteTable {
        &self.table
    }

    #[inline]
    pub fn localizer(&self) -> &Localizer {
        &self.localizer
    }

    #[inline]
    pub fn linkable_types(&self) -> &LinkableTypeSet {
        &self.linkable
    }

    #[inline]
    pub fn default_locale(&self) -> Locale {
        self.localizer.default_locale()
    }

    /// Concrete internal path for `kind` in `locale`.
    ///
    /// Placeholder values are inserted verbatim; callers pre-encode reserved
    /// characters. Empty values and values starting with `/` are rejected so
    /// the result always stays a single-rooted site path. The result is not
    /// locale-prefixed, see [`Self::path_for`].
    pub fn resolve(
        &self,
        kind: &str,
        locale: Locale,
        params: &RouteParams,
    ) -> Result<String, RouteError> {
        let template = self.table.lookup(kind)?.template(locale);
        for name in template.placeholders() {
            if let Some(value) = params.get(name)
                && (value.is_empty() || value.starts_with('/'))
            {
                return Err(RouteError::InvalidRouteParam {
                    kind: kind.to_string(),
                    param: name.clone(),
                    value: value.clone(),
                });
            }
        }

        template
            .render(|name| match params.get(name) {
                Some(value) => Some(value.as_str()),
                None if name == LOCALE_PARAM => Some(locale.code()),
                None => None,
            })
            .map_err(|param| RouteError::MissingRouteParam {
                kind: kind.to_string(),
                param,
            })
    }

    #[inline]
    pub fn localize(&self, path: &str, locale: Locale) -> String {
        self.localizer.localize(path, locale)
    }

    /// [`Self::resolve`] followed by [`Self::localize`].
    pub fn path_for(
        &self,
        kind: &str,
        locale: Locale,
        params: &RouteParams,
    ) -> Result<String, RouteError> {
        let path = self.resolve(kind, locale, params)?;
        Ok(self.localize(&path, locale))
    }

    /// Fallback path shown for broken references.
    #[inline]
    pub fn not_found(&self, locale: Locale) -> String {
        self.localize(&self.not_found, locale)
    }

    /// Locales a document is published in: its own, or all of them for
    /// types that are not localized.
    pub fn document_locales(&self, doc: &Document) -> Vec<Locale> {
        match doc.locale {
            Some(locale) => vec![locale],
            None => Locale::ALL.to_vec(),
        }
    }

    /// Public path of `doc` in `locale`.
    pub fn document_path(&self, doc: &Document, locale: Locale) -> Result<String, RouteError> {
        self.path_for(&doc.kind, locale, &doc.route_params())
    }

    /// Every `(locale, path)` a document is reachable at.
    pub fn document_paths(&self, doc: &Document) -> Vec<(Locale, Result<String, RouteError>)> {
        self.document_locales(doc)
            .into_iter()
            .map(|locale| (locale, self.document_path(doc, locale)))
            .collect()
    }

    /// Localized paths of a translation group, one per locale present.
    ///
    /// Documents that fail to resolve are left out; when two translations
    /// claim the same locale the first one wins.
    pub fn alternates<'d>(
        &self,
        group: impl IntoIterator<Item = &'d Document>,
    ) -> Vec<(Locale, String)> {
        let mut out: Vec<(Locale, String)> = Vec::new();
        for doc in group {
            for (locale, path) in self.document_paths(doc) {
                if let Ok(path) = path
                    && !out.iter().any(|(l, _)| *l == locale)
                {
                    out.push((locale, path));
                }
            }
        }
        out.sort_by_key(|(locale, _)| *locale);
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::route::{PrefixStrategy, RouteSpec, test_router};
    use crate::schema::ContentTypeDecl;

    fn params(pairs: &[(&str, &str)]) -> RouteParams {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    /// Table from the routing example: `no: /nyheter/:slug`, `en: /en/news/:slug`.
    fn example_router() -> Router {
        let specs = BTreeMap::from([(
            "newsArticle".to_string(),
            RouteSpec::from([
                (Locale::No, "/nyheter/:slug".to_string()),
                (Locale::En, "/en/news/:slug".to_string()),
            ]),
        )]);
        let decls = [ContentTypeDecl {
            name: "newsArticle",
            title: "News",
            linkable: true,
            singleton: false,
        }];
        Router::new(
            RouteTable::from_specs(&specs).unwrap(),
            Localizer::new(Locale::No, PrefixStrategy::OmitDefault),
            compute_linkable_types(&decls),
            "/404",
        )
        .unwrap()
    }

    #[test]
    fn test_news_example() {
        let router = example_router();
        let p = params(&[("slug", "foo")]);

        let en = router.resolve("newsArticle", Locale::En, &p).unwrap();
        assert_eq!(router.localize(&en, Locale::En), "/en/news/foo");

        let no = router.resolve("newsArticle", Locale::No, &p).unwrap();
        assert_eq!(router.localize(&no, Locale::No), "/nyheter/foo");
    }

    #[test]
    fn test_resolve() {
        let router = test_router();
        let p = params(&[("slug", "merkevare")]);
        assert_eq!(router.resolve("service", Locale::No, &p).unwrap(), "/tjenester/merkevare");
        assert_eq!(router.resolve("service", Locale::En, &p).unwrap(), "/services/merkevare");
        assert_eq!(router.resolve("frontPage", Locale::En, &RouteParams::new()).unwrap(), "/");
    }

    #[test]
    fn test_resolve_unknown_kind() {
        let router = test_router();
        assert!(matches!(
            router.resolve("podcast", Locale::No, &RouteParams::new()),
            Err(RouteError::UnknownRouteKind { .. })
        ));
    }

    #[test]
    fn test_resolve_missing_param() {
        let router = test_router();
        assert_eq!(
            router.resolve("newsArticle", Locale::No, &RouteParams::new()),
            Err(RouteError::MissingRouteParam {
                kind: "newsArticle".into(),
                param: "slug".into()
            })
        );
    }

    #[test]
    fn test_resolve_locale_placeholder() {
        let specs = BTreeMap::from([(
            "newsArticle".to_string(),
            RouteSpec::from([
                (Locale::No, "/:locale/nyheter/:slug".to_string()),
                (Locale::En, "/:locale/news/:slug".to_string()),
            ]),
        )]);
        let router = Router::new(
            RouteTable::from_specs(&specs).unwrap(),
            Localizer::default(),
            LinkableTypeSet::default(),
            "/404",
        )
        .unwrap();

        let p = params(&[("slug", "foo")]);
        assert_eq!(router.resolve("newsArticle", Locale::No, &p).unwrap(), "/no/nyheter/foo");
        assert_eq!(router.path_for("newsArticle", Locale::No, &p).unwrap(), "/nyheter/foo");
        assert_eq!(router.path_for("newsArticle", Locale::En, &p).unwrap(), "/en/news/foo");
    }

    #[test]
    fn test_resolve_rejects_rootless_values() {
        let router = test_router();
        for slug in ["", "/evil.example", "//evil.example"] {
            let p = params(&[("slug", slug)]);
            assert_eq!(
                router.resolve("page", Locale::En, &p),
                Err(RouteError::InvalidRouteParam {
                    kind: "page".into(),
                    param: "slug".into(),
                    value: slug.into(),
                })
            );
            for locale in Locale::ALL {
                assert!(router.path_for("page", locale, &p).is_err(), "{slug:?}");
            }
        }

        // unused params are not checked
        let p = params(&[("slug", "ok"), ("extra", "")]);
        assert_eq!(router.path_for("page", Locale::En, &p).unwrap(), "/en/ok");
    }

    #[test]
    fn test_path_for_every_kind_and_locale() {
        let router = test_router();
        let p = params(&[("slug", "x")]);
        for kind in router.table().kinds() {
            for locale in Locale::ALL {
                let path = router.path_for(kind, locale, &p).unwrap();
                assert!(path.starts_with('/'), "{path}");
                assert_eq!(router.localizer().detect(&path), locale, "{kind}: {path}");
                if locale == router.default_locale() {
                    assert!(crate::route::strip_locale(&path).0.is_none(), "{path}");
                }
            }
        }
    }

    #[test]
    fn test_unrouted_linkable_type() {
        let decls = [ContentTypeDecl {
            name: "podcast",
            title: "Podcast",
            linkable: true,
            singleton: false,
        }];
        let err = Router::new(
            RouteTable::builtin().unwrap(),
            Localizer::default(),
            compute_linkable_types(&decls),
            "/404",
        )
        .unwrap_err();
        assert_eq!(err, RouteError::UnroutedLinkableType { kind: "podcast".into() });
    }

    #[test]
    fn test_invalid_not_found() {
        let err = Router::new(
            RouteTable::builtin().unwrap(),
            Localizer::default(),
            LinkableTypeSet::default(),
            "404",
        )
        .unwrap_err();
        assert!(matches!(err, RouteError::InvalidTemplate { .. }));
    }

    #[test]
    fn test_not_found() {
        let router = test_router();
        assert_eq!(router.not_found(Locale::No), "/404");
        assert_eq!(router.not_found(Locale::En), "/en/404");
    }

    #[test]
    fn test_document_paths() {
        let router = test_router();
        let localized = Document::new("a", "newsArticle", Some("hei"), Some(Locale::No));
        let paths = router.document_paths(&localized);
        assert_eq!(paths.len(), 1);
        assert_eq!(paths[0].1.as_deref(), Ok("/nyheter/hei"));

        let shared = Document::new("b", "frontPage", None, None);
        let paths: Vec<_> = router
            .document_paths(&shared)
            .into_iter()
            .map(|(l, p)| (l, p.unwrap()))
            .collect();
        assert_eq!(paths, [(Locale::No, "/".to_string()), (Locale::En, "/en".to_string())]);
    }

    #[test]
    fn test_alternates() {
        let router = test_router();
        let no = Document::new("a", "service", Some("merkevare"), Some(Locale::No));
        let mut en = Document::new("b", "service", Some("branding"), Some(Locale::En));
        en.translation_of = Some("a".into());

        let alternates = router.alternates([&en, &no]);
        assert_eq!(
            alternates,
            [
                (Locale::No, "/tjenester/merkevare".to_string()),
                (Locale::En, "/en/services/branding".to_string())
            ]
        );
    }

    #[test]
    fn test_router_is_shareable() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Router>();
    }
}
