//! Routing error types.

use thiserror::Error;

/// Errors raised while building the route table or resolving paths.
///
/// `UnknownRouteKind` and `MissingRouteParam` are configuration-shaped: they
/// mean the schema and the route table disagree. `BrokenInternalReference` is
/// data-shaped and is recovered by the link resolver, never surfaced by it.
/// So is `InvalidRouteParam`: an empty or `/`-led slug would otherwise turn
/// into a protocol-relative `//host` URL.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouteError {
    #[error("no route registered for content type `{kind}`")]
    UnknownRouteKind { kind: String },

    #[error("route for `{kind}` requires parameter `{param}`")]
    MissingRouteParam { kind: String, param: String },

    #[error("route for `{kind}` got `{value}` for `{param}`, expected a non-empty path segment")]
    InvalidRouteParam {
        kind: String,
        param: String,
        value: String,
    },

    #[error("unsupported locale `{code}`")]
    UnsupportedLocale { code: String },

    #[error("internal link to `{kind}` points at a missing document")]
    BrokenInternalReference { kind: String },

    #[error("link target `{url}` is not an absolute http(s) URL")]
    InvalidExternalUrl { url: String },

    #[error("invalid route template `{template}`: {reason}")]
    InvalidTemplate { template: String, reason: String },

    #[error("route for `{kind}` has no template for locale `{locale}`")]
    MissingLocaleTemplate { kind: String, locale: String },

    #[error("route for `{kind}` uses different placeholders across locales")]
    InconsistentPlaceholders { kind: String },

    #[error("content type `{kind}` is linkable but has no route")]
    UnroutedLinkableType { kind: String },
}

impl RouteError {
    /// Errors caused by content data rather than configuration.
    pub const fn is_data_error(&self) -> bool {
        matches!(
            self,
            Self::BrokenInternalReference { .. }
                | Self::InvalidRouteParam { .. }
                | Self::InvalidExternalUrl { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let err = RouteError::UnknownRouteKind {
            kind: "podcast".into(),
        };
        assert_eq!(
            err.to_string(),
            "no route registered for content type `podcast`"
        );

        let err = RouteError::MissingRouteParam {
            kind: "newsArticle".into(),
            param: "slug".into(),
        };
        assert!(err.to_string().contains("`slug`"));
    }

    #[test]
    fn test_is_data_error() {
        assert!(
            RouteError::BrokenInternalReference {
                kind: "page".into()
            }
            .is_data_error()
        );
        assert!(
            RouteError::InvalidRouteParam {
                kind: "page".into(),
                param: "slug".into(),
                value: String::new(),
            }
            .is_data_error()
        );
        assert!(
            !RouteError::UnknownRouteKind {
                kind: "page".into()
            }
            .is_data_error()
        );
    }
}
