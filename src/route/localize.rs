//! Locale prefix rewriting for internal paths.

use std::borrow::Cow;

use super::{Locale, PrefixStrategy};

/// Rewrites internal paths to their public, locale-prefixed form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Localizer {
    default: Locale,
    strategy: PrefixStrategy,
}

impl Default for Localizer {
    fn default() -> Self {
        Self::new(Locale::default(), PrefixStrategy::default())
    }
}

impl Localizer {
    #[inline]
    pub const fn new(default: Locale, strategy: PrefixStrategy) -> Self {
        Self { default, strategy }
    }

    #[inline]
    pub const fn default_locale(&self) -> Locale {
        self.default
    }

    #[inline]
    pub const fn strategy(&self) -> PrefixStrategy {
        self.strategy
    }

    /// Whether paths in `locale` carry a `/<code>` prefix.
    #[inline]
    pub fn is_prefixed(&self, locale: Locale) -> bool {
        locale != self.default || self.strategy == PrefixStrategy::Always
    }

    /// Rewrite `path` for `locale`.
    ///
    /// Anything that is not a site-root path (external URLs, `mailto:`,
    /// protocol-relative `//host/...`) is returned unchanged. Existing locale
    /// prefixes are replaced, so the operation is idempotent.
    ///
    /// ```text
    /// localize("/news/foo", en)     -> /en/news/foo
    /// localize("/en/news/foo", no)  -> /news/foo     (omit-default)
    /// localize("/", en)             -> /en
    /// ```
    pub fn localize(&self, path: &str, locale: Locale) -> String {
        if !path.starts_with('/') || path.starts_with("//") {
            return path.to_string();
        }

        let (_, bare) = strip_locale(path);
        if !self.is_prefixed(locale) {
            return bare.into_owned();
        }

        let code = locale.code();
        match bare.strip_prefix('/') {
            Some(rest) if rest.is_empty() => format!("/{code}"),
            Some(rest) if rest.starts_with(['?', '#']) => format!("/{code}{rest}"),
            _ => format!("/{code}{bare}"),
        }
    }

    /// Locale a public path belongs to: its prefix, or the default.
    pub fn detect(&self, path: &str) -> Locale {
        strip_locale(path).0.unwrap_or(self.default)
    }
}

/// Remove every leading locale segment from a site-root path.
///
/// Returns the outermost locale found, if any. The remainder always starts
/// with exactly one `/`, so `/en//host` cannot leave `//host` behind.
pub fn strip_locale(path: &str) -> (Option<Locale>, Cow<'_, str>) {
    let mut found = None;
    let mut rest = path;

    while let Some(tail) = rest.strip_prefix('/') {
        let end = tail.find(['/', '?', '#']).unwrap_or(tail.len());
        let Some(locale) = Locale::from_segment(&tail[..end]) else {
            break;
        };
        found.get_or_insert(locale);
        rest = &tail[end..];
    }

    if found.is_none() {
        return (None, Cow::Borrowed(path));
    }
    let trimmed = rest.trim_start_matches('/');
    if trimmed.len() + 1 == rest.len() {
        (found, Cow::Borrowed(rest))
    } else {
        (found, Cow::Owned(format!("/{trimmed}")))
    }
}
