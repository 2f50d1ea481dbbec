//! Static content-type declarations and the linkable-type set derived from them.

use rustc_hash::FxHashSet;

/// Schema-level options of a content type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContentTypeDecl {
    /// Type key as stored in `_type` (e.g. `newsArticle`).
    pub name: &'static str,
    /// Editor-facing title.
    pub title: &'static str,
    /// Valid target for internal link references.
    pub linkable: bool,
    /// Exactly one document of this type exists (per locale).
    pub singleton: bool,
}

impl ContentTypeDecl {
    const fn document(name: &'static str, title: &'static str) -> Self {
        Self {
            name,
            title,
            linkable: true,
            singleton: false,
        }
    }

    const fn singleton(name: &'static str, title: &'static str, linkable: bool) -> Self {
        Self {
            name,
            title,
            linkable,
            singleton: true,
        }
    }

    const fn object(name: &'static str, title: &'static str) -> Self {
        Self {
            name,
            title,
            linkable: false,
            singleton: false,
        }
    }
}

/// Every content type the studio registers.
pub const CONTENT_TYPES: &[ContentTypeDecl] = &[
    ContentTypeDecl::singleton("frontPage", "Forside", true),
    ContentTypeDecl::document("page", "Side"),
    ContentTypeDecl::document("article", "Artikkel"),
    ContentTypeDecl::document("service", "Tjeneste"),
    ContentTypeDecl::document("newsArticle", "Nyhet"),
    ContentTypeDecl::document("event", "Arrangement"),
    ContentTypeDecl::document("ebook", "E-bok"),
    ContentTypeDecl::document("seminar", "Seminar"),
    ContentTypeDecl::document("caseStudy", "Prosjekt"),
    ContentTypeDecl::singleton("siteSettings", "Innstillinger", false),
    ContentTypeDecl::singleton("menu", "Meny", false),
    ContentTypeDecl::object("banner", "Banner"),
    ContentTypeDecl::object("employee", "Ansatt"),
];

/// Look up a declaration by type key.
pub fn find_content_type(name: &str) -> Option<&'static ContentTypeDecl> {
    CONTENT_TYPES.iter().find(|decl| decl.name == name)
}

/// Content types that internal links may point at.
///
/// Computed once from the declarations and never mutated.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LinkableTypeSet {
    kinds: FxHashSet<&'static str>,
}

impl LinkableTypeSet {
    #[inline]
    pub fn contains(&self, kind: &str) -> bool {
        self.kinds.contains(kind)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.kinds.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.kinds.is_empty()
    }

    /// Keys in sorted order (for reference-field options and stable output).
    pub fn sorted(&self) -> Vec<&'static str> {
        let mut kinds: Vec<_> = self.kinds.iter().copied().collect();
        kinds.sort_unstable();
        kinds
    }

    pub fn iter(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.kinds.iter().copied()
    }
}

/// Filter `decls` down to the keys of linkable content types.
pub fn compute_linkable_types(decls: &[ContentTypeDecl]) -> LinkableTypeSet {
    LinkableTypeSet {
        kinds: decls
            .iter()
            .filter(|decl| decl.linkable)
            .map(|decl| decl.name)
            .collect(),
    }
}
