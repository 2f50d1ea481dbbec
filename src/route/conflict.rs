//! Path conflict detection for documents.
//!
//! Two documents must never resolve to the same public path. A conflict
//! usually means duplicate slugs within a type, or a page slug that shadows a
//! locale prefix (a Norwegian `page` with slug `en` collapses onto `/`).

use rayon::prelude::*;
use rustc_hash::FxHashMap;
use serde::Serialize;

use super::{Locale, RouteError, Router};
use crate::log;
use crate::schema::Document;
use crate::utils::plural_s;

/// Path -> ids of the documents claiming it.
pub type PathSourceMap = FxHashMap<String, Vec<String>>;

/// A path claimed by more than one document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PathConflict {
    pub path: String,
    /// Ids of all documents claiming this path, sorted.
    pub sources: Vec<String>,
}

/// A document that could not be routed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnroutableDocument {
    pub id: String,
    pub locale: Locale,
    pub error: RouteError,
}

/// Paths claimed by published, linkable documents, plus the documents that
/// failed to resolve.
pub fn collect_path_sources(
    router: &Router,
    documents: &[Document],
) -> (PathSourceMap, Vec<UnroutableDocument>) {
    let resolved: Vec<_> = documents
        .par_iter()
        .filter(|doc| !doc.is_draft() && router.linkable_types().contains(&doc.kind))
        .flat_map_iter(|doc| {
            router
                .document_paths(doc)
                .into_iter()
                .map(move |(locale, path)| (doc.id.as_str(), locale, path))
        })
        .collect();

    let mut sources = PathSourceMap::default();
    let mut failures = Vec::new();
    for (id, locale, path) in resolved {
        match path {
            Ok(path) => sources.entry(path).or_default().push(id.to_string()),
            Err(error) => failures.push(UnroutableDocument {
                id: id.to_string(),
                locale,
                error,
            }),
        }
    }
    (sources, failures)
}

/// Paths with more than one source, sorted by path.
pub fn detect_conflicts(sources: &PathSourceMap) -> Vec<PathConflict> {
    let mut conflicts: Vec<_> = sources
        .iter()
        .filter(|(_, ids)| ids.len() > 1)
        .map(|(path, ids)| {
            let mut sources = ids.clone();
            sources.sort_unstable();
            PathConflict {
                path: path.clone(),
                sources,
            }
        })
        .collect();
    conflicts.sort_by(|a, b| a.path.cmp(&b.path));
    conflicts
}

/// Print conflicts using the standard log format.
///
/// ```text
/// [error] path conflicts (1 path, 2 documents)
/// [path] / (2 documents)
///   - front
///   - page-en
/// ```
pub fn print_conflicts(conflicts: &[PathConflict]) {
    if conflicts.is_empty() {
        return;
    }

    let total: usize = conflicts.iter().map(|c| c.sources.len()).sum();
    log!("error"; "path conflicts ({} path{}, {} document{})",
        conflicts.len(), plural_s(conflicts.len()), total, plural_s(total));

    for conflict in conflicts {
        eprintln!();
        let count = conflict.sources.len();
        log!("path"; "{} ({} document{})", conflict.path, count, plural_s(count));
        for source in &conflict.sources {
            eprintln!("  - {source}");
        }
    }
}
