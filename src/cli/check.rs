//! `check` command: every published document routes to a unique path.

use std::path::Path;

use anyhow::{Result, bail};
use owo_colors::{OwoColorize, Stream};
use serde::Serialize;

use crate::log;
use crate::route::conflict::{PathConflict, collect_path_sources, detect_conflicts, print_conflicts};
use crate::route::{Locale, Router};
use crate::schema::Document;
use crate::utils::{plural_count, plural_s};

#[derive(Debug, Serialize)]
pub struct CheckReport {
    pub documents: usize,
    pub paths: usize,
    pub conflicts: Vec<PathConflict>,
    pub unroutable: Vec<UnroutableEntry>,
}

#[derive(Debug, Serialize)]
pub struct UnroutableEntry {
    pub id: String,
    pub locale: Locale,
    pub error: String,
}

impl CheckReport {
    pub fn build(router: &Router, documents: &[Document]) -> Self {
        let (sources, failures) = collect_path_sources(router, documents);
        let conflicts = detect_conflicts(&sources);

        let mut unroutable: Vec<UnroutableEntry> = failures
            .into_iter()
            .map(|f| UnroutableEntry {
                id: f.id,
                locale: f.locale,
                error: f.error.to_string(),
            })
            .collect();
        unroutable.sort_by(|a, b| (&a.id, a.locale).cmp(&(&b.id, b.locale)));

        Self {
            documents: documents.len(),
            paths: sources.len(),
            conflicts,
            unroutable,
        }
    }

    pub fn is_ok(&self) -> bool {
        self.conflicts.is_empty() && self.unroutable.is_empty()
    }

    fn print(&self) {
        log!("check"; "{} -> {}",
            plural_count(self.documents, "document"), plural_count(self.paths, "path"));

        if !self.unroutable.is_empty() {
            log!("error"; "{} unroutable document{}",
                self.unroutable.len(), plural_s(self.unroutable.len()));
            for entry in &self.unroutable {
                let error = entry.error.if_supports_color(Stream::Stderr, |e| e.dimmed());
                eprintln!("  - {} ({}): {error}", entry.id, entry.locale);
            }
        }

        print_conflicts(&self.conflicts);
    }
}

pub fn run_check(router: &Router, documents: &Path, json: bool) -> Result<()> {
    let documents = Document::load_export(documents)?;
    let report = CheckReport::build(router, &documents);

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        report.print();
    }

    if !report.is_ok() {
        bail!(
            "check failed: {} conflict{}, {} unroutable",
            report.conflicts.len(),
            plural_s(report.conflicts.len()),
            report.unroutable.len()
        );
    }
    if !json {
        log!("check"; "{}", "all paths unique".if_supports_color(Stream::Stderr, |s| s.green()));
    }
    Ok(())
}
