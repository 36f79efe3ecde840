//! Corpus ingestion: a directory of HTML pages into a link graph

use super::link_extractor::extract_links;
use super::link_graph::{LinkGraph, LinkGraphBuilder};
use crate::error::{LinkRankError, Result};
use glob::Pattern;
use std::path::Path;
use walkdir::WalkDir;

/// Corpus options
#[derive(Debug, Clone)]
pub struct CorpusOptions {
    /// File name pattern for pages
    pub pattern: String,
}

impl Default for CorpusOptions {
    fn default() -> Self {
        Self {
            pattern: "*.html".to_string(),
        }
    }
}

/// Read every page in `dir` (non-recursive) and build its link graph.
pub fn crawl(dir: &Path) -> Result<LinkGraph> {
    crawl_with_options(dir, &CorpusOptions::default())
}

pub fn crawl_with_options(dir: &Path, options: &CorpusOptions) -> Result<LinkGraph> {
    if !dir.is_dir() {
        return Err(LinkRankError::CorpusNotFound(dir.display().to_string()));
    }

    let pattern = Pattern::new(&options.pattern)?;
    let mut builder = LinkGraphBuilder::new();

    let walker = WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .follow_links(true)
        .sort_by_file_name();

    for entry in walker {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }

        let name = entry.file_name().to_string_lossy().to_string();
        if !pattern.matches(&name) {
            tracing::debug!("Skipping non-page file {}", name);
            continue;
        }

        let bytes = std::fs::read(entry.path())?;
        let content = String::from_utf8_lossy(&bytes);

        builder.add_page(name.clone());
        for target in extract_links(&content) {
            builder.add_link(name.clone(), target);
        }
    }

    let graph = builder.build();
    tracing::debug!(
        "Crawled {} pages with {} links from {}",
        graph.len(),
        graph.link_count(),
        dir.display()
    );
    Ok(graph)
}
