//! Immutable, interned link graph

use std::collections::{BTreeMap, BTreeSet, HashMap};

/// Interned page identifier (index into the graph's page table)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PageId(pub u32);

impl PageId {
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// Directed link graph over a closed set of pages.
///
/// Pages are interned in alphabetical order of their names, so iterating
/// `PageId`s in ascending order visits pages alphabetically. Every link
/// target is a page of the graph and no page links to itself.
#[derive(Debug, Clone, Default)]
pub struct LinkGraph {
    names: Vec<String>,
    index: HashMap<String, PageId>,
    out_links: Vec<Vec<PageId>>,
    in_links: Vec<Vec<PageId>>,
}

impl LinkGraph {
    /// Build a graph from `(page, targets)` pairs.
    ///
    /// Goes through [`LinkGraphBuilder`], so unknown targets and self-links
    /// are pruned.
    pub fn from_adjacency<I, P, T, S>(adjacency: I) -> Self
    where
        I: IntoIterator<Item = (P, T)>,
        P: Into<String>,
        T: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut builder = LinkGraphBuilder::new();
        for (page, targets) in adjacency {
            let page = page.into();
            builder.add_page(page.clone());
            for target in targets {
                builder.add_link(page.clone(), target);
            }
        }
        builder.build()
    }

    /// Number of pages (N)
    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// All page ids in alphabetical order of their names
    pub fn pages(&self) -> impl ExactSizeIterator<Item = PageId> + '_ {
        (0..self.names.len() as u32).map(PageId)
    }

    /// Page names in alphabetical order
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Look up a page by name
    pub fn page(&self, name: &str) -> Option<PageId> {
        self.index.get(name).copied()
    }

    /// Name of an interned page
    pub fn name(&self, page: PageId) -> &str {
        &self.names[page.index()]
    }

    /// Pages linked to by `page`
    pub fn out_links(&self, page: PageId) -> &[PageId] {
        &self.out_links[page.index()]
    }

    /// Pages linking to `page`
    pub fn in_links(&self, page: PageId) -> &[PageId] {
        &self.in_links[page.index()]
    }

    pub fn out_degree(&self, page: PageId) -> usize {
        self.out_links[page.index()].len()
    }

    /// A dangling page has no out-links
    pub fn is_dangling(&self, page: PageId) -> bool {
        self.out_links[page.index()].is_empty()
    }

    /// All dangling pages
    pub fn dangling_pages(&self) -> Vec<PageId> {
        self.pages().filter(|&p| self.is_dangling(p)).collect()
    }

    /// Total number of links
    pub fn link_count(&self) -> usize {
        self.out_links.iter().map(Vec::len).sum()
    }
}

/// Mutable accumulator for a [`LinkGraph`].
///
/// Links may name targets that are never added as pages; those are dropped
/// by [`LinkGraphBuilder::build`].
#[derive(Debug, Clone, Default)]
pub struct LinkGraphBuilder {
    pages: BTreeMap<String, BTreeSet<String>>,
}

impl LinkGraphBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a page (idempotent)
    pub fn add_page(&mut self, name: impl Into<String>) -> &mut Self {
        self.pages.entry(name.into()).or_default();
        self
    }

    /// Record a link, registering `from` as a page
    pub fn add_link(&mut self, from: impl Into<String>, to: impl Into<String>) -> &mut Self {
        self.pages.entry(from.into()).or_default().insert(to.into());
        self
    }

    /// Freeze into an immutable graph, pruning self-links and links to
    /// pages outside the corpus.
    pub fn build(self) -> LinkGraph {
        let names: Vec<String> = self.pages.keys().cloned().collect();
        let index: HashMap<String, PageId> = names
            .iter()
            .enumerate()
            .map(|(i, name)| (name.clone(), PageId(i as u32)))
            .collect();

        let mut out_links = Vec::with_capacity(names.len());
        let mut in_links = vec![Vec::new(); names.len()];
        let mut pruned = 0usize;

        for (source, targets) in self.pages.values().enumerate() {
            let source = PageId(source as u32);
            let mut links = Vec::with_capacity(targets.len());
            for target in targets {
                match index.get(target) {
                    Some(&id) if id != source => {
                        links.push(id);
                        in_links[id.index()].push(source);
                    }
                    _ => pruned += 1,
                }
            }
            out_links.push(links);
        }

        if pruned > 0 {
            tracing::debug!("Pruned {} self-links or links outside the corpus", pruned);
        }

        LinkGraph {
            names,
            index,
            out_links,
            in_links,
        }
    }
}
