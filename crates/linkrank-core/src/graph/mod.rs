//! Link graph and corpus ingestion

mod corpus;
mod link_extractor;
mod link_graph;

pub use corpus::{crawl, crawl_with_options, CorpusOptions};
pub use link_extractor::extract_links;
pub use link_graph::{LinkGraph, LinkGraphBuilder, PageId};
