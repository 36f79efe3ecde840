//! Linkrank Core Library
//!
//! PageRank estimation over a small, closed link graph.
//!
//! # Features
//! - Immutable link graph with pages interned to integer ids
//! - Corpus ingestion from a directory of HTML pages
//! - Monte-Carlo random-surfer estimator with an injectable random source
//! - Power-iteration solver with dangling-node redistribution

pub mod config;
pub mod error;
pub mod graph;
pub mod rank;

pub use config::RankConfig;
pub use error::{LinkRankError, Error, Result};
pub use graph::{crawl, LinkGraph, LinkGraphBuilder, PageId};
pub use rank::{
    iterate_rank, iterate_rank_strict, sample_rank, transition, IterationReport, IterativeSolver,
    RankVector, SamplingReport,
};

/// Default damping factor
pub const DEFAULT_DAMPING: f64 = 0.85;

/// Default walk length for the sampling estimator
pub const DEFAULT_SAMPLES: usize = 10_000;

/// Default config directory name
pub const CONFIG_DIR_NAME: &str = "linkrank";
