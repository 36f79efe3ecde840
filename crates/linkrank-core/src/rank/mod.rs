//! PageRank estimators
//!
//! Two independent estimators over the same [`LinkGraph`]:
//! - [`sample_rank`]: Monte-Carlo random surfer driven by the transition model
//! - [`iterate_rank`]: power iteration to the fixed point
//!
//! Both return a [`RankVector`] whose entries sum to one.

pub mod iterative;
pub mod sampling;
pub mod transition;

pub use iterative::{
    iterate_rank, iterate_rank_strict, IterationReport, IterativeSolver, DEFAULT_MAX_ITERATIONS,
    DEFAULT_TOLERANCE,
};
pub use sampling::{sample_rank, SamplingReport};
pub use transition::{transition, transition_row, Distribution, TransitionRow};

use crate::error::{LinkRankError, Result};
use crate::graph::{LinkGraph, PageId};

/// Estimated long-run visitation probability of every page.
///
/// Entries are indexed by [`PageId`], so iteration is alphabetical.
#[derive(Debug, Clone, PartialEq)]
pub struct RankVector {
    names: Vec<String>,
    scores: Vec<f64>,
}

impl RankVector {
    pub(crate) fn new(graph: &LinkGraph, scores: Vec<f64>) -> Self {
        debug_assert_eq!(graph.len(), scores.len());
        Self {
            names: graph.names().to_vec(),
            scores,
        }
    }

    pub fn len(&self) -> usize {
        self.scores.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }

    /// Rank of a page by name
    pub fn get(&self, name: &str) -> Option<f64> {
        self.names
            .binary_search_by(|n| n.as_str().cmp(name))
            .ok()
            .map(|i| self.scores[i])
    }

    /// Rank of an interned page
    pub fn score(&self, page: PageId) -> f64 {
        self.scores.get(page.index()).copied().unwrap_or(0.0)
    }

    pub fn scores(&self) -> &[f64] {
        &self.scores
    }

    /// `(page, rank)` pairs in alphabetical order of page name
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> + '_ {
        self.names
            .iter()
            .map(String::as_str)
            .zip(self.scores.iter().copied())
    }

    pub fn sum(&self) -> f64 {
        total(&self.scores)
    }
}

/// The uniform `1/N` vector
pub fn uniform(n: usize) -> Vec<f64> {
    if n == 0 {
        return Vec::new();
    }
    vec![1.0 / n as f64; n]
}

pub fn total(values: &[f64]) -> f64 {
    values.iter().sum()
}

/// Largest per-entry absolute difference
pub fn max_abs_diff(a: &[f64], b: &[f64]) -> f64 {
    a.iter()
        .zip(b.iter())
        .map(|(x, y)| (x - y).abs())
        .fold(0.0, f64::max)
}

/// Non-negative entries summing to one within `tolerance`
pub fn is_distribution(values: &[f64], tolerance: f64) -> bool {
    values.iter().all(|&v| v >= 0.0) && (total(values) - 1.0).abs() <= tolerance
}

/// Damping must lie in the open interval (0, 1)
pub fn validate_damping(damping: f64) -> Result<()> {
    if damping > 0.0 && damping < 1.0 {
        Ok(())
    } else {
        Err(LinkRankError::InvalidInput(format!(
            "damping factor must be in (0, 1), got {}",
            damping
        )))
    }
}

pub(crate) fn ensure_non_empty(graph: &LinkGraph) -> Result<()> {
    if graph.is_empty() {
        Err(LinkRankError::EmptyGraph)
    } else {
        Ok(())
    }
}
