//! Monte-Carlo PageRank
//!
//! Runs one random-surfer walk of `n` steps and reports the fraction of
//! steps spent on each page. The random source is supplied by the caller,
//! so a seeded generator gives a reproducible walk.

use super::transition::transition_row;
use super::{ensure_non_empty, validate_damping, RankVector};
use crate::error::{LinkRankError, Result};
use crate::graph::{LinkGraph, PageId};
use rand::Rng;

/// Result of a sampling run
#[derive(Debug, Clone)]
pub struct SamplingReport {
    /// `visits[p] / samples` for every page
    pub ranks: RankVector,
    /// Raw visit counters indexed by page id
    pub visits: Vec<u64>,
    /// Walk length
    pub samples: usize,
}

/// Estimate PageRank from a walk of `samples` steps.
///
/// The first page is uniform over the graph; every later page is drawn from
/// the transition model of the page before it. Each step, the first one
/// included, counts as a visit.
pub fn sample_rank<R: Rng + ?Sized>(
    graph: &LinkGraph,
    damping: f64,
    samples: usize,
    rng: &mut R,
) -> Result<SamplingReport> {
    ensure_non_empty(graph)?;
    validate_damping(damping)?;
    if samples == 0 {
        return Err(LinkRankError::InvalidInput(
            "sample count must be at least 1".to_string(),
        ));
    }

    let mut visits = vec![0u64; graph.len()];
    let mut page = PageId(rng.gen_range(0..graph.len()) as u32);
    visits[page.index()] += 1;

    for _ in 1..samples {
        page = transition_row(graph, page, damping).sample(rng);
        visits[page.index()] += 1;
    }

    let n = samples as f64;
    let scores = visits.iter().map(|&count| count as f64 / n).collect();

    tracing::debug!(
        "Sampled {} steps over {} pages (d = {})",
        samples,
        graph.len(),
        damping
    );

    Ok(SamplingReport {
        ranks: RankVector::new(graph, scores),
        visits,
        samples,
    })
}
