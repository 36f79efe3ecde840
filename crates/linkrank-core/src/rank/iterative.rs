//! Iterative PageRank
//!
//! Power iteration of
//!
//! ```text
//! next[p] = (1-d)/N
//!         + d * sum_{q -> p} current[q] / |out(q)|
//!         + d * sum_{q dangling} current[q] / N
//! ```
//!
//! until no page moves by `tolerance` or more. Rank held by dangling pages
//! is spread over every page each round so the total stays at one.

use super::{ensure_non_empty, max_abs_diff, uniform, validate_damping, RankVector};
use crate::error::{LinkRankError, Result};
use crate::graph::LinkGraph;

/// Default per-page convergence tolerance
pub const DEFAULT_TOLERANCE: f64 = 0.001;

/// Iteration cap guarding against non-convergence
pub const DEFAULT_MAX_ITERATIONS: usize = 10_000;

/// Result of an iterative run
#[derive(Debug, Clone)]
pub struct IterationReport {
    pub ranks: RankVector,
    /// Number of iterations performed
    pub iterations: usize,
    /// Largest per-page change in the last iteration
    pub delta: f64,
    /// False when the iteration cap was hit first
    pub converged: bool,
}

/// Power-iteration PageRank solver
#[derive(Debug, Clone)]
pub struct IterativeSolver {
    /// Damping factor (typically 0.85)
    pub damping: f64,
    /// Per-page convergence tolerance
    pub tolerance: f64,
    /// Maximum number of iterations
    pub max_iterations: usize,
}

impl Default for IterativeSolver {
    fn default() -> Self {
        Self {
            damping: crate::DEFAULT_DAMPING,
            tolerance: DEFAULT_TOLERANCE,
            max_iterations: DEFAULT_MAX_ITERATIONS,
        }
    }
}

impl IterativeSolver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_damping(mut self, damping: f64) -> Self {
        self.damping = damping;
        self
    }

    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    fn validate(&self) -> Result<()> {
        validate_damping(self.damping)?;
        if !(self.tolerance.is_finite() && self.tolerance > 0.0) {
            return Err(LinkRankError::InvalidInput(format!(
                "tolerance must be a positive number, got {}",
                self.tolerance
            )));
        }
        if self.max_iterations == 0 {
            return Err(LinkRankError::InvalidInput(
                "max_iterations must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    /// Run to convergence or to the iteration cap.
    ///
    /// Hitting the cap is not an error: the report comes back with
    /// `converged = false` and a warning is logged.
    pub fn run(&self, graph: &LinkGraph) -> Result<IterationReport> {
        ensure_non_empty(graph)?;
        self.validate()?;

        let n = graph.len() as f64;
        let teleport = (1.0 - self.damping) / n;
        let dangling = graph.dangling_pages();

        let mut current = uniform(graph.len());
        let mut next = vec![0.0; graph.len()];
        let mut iterations = 0;
        let mut delta = f64::INFINITY;
        let mut converged = false;

        while iterations < self.max_iterations {
            iterations += 1;

            let dangling_mass: f64 = dangling.iter().map(|q| current[q.index()]).sum();
            let dangling_share = self.damping * dangling_mass / n;

            for page in graph.pages() {
                let inbound: f64 = graph
                    .in_links(page)
                    .iter()
                    .map(|&q| current[q.index()] / graph.out_degree(q) as f64)
                    .sum();
                next[page.index()] = teleport + self.damping * inbound + dangling_share;
            }

            delta = max_abs_diff(&current, &next);
            std::mem::swap(&mut current, &mut next);

            if delta < self.tolerance {
                converged = true;
                break;
            }
        }

        if converged {
            tracing::debug!(
                "Iteration converged after {} rounds (delta {:.3e})",
                iterations,
                delta
            );
        } else {
            tracing::warn!(
                "Iteration stopped at cap of {} rounds without converging (delta {:.3e})",
                iterations,
                delta
            );
        }

        Ok(IterationReport {
            ranks: RankVector::new(graph, current),
            iterations,
            delta,
            converged,
        })
    }

    /// Like [`IterativeSolver::run`], but hitting the cap is an error.
    pub fn run_strict(&self, graph: &LinkGraph) -> Result<RankVector> {
        let report = self.run(graph)?;
        if report.converged {
            Ok(report.ranks)
        } else {
            Err(LinkRankError::IterationCapExceeded {
                iterations: report.iterations,
                delta: report.delta,
            })
        }
    }
}

/// Iterate with the default iteration cap.
pub fn iterate_rank(graph: &LinkGraph, damping: f64, tolerance: f64) -> Result<IterationReport> {
    IterativeSolver::new()
        .with_damping(damping)
        .with_tolerance(tolerance)
        .run(graph)
}

/// Iterate with the default iteration cap, failing if it is reached.
pub fn iterate_rank_strict(graph: &LinkGraph, damping: f64, tolerance: f64) -> Result<RankVector> {
    IterativeSolver::new()
        .with_damping(damping)
        .with_tolerance(tolerance)
        .run_strict(graph)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn two_cycle() -> LinkGraph {
        LinkGraph::from_adjacency([("A", vec!["B"]), ("B", vec!["A"])])
    }

    fn three_pages() -> LinkGraph {
        LinkGraph::from_adjacency([("A", vec!["B"]), ("B", vec!["A", "C"]), ("C", vec!["A"])])
    }

    #[test]
    fn test_symmetric_cycle_is_even() {
        let report = iterate_rank(&two_cycle(), 0.85, DEFAULT_TOLERANCE).unwrap();

        assert!(report.converged);
        assert!((report.ranks.get("A").unwrap() - 0.5).abs() < 1e-12);
        assert!((report.ranks.get("B").unwrap() - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_most_linked_page_ranks_highest() {
        let graph = three_pages();
        let report = iterate_rank(&graph, 0.85, DEFAULT_TOLERANCE).unwrap();
        let a = report.ranks.get("A").unwrap();

        assert!(a > report.ranks.get("B").unwrap());
        assert!(a > report.ranks.get("C").unwrap());
        assert!((report.ranks.sum() - 1.0).abs() <= 3.0 * DEFAULT_TOLERANCE);
    }

    #[test]
    fn test_single_dangling_page() {
        let graph = LinkGraph::from_adjacency([("only.html", Vec::<&str>::new())]);
        let report = iterate_rank(&graph, 0.85, DEFAULT_TOLERANCE).unwrap();

        assert!(report.converged);
        assert!((report.ranks.get("only.html").unwrap() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_dangling_mass_is_redistributed() {
        // without redistribution the sink would leak rank every round
        let graph = LinkGraph::from_adjacency([
            ("hub", vec!["sink"]),
            ("a", vec!["hub"]),
            ("sink", vec![]),
        ]);
        let report = iterate_rank(&graph, 0.85, 1e-10).unwrap();

        assert!((report.ranks.sum() - 1.0).abs() < 1e-8);
        assert!(report.ranks.get("sink").unwrap() > report.ranks.get("a").unwrap());
    }

    #[test]
    fn test_deterministic() {
        let graph = three_pages();
        let first = iterate_rank(&graph, 0.85, DEFAULT_TOLERANCE).unwrap();
        let second = iterate_rank(&graph, 0.85, DEFAULT_TOLERANCE).unwrap();

        assert_eq!(first.ranks, second.ranks);
        assert_eq!(first.iterations, second.iterations);
    }

    #[test]
    fn test_iteration_cap_is_reported() {
        let graph = three_pages();
        let solver = IterativeSolver::new()
            .with_tolerance(1e-300)
            .with_max_iterations(2);

        let report = solver.run(&graph).unwrap();
        assert_eq!(report.iterations, 2);
        assert!(!report.converged);
        assert_eq!(report.ranks.len(), 3);

        let err = solver.run_strict(&graph).unwrap_err();
        assert!(matches!(
            err,
            LinkRankError::IterationCapExceeded { iterations: 2, .. }
        ));
    }

    #[test]
    fn test_rejects_invalid_input() {
        let graph = three_pages();
        assert!(matches!(
            iterate_rank(&LinkGraph::default(), 0.85, 0.001),
            Err(LinkRankError::EmptyGraph)
        ));
        assert!(iterate_rank(&graph, 0.85, 0.0).is_err());
        assert!(iterate_rank(&graph, -0.1, 0.001).is_err());
        assert!(IterativeSolver::new()
            .with_max_iterations(0)
            .run(&graph)
            .is_err());
    }

    #[test]
    fn test_known_values() {
        // 1 -> 2, 2 -> {1, 3}, 3 -> {2, 4}, 4 -> 2
        let graph = LinkGraph::from_adjacency([
            ("1", vec!["2"]),
            ("2", vec!["1", "3"]),
            ("3", vec!["2", "4"]),
            ("4", vec!["2"]),
        ]);
        let report = iterate_rank(&graph, 0.85, 1e-12).unwrap();

        let r = |name: &str| report.ranks.get(name).unwrap();
        assert!((r("1") - r("3")).abs() < 1e-9);
        assert!(r("2") > r("1"));
        assert!(r("4") < r("1"));
        assert!((report.ranks.sum() - 1.0).abs() < 1e-9);
    }

    proptest! {
        #[test]
        fn prop_sums_to_one_within_tolerance(
            rows in prop::collection::vec(prop::collection::vec(0usize..10, 0..5), 1..10),
            damping in 0.05f64..0.95,
            tolerance in 1e-6f64..1e-2,
        ) {
            let n = rows.len();
            let graph = LinkGraph::from_adjacency(rows.into_iter().enumerate().map(|(i, targets)| {
                (
                    format!("p{}", i),
                    targets
                        .into_iter()
                        .filter(|t| *t < n)
                        .map(|t| format!("p{}", t))
                        .collect::<Vec<_>>(),
                )
            }));

            let report = iterate_rank(&graph, damping, tolerance).unwrap();
            prop_assert!(report.converged);
            prop_assert!(report.ranks.scores().iter().all(|&r| r >= 0.0));
            prop_assert!((report.ranks.sum() - 1.0).abs() <= n as f64 * tolerance);
        }
    }
}
