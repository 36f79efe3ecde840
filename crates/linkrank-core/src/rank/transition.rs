//! Random-surfer transition model
//!
//! From a page with out-links the surfer follows one of them with
//! probability `d` and jumps to any page with probability `1 - d`. From a
//! dangling page the next page is uniform over the whole graph; damping
//! plays no part there.

use super::{ensure_non_empty, validate_damping};
use crate::error::{LinkRankError, Result};
use crate::graph::{LinkGraph, PageId};
use rand::Rng;

/// Dense probability distribution indexed by [`PageId`]
pub type Distribution = Vec<f64>;

/// One row of the transition matrix, without materialising it.
#[derive(Debug, Clone, Copy)]
pub enum TransitionRow<'a> {
    /// Dangling page: `1/N` everywhere
    Uniform { pages: usize },
    /// `(1-d)/N` everywhere plus `d/|links|` on each out-link
    Damped {
        pages: usize,
        damping: f64,
        links: &'a [PageId],
    },
}

impl TransitionRow<'_> {
    fn pages(&self) -> usize {
        match *self {
            TransitionRow::Uniform { pages } | TransitionRow::Damped { pages, .. } => pages,
        }
    }

    /// Probability of moving to `target`
    pub fn probability(&self, target: PageId) -> f64 {
        match *self {
            TransitionRow::Uniform { pages } => 1.0 / pages as f64,
            TransitionRow::Damped {
                pages,
                damping,
                links,
            } => {
                let teleport = (1.0 - damping) / pages as f64;
                // out-links are stored in ascending id order
                if links.binary_search(&target).is_ok() {
                    teleport + damping / links.len() as f64
                } else {
                    teleport
                }
            }
        }
    }

    /// Materialise the full distribution
    pub fn to_distribution(&self) -> Distribution {
        match *self {
            TransitionRow::Uniform { pages } => vec![1.0 / pages as f64; pages],
            TransitionRow::Damped {
                pages,
                damping,
                links,
            } => {
                let mut distribution = vec![(1.0 - damping) / pages as f64; pages];
                let share = damping / links.len() as f64;
                for link in links {
                    distribution[link.index()] += share;
                }
                distribution
            }
        }
    }

    /// Draw the next page.
    ///
    /// Splits the draw into "follow a link" (probability `d`) and "jump
    /// anywhere" so a step costs O(1) instead of O(N). The resulting law is
    /// exactly [`TransitionRow::to_distribution`].
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> PageId {
        match *self {
            TransitionRow::Damped { damping, links, .. } if rng.gen::<f64>() < damping => {
                links[rng.gen_range(0..links.len())]
            }
            _ => PageId(rng.gen_range(0..self.pages()) as u32),
        }
    }
}

/// Transition row for `page`. The graph must be non-empty and contain `page`.
pub fn transition_row(graph: &LinkGraph, page: PageId, damping: f64) -> TransitionRow<'_> {
    let links = graph.out_links(page);
    if links.is_empty() {
        TransitionRow::Uniform { pages: graph.len() }
    } else {
        TransitionRow::Damped {
            pages: graph.len(),
            damping,
            links,
        }
    }
}

/// Probability distribution over the page visited after `page`.
pub fn transition(graph: &LinkGraph, page: PageId, damping: f64) -> Result<Distribution> {
    ensure_non_empty(graph)?;
    validate_damping(damping)?;
    if page.index() >= graph.len() {
        return Err(LinkRankError::InvalidInput(format!(
            "page {} is not part of a graph of {} pages",
            page.0,
            graph.len()
        )));
    }
    Ok(transition_row(graph, page, damping).to_distribution())
}
