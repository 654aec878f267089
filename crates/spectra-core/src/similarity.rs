//! End-to-end similarity of two graphs.
//!
//! Associate, enumerate, score. The size guard runs before any allocation
//! proportional to `|V1|·|V2|`; the time budget bounds only the clique search,
//! which is where pathological inputs spend their time.

use std::fmt;
use std::hash::Hash;
use std::time::Instant;

use tracing::{debug, instrument};

use crate::association::AssociationGraph;
use crate::clique::find_cliques_until;
use crate::config::SimilarityConfig;
use crate::error::SpectraError;
use crate::graph::AdjacencyGraph;
use crate::score::{SimilarityScore, score};

/// Compute the similarity of `g1` and `g2` under `config`.
///
/// # Errors
///
/// - [`SpectraError::AssociationTooLarge`] if `|V1|·|V2|` exceeds
///   `config.max_association_order`.
/// - [`SpectraError::DeadlineExceeded`] if `config.time_budget_ms` runs out
///   during the clique search.
#[instrument(skip_all, fields(g1 = g1.order(), g2 = g2.order(), strategy = %config.strategy))]
pub fn similarity<A, B>(
    g1: &AdjacencyGraph<A>,
    g2: &AdjacencyGraph<B>,
    config: &SimilarityConfig,
) -> Result<SimilarityScore, SpectraError>
where
    A: Clone + Eq + Hash + fmt::Debug,
    B: Clone + Eq + Hash + fmt::Debug,
{
    check_size(g1.order(), g2.order(), config.max_association_order)?;

    let started = Instant::now();
    let deadline = config.time_budget().map(|budget| started + budget);

    let assoc = AssociationGraph::associate(g1, g2);
    let cliques = find_cliques_until(assoc.graph(), config.strategy, deadline)?;
    let result = score(&assoc, &cliques);

    debug!(
        cliques = cliques.len(),
        elapsed_ms = started.elapsed().as_millis(),
        "similarity computed"
    );
    Ok(result)
}

fn check_size(g1_order: usize, g2_order: usize, limit: usize) -> Result<(), SpectraError> {
    match g1_order.checked_mul(g2_order) {
        Some(product) if product <= limit => Ok(()),
        _ => Err(SpectraError::AssociationTooLarge {
            g1_order,
            g2_order,
            limit,
        }),
    }
}
