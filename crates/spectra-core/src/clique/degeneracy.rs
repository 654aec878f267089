//! Degeneracy ordering.
//!
//! # Algorithm
//!
//! Every vertex sits in a bucket keyed by its residual degree (degree among
//! vertices not yet ordered). Repeatedly take the lowest-index vertex from the
//! lowest non-empty bucket, append it to the order, and move each of its
//! unordered neighbours one bucket down. The degeneracy number `k` is the
//! highest bucket ever taken from.
//!
//! The residual degree of a vertex when it is taken is exactly the number of
//! its neighbours that come later in the order, so `k` is also the maximum
//! forward degree of the ordering.

use std::collections::BTreeSet;

use fixedbitset::FixedBitSet;

use crate::graph::AdjacencyGraph;

/// A degeneracy ordering and the graph's degeneracy number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DegeneracyOrdering {
    /// The degeneracy number `k`.
    pub degeneracy: usize,
    /// Every vertex index exactly once.
    pub order: Vec<usize>,
}

impl DegeneracyOrdering {
    /// Number of neighbours of each vertex that come after it in the order,
    /// indexed by vertex.
    #[must_use]
    pub fn forward_degrees<L>(&self, graph: &AdjacencyGraph<L>) -> Vec<usize> {
        let mut position = vec![0; self.order.len()];
        for (pos, &v) in self.order.iter().enumerate() {
            position[v] = pos;
        }
        (0..self.order.len())
            .map(|v| {
                graph
                    .neighbor_set(v)
                    .ones()
                    .filter(|&n| position[n] > position[v])
                    .count()
            })
            .collect()
    }
}

/// Compute a degeneracy ordering of every vertex of `graph`.
///
/// Ties inside a bucket go to the lowest index, so the result is
/// deterministic.
#[must_use]
pub fn degeneracy_ordering<L>(graph: &AdjacencyGraph<L>) -> DegeneracyOrdering {
    let n = graph.order();
    let mut residual: Vec<usize> = (0..n).map(|v| graph.degree(v)).collect();
    let max_degree = residual.iter().copied().max().unwrap_or(0);

    let mut buckets: Vec<BTreeSet<usize>> = vec![BTreeSet::new(); max_degree + 1];
    for (v, &d) in residual.iter().enumerate() {
        buckets[d].insert(v);
    }

    let mut removed = FixedBitSet::with_capacity(n);
    let mut order = Vec::with_capacity(n);
    let mut degeneracy = 0;
    let mut low = 0;

    while order.len() < n {
        let Some(d) = (low..buckets.len()).find(|&d| !buckets[d].is_empty()) else {
            break;
        };
        let Some(v) = buckets[d].pop_first() else {
            break;
        };

        degeneracy = degeneracy.max(d);
        order.push(v);
        removed.insert(v);

        for w in graph.neighbor_set(v).ones() {
            if removed.contains(w) {
                continue;
            }
            let dw = residual[w];
            buckets[dw].remove(&w);
            residual[w] = dw - 1;
            buckets[dw - 1].insert(w);
        }
        // Neighbours drop by one bucket at most.
        low = d.saturating_sub(1);
    }

    DegeneracyOrdering { degeneracy, order }
}
