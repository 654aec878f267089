//! Similarity scoring from the maximum-weight maximal clique.
//!
//! # Scores
//!
//! Let `C` be the maximal clique of highest weight (sum of member vertex
//! weights; the first one discovered wins ties), and `m` the number of
//! distinct first-graph labels among its members.
//!
//! - **jaccard**: `m / (|V1| + |V2| − m)`, the Jaccard coefficient of the
//!   matched vertices against both source graphs.
//! - **weight**: `weight(C) / |V1|`.
//!
//! Both lie in `[0, 1]` for well-formed inputs. A zero denominator makes a
//! score undefined; it is reported as `None` rather than NaN or infinity.

use std::fmt;
use std::hash::Hash;

use tracing::debug;

use crate::association::AssociationGraph;
use crate::clique::{Clique, CliqueSet};
use crate::error::SpectraError;

/// Scores for one graph pair, plus the clique they were derived from.
#[derive(Debug, Clone, PartialEq)]
pub struct SimilarityScore {
    /// Jaccard coefficient of the matched vertex count. `None` if undefined.
    pub jaccard: Option<f64>,
    /// Maximum clique weight divided by the first graph's order. `None` if
    /// undefined.
    pub weight: Option<f64>,
    /// Distinct first-graph vertices covered by the winning clique.
    pub matched: usize,
    /// Weight of the winning clique.
    pub clique_weight: f64,
    /// The winning clique, as association-graph indices.
    pub clique: Clique,
    /// Source indices `(i, j)` paired by the winning clique, in member order.
    pub pairs: Vec<(usize, usize)>,
    pub g1_order: usize,
    pub g2_order: usize,
}

impl SimilarityScore {
    /// The Jaccard score.
    ///
    /// # Errors
    ///
    /// Returns [`SpectraError::UndefinedScore`] if `|V1| + |V2| − m` is zero.
    pub fn jaccard_score(&self) -> Result<f64, SpectraError> {
        self.jaccard.ok_or_else(|| SpectraError::UndefinedScore {
            score: "jaccard",
            numerator: count_as_f64(self.matched),
            denominator: 0,
        })
    }

    /// The weight score.
    ///
    /// # Errors
    ///
    /// Returns [`SpectraError::UndefinedScore`] if the first graph is empty.
    pub fn weight_score(&self) -> Result<f64, SpectraError> {
        self.weight.ok_or(SpectraError::UndefinedScore {
            score: "weight",
            numerator: self.clique_weight,
            denominator: 0,
        })
    }

    /// `(jaccard_score, weight_score)`.
    ///
    /// # Errors
    ///
    /// Returns [`SpectraError::UndefinedScore`] if either score is undefined.
    pub fn scores(&self) -> Result<(f64, f64), SpectraError> {
        Ok((self.jaccard_score()?, self.weight_score()?))
    }

    /// Whether the Jaccard score reaches `threshold`. With no threshold every
    /// defined score passes; an undefined score never does.
    #[must_use]
    pub fn passes(&self, threshold: Option<f64>) -> bool {
        match (self.jaccard, threshold) {
            (None, _) => false,
            (Some(_), None) => true,
            (Some(j), Some(t)) => j >= t,
        }
    }
}

impl fmt::Display for SimilarityScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let render =
            |s: Option<f64>| s.map_or_else(|| "undefined".to_string(), |v| format!("{v:.6}"));
        write!(f, "{}, {}", render(self.jaccard), render(self.weight))
    }
}

/// `matched / (g1_order + g2_order − matched)`, or `None` when the
/// denominator is zero.
#[must_use]
pub fn jaccard_coefficient(matched: usize, g1_order: usize, g2_order: usize) -> Option<f64> {
    let denominator = (g1_order + g2_order).checked_sub(matched)?;
    if denominator == 0 {
        return None;
    }
    Some(count_as_f64(matched) / count_as_f64(denominator))
}

/// `weight / g1_order`, or `None` when `g1_order` is zero.
#[must_use]
pub fn weight_ratio(weight: f64, g1_order: usize) -> Option<f64> {
    if g1_order == 0 {
        None
    } else {
        Some(weight / count_as_f64(g1_order))
    }
}

/// Score an association graph from its enumerated maximal cliques.
///
/// The clique of greatest weight wins; among equal weights the first in
/// discovery order is kept. An empty clique set scores as if it held the
/// empty clique.
#[must_use]
pub fn score<A, B>(assoc: &AssociationGraph<A, B>, cliques: &CliqueSet) -> SimilarityScore
where
    A: Clone + Eq + Hash + fmt::Debug,
    B: Clone + Eq + Hash + fmt::Debug,
{
    let mut best: Option<(&Clique, f64)> = None;
    for clique in cliques {
        let weight = assoc.clique_weight(clique);
        if best.is_none_or(|(_, w)| weight > w) {
            best = Some((clique, weight));
        }
    }
    let (clique, clique_weight) =
        best.map_or_else(|| (Clique::default(), 0.0), |(c, w)| (c.clone(), w));

    let matched = assoc.matched_count(&clique);
    let pairs = clique.iter().filter_map(|idx| assoc.pair(idx)).collect();
    let g1_order = assoc.g1_order();
    let g2_order = assoc.g2_order();
    debug!(
        clique_weight,
        matched,
        clique_size = clique.len(),
        "max-weight clique selected"
    );

    SimilarityScore {
        jaccard: jaccard_coefficient(matched, g1_order, g2_order),
        weight: weight_ratio(clique_weight, g1_order),
        matched,
        clique_weight,
        clique,
        pairs,
        g1_order,
        g2_order,
    }
}

#[allow(clippy::cast_precision_loss)]
const fn count_as_f64(n: usize) -> f64 {
    n as f64
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clique::{CliqueStrategy, find_cliques};
    use crate::graph::{AdjacencyGraph, Attributes};

    fn attrs(items: &[&str]) -> Attributes {
        items.iter().map(|s| (*s).to_string()).collect()
    }

    #[test]
    fn jaccard_coefficient_guards() {
        assert_eq!(jaccard_coefficient(0, 0, 0), None);
        assert_eq!(jaccard_coefficient(0, 0, 3), Some(0.0));
        assert_eq!(jaccard_coefficient(3, 3, 3), Some(1.0));
        let j = jaccard_coefficient(2, 3, 3).expect("defined");
        assert!((j - 0.5).abs() < 1e-12);
    }

    #[test]
    fn weight_ratio_guards() {
        assert_eq!(weight_ratio(1.0, 0), None);
        assert_eq!(weight_ratio(1.5, 3), Some(0.5));
    }

    #[test]
    fn identical_paths_score_one() {
        let g = AdjacencyGraph::init(
            [("A", attrs(&["x"])), ("B", attrs(&["y"])), ("C", attrs(&["z"]))],
            [("A", "B"), ("B", "C")],
        );
        let assoc = AssociationGraph::associate(&g, &g);
        let cliques = find_cliques(assoc.graph(), CliqueStrategy::Degeneracy);
        let s = score(&assoc, &cliques);

        assert_eq!(s.matched, 3);
        assert_eq!(s.pairs, vec![(0, 0), (1, 1), (2, 2)]);
        assert_eq!(s.scores(), Ok((1.0, 1.0)));
        assert_eq!(
            assoc.matching(&s.clique),
            vec![("A", "A"), ("B", "B"), ("C", "C")]
        );
    }

    #[test]
    fn first_max_weight_clique_wins_ties() {
        // No attributes: every clique weighs zero, so the first one found is kept.
        let g = AdjacencyGraph::init([("A", attrs(&[])), ("B", attrs(&[]))], [("A", "B")]);
        let assoc = AssociationGraph::associate(&g, &g);
        let cliques = find_cliques(assoc.graph(), CliqueStrategy::Pivot);
        let s = score(&assoc, &cliques);

        assert_eq!(&s.clique, &cliques.cliques()[0]);
        assert_eq!(s.weight, Some(0.0));
    }

    #[test]
    fn empty_graphs_are_undefined() {
        let empty: AdjacencyGraph<&str> = AdjacencyGraph::default();
        let assoc = AssociationGraph::associate(&empty, &empty);
        let cliques = find_cliques(assoc.graph(), CliqueStrategy::Naive);
        let s = score(&assoc, &cliques);

        assert_eq!(s.jaccard, None);
        assert_eq!(s.weight, None);
        assert!(matches!(
            s.jaccard_score(),
            Err(SpectraError::UndefinedScore { score: "jaccard", .. })
        ));
        assert!(matches!(
            s.weight_score(),
            Err(SpectraError::UndefinedScore { score: "weight", .. })
        ));
        assert!(!s.passes(None));
        assert_eq!(s.to_string(), "undefined, undefined");
    }

    #[test]
    fn empty_first_graph_defines_only_jaccard() {
        let empty: AdjacencyGraph<&str> = AdjacencyGraph::default();
        let g = AdjacencyGraph::init([("B", attrs(&["x"]))], []);
        let assoc = AssociationGraph::associate(&empty, &g);
        let s = score(&assoc, &find_cliques(assoc.graph(), CliqueStrategy::Degeneracy));

        assert_eq!(s.jaccard, Some(0.0));
        assert_eq!(s.weight, None);
    }

    #[test]
    fn threshold_filter() {
        let s = SimilarityScore {
            jaccard: Some(0.4),
            weight: Some(0.2),
            matched: 2,
            clique_weight: 0.6,
            clique: Clique::new(vec![0, 4]),
            pairs: vec![(0, 0), (1, 0)],
            g1_order: 3,
            g2_order: 4,
        };
        assert!(s.passes(None));
        assert!(s.passes(Some(0.4)));
        assert!(!s.passes(Some(0.5)));
        assert_eq!(s.to_string(), "0.400000, 0.200000");
    }
}
