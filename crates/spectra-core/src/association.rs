//! Association (modular-product) graph of two attributed graphs.
//!
//! # Construction
//!
//! For source graphs `g1` and `g2`:
//!
//! 1. Every ordered pair `(v1, v2)` becomes one vertex labelled
//!    `(v1.label, v2.label)`, weighted by the Jaccard similarity of the two
//!    attribute sets. The pair `(i, j)` gets index `i * g2.order() + j`.
//! 2. Two pair vertices `(a1, a2)` and `(b1, b2)` are joined iff the labels
//!    differ on both sides (`a1 != b1`, `a2 != b2`) and
//!    `g1.adjacent(a1, b1) == g2.adjacent(a2, b2)`: the source edges are
//!    either both present or both absent. Labels resolve to the first vertex
//!    carrying them, so repeated labels never pair with each other.
//!
//! A clique is then a set of pairings that is injective on both sides and
//! preserves adjacency and non-adjacency, so the maximum common structure of
//! `g1` and `g2` is a maximum clique here.
//!
//! # Cost
//!
//! The vertex set is `|V1|·|V2|` and edge derivation inspects every pair of
//! those, so construction is O((|V1|·|V2|)²). This is the dominant cost of a
//! similarity computation. No asymptotic shortcut is attempted; callers must
//! bound input sizes (see
//! [`SimilarityConfig::max_association_order`](crate::SimilarityConfig)).

use std::collections::{HashMap, HashSet};
use std::fmt;
use std::hash::Hash;

use tracing::{debug, instrument};

use crate::clique::{Clique, CliqueSet};
use crate::graph::{AdjacencyGraph, Attributes, jaccard};

/// The association graph of `g1` (labels `A`) and `g2` (labels `B`).
///
/// Borrows nothing from its sources; it lives for one comparison.
#[derive(Debug, Clone)]
pub struct AssociationGraph<A, B> {
    graph: AdjacencyGraph<(A, B)>,
    pairs: Vec<(usize, usize)>,
    edges: Vec<(usize, usize)>,
    g1_order: usize,
    g2_order: usize,
}

impl<A, B> AssociationGraph<A, B>
where
    A: Clone + Eq + Hash + fmt::Debug,
    B: Clone + Eq + Hash + fmt::Debug,
{
    /// Build the association graph of `g1` and `g2`. Neither source is
    /// modified.
    #[instrument(skip_all, fields(g1 = g1.order(), g2 = g2.order()))]
    #[must_use]
    pub fn associate(g1: &AdjacencyGraph<A>, g2: &AdjacencyGraph<B>) -> Self {
        let (vertices, pairs) = combine_vertices(g1, g2);
        let edges = find_edges(&pairs, g1, g2);

        let mut graph = AdjacencyGraph::with_vertices(vertices);
        for &(a, b) in &edges {
            graph.connect(a, b);
        }

        debug!(
            order = graph.order(),
            size = edges.len(),
            "association graph built"
        );

        Self {
            graph,
            pairs,
            edges,
            g1_order: g1.order(),
            g2_order: g2.order(),
        }
    }

    /// Distinct first-graph labels covered by `clique`.
    #[must_use]
    pub fn matched_count(&self, clique: &Clique) -> usize {
        clique
            .iter()
            .filter_map(|idx| self.graph.vertex(idx))
            .map(|v| &v.label.0)
            .collect::<HashSet<&A>>()
            .len()
    }

    /// Labels of the pairings in `clique`, in member order.
    #[must_use]
    pub fn matching(&self, clique: &Clique) -> Vec<(A, B)> {
        clique
            .iter()
            .filter_map(|idx| self.graph.vertex(idx))
            .map(|v| v.label.clone())
            .collect()
    }
}

impl<A, B> AssociationGraph<A, B> {
    /// The derived graph the clique search runs on.
    #[must_use]
    pub const fn graph(&self) -> &AdjacencyGraph<(A, B)> {
        &self.graph
    }

    /// Order of the first source graph.
    #[must_use]
    pub const fn g1_order(&self) -> usize {
        self.g1_order
    }

    /// Order of the second source graph.
    #[must_use]
    pub const fn g2_order(&self) -> usize {
        self.g2_order
    }

    /// Source indices `(i, j)` combined by association vertex `index`.
    #[must_use]
    pub fn pair(&self, index: usize) -> Option<(usize, usize)> {
        self.pairs.get(index).copied()
    }

    /// Edges used to build the graph, as `(lower, higher)` index pairs.
    #[must_use]
    pub fn edges(&self) -> &[(usize, usize)] {
        &self.edges
    }

    /// Sum of the weights of the clique's members.
    #[must_use]
    pub fn clique_weight(&self, clique: &Clique) -> f64 {
        clique
            .iter()
            .filter_map(|idx| self.graph.vertex(idx))
            .map(|v| v.weight)
            .sum()
    }

    /// Weight of every clique in `cliques`, in discovery order.
    #[must_use]
    pub fn clique_weights(&self, cliques: &CliqueSet) -> Vec<f64> {
        cliques.iter().map(|c| self.clique_weight(c)).collect()
    }
}

impl<A, B> fmt::Display for AssociationGraph<A, B>
where
    A: fmt::Display,
    B: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rendered: Vec<String> = self
            .graph
            .vertices()
            .iter()
            .map(|v| format!("[{}]({}, {})", v.index, v.label.0, v.label.1))
            .collect();
        write!(f, "{}", rendered.join(" "))
    }
}

// ---------------------------------------------------------------------------
// Construction helpers
// ---------------------------------------------------------------------------

type PairVertex<A, B> = ((A, B), Attributes, f64);

fn combine_vertices<A, B>(
    g1: &AdjacencyGraph<A>,
    g2: &AdjacencyGraph<B>,
) -> (Vec<PairVertex<A, B>>, Vec<(usize, usize)>)
where
    A: Clone,
    B: Clone,
{
    let capacity = g1.order() * g2.order();
    let mut vertices = Vec::with_capacity(capacity);
    let mut pairs = Vec::with_capacity(capacity);
    for v1 in g1.vertices() {
        for v2 in g2.vertices() {
            let weight = jaccard(&v1.attributes, &v2.attributes);
            vertices.push((
                (v1.label.clone(), v2.label.clone()),
                Attributes::new(),
                weight,
            ));
            pairs.push((v1.index, v2.index));
        }
    }
    (vertices, pairs)
}

fn find_edges<A, B>(
    pairs: &[(usize, usize)],
    g1: &AdjacencyGraph<A>,
    g2: &AdjacencyGraph<B>,
) -> Vec<(usize, usize)>
where
    A: Eq + Hash,
    B: Eq + Hash,
{
    let first1 = first_by_label(g1);
    let first2 = first_by_label(g2);

    let mut edges = Vec::new();
    for (u, &(a1, a2)) in pairs.iter().enumerate() {
        let (a1, a2) = (first1[a1], first2[a2]);
        for (offset, &(b1, b2)) in pairs[u + 1..].iter().enumerate() {
            let (b1, b2) = (first1[b1], first2[b2]);
            if a1 == b1 || a2 == b2 {
                continue;
            }
            if g1.is_adjacent(a1, b1) == g2.is_adjacent(a2, b2) {
                edges.push((u, u + 1 + offset));
            }
        }
    }
    edges
}

/// For each vertex, the index of the first vertex carrying the same label.
fn first_by_label<L: Eq + Hash>(g: &AdjacencyGraph<L>) -> Vec<usize> {
    let mut first: HashMap<&L, usize> = HashMap::with_capacity(g.order());
    g.vertices()
        .iter()
        .map(|v| *first.entry(&v.label).or_insert(v.index))
        .collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
