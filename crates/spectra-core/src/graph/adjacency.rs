//! The attributed adjacency graph.
//!
//! # Edge Resolution
//!
//! Edges arrive as `(src_label, dst_label)` pairs. Each label resolves to the
//! first vertex carrying it. A label that matches no vertex is not fatal: a
//! bare vertex is synthesized for it, a `warn!` is emitted, and its index is
//! recorded in [`AdjacencyGraph::synthesized`] so callers can track data
//! quality without a tracing subscriber.

use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;

use fixedbitset::FixedBitSet;
use tracing::warn;

use crate::error::SpectraError;
use crate::graph::matrix::AdjacencyMatrix;
use crate::graph::vertex::{Attributes, Vertex};

/// Undirected, loop-free graph over labelled, attributed vertices.
///
/// Invariants: the matrix side equals `order`, the matrix is symmetric, no
/// diagonal entry is set, and `vertices[i].index == i`.
#[derive(Debug, Clone)]
pub struct AdjacencyGraph<L> {
    vertices: Vec<Vertex<L>>,
    matrix: AdjacencyMatrix,
    synthesized: Vec<usize>,
}

impl<L> Default for AdjacencyGraph<L> {
    fn default() -> Self {
        Self {
            vertices: Vec::new(),
            matrix: AdjacencyMatrix::new(0),
            synthesized: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Copy)]
enum Endpoint {
    Source,
    Destination,
}

impl Endpoint {
    const fn as_str(self) -> &'static str {
        match self {
            Self::Source => "src",
            Self::Destination => "dst",
        }
    }
}

// ---------------------------------------------------------------------------
// Index-based operations
// ---------------------------------------------------------------------------

impl<L> AdjacencyGraph<L> {
    /// Number of vertices.
    #[must_use]
    pub fn order(&self) -> usize {
        self.vertices.len()
    }

    /// Number of undirected edges.
    #[must_use]
    pub fn size(&self) -> usize {
        self.matrix.count_ones() / 2
    }

    /// All vertices in index order.
    #[must_use]
    pub fn vertices(&self) -> &[Vertex<L>] {
        &self.vertices
    }

    /// Vertex at `index`, if any.
    #[must_use]
    pub fn vertex(&self, index: usize) -> Option<&Vertex<L>> {
        self.vertices.get(index)
    }

    /// The backing adjacency matrix.
    #[must_use]
    pub const fn matrix(&self) -> &AdjacencyMatrix {
        &self.matrix
    }

    /// Indices of vertices that were created implicitly because an edge
    /// referenced an unknown label.
    #[must_use]
    pub fn synthesized(&self) -> &[usize] {
        &self.synthesized
    }

    /// Whether vertices `a` and `b` share an edge. A vertex is never adjacent
    /// to itself.
    ///
    /// # Panics
    ///
    /// Panics if either index is outside `0..order`.
    #[must_use]
    pub fn is_adjacent(&self, a: usize, b: usize) -> bool {
        a != b && self.matrix.get(a, b)
    }

    /// Indices adjacent to `index`, ascending.
    ///
    /// # Panics
    ///
    /// Panics if `index` is outside `0..order`.
    #[must_use]
    pub fn neighbors(&self, index: usize) -> Vec<usize> {
        self.matrix.row(index).ones().collect()
    }

    /// Neighbourhood of `index` as a bitset over `0..order`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is outside `0..order`.
    #[must_use]
    pub fn neighbor_set(&self, index: usize) -> &FixedBitSet {
        self.matrix.row(index)
    }

    /// Number of neighbours of `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is outside `0..order`.
    #[must_use]
    pub fn degree(&self, index: usize) -> usize {
        self.matrix.row(index).count_ones(..)
    }

    /// Connect `a` and `b`. Returns `Ok(true)` if the edge is new and
    /// `Ok(false)` if it already existed or `a == b`.
    ///
    /// # Errors
    ///
    /// Returns [`SpectraError::VertexOutOfRange`] if either index is not a
    /// vertex of this graph.
    pub fn add_edge(&mut self, a: usize, b: usize) -> Result<bool, SpectraError> {
        self.check_index(a)?;
        self.check_index(b)?;
        if a == b || self.matrix.get(a, b) {
            return Ok(false);
        }
        self.matrix.set(a, b, true);
        self.matrix.set(b, a, true);
        Ok(true)
    }

    /// Remove every edge touching `index`. The vertex itself stays.
    ///
    /// # Errors
    ///
    /// Returns [`SpectraError::VertexOutOfRange`] if `index` is not a vertex
    /// of this graph.
    pub fn clear_edges(&mut self, index: usize) -> Result<(), SpectraError> {
        self.check_index(index)?;
        for other in self.neighbors(index) {
            self.matrix.set(other, index, false);
        }
        self.matrix.clear_row(index);
        Ok(())
    }

    /// Append a bare vertex (no attributes, weight 0) and return its index.
    pub fn add_vertex(&mut self, label: L) -> usize {
        let index = self.vertices.len();
        self.vertices.push(Vertex::bare(index, label));
        self.matrix.grow(1);
        index
    }

    pub(crate) fn with_vertices<I>(vertices: I) -> Self
    where
        I: IntoIterator<Item = (L, Attributes, f64)>,
    {
        let vertices: Vec<Vertex<L>> = vertices
            .into_iter()
            .enumerate()
            .map(|(index, (label, attributes, weight))| Vertex {
                index,
                label,
                attributes,
                weight,
            })
            .collect();
        let matrix = AdjacencyMatrix::new(vertices.len());
        Self {
            vertices,
            matrix,
            synthesized: Vec::new(),
        }
    }

    /// Set `a -- b` without bounds errors. Used by builders that produce
    /// indices themselves.
    pub(crate) fn connect(&mut self, a: usize, b: usize) {
        debug_assert!(a != b, "self loop {a}");
        self.matrix.set(a, b, true);
        self.matrix.set(b, a, true);
    }

    fn check_index(&self, index: usize) -> Result<(), SpectraError> {
        if index < self.order() {
            Ok(())
        } else {
            Err(SpectraError::VertexOutOfRange {
                index,
                order: self.order(),
            })
        }
    }
}

// ---------------------------------------------------------------------------
// Label-based operations
// ---------------------------------------------------------------------------

impl<L> AdjacencyGraph<L>
where
    L: Clone + Eq + Hash + fmt::Debug,
{
    /// Build a graph from `(label, attributes)` vertices and `(label, label)`
    /// edges.
    ///
    /// Vertices receive indices in input order. Edges naming a label absent
    /// from the vertex list synthesize a bare vertex (see the module docs).
    /// Self-loop edges are ignored with a warning; duplicate edges collapse.
    pub fn init<V, E>(vertices: V, edges: E) -> Self
    where
        V: IntoIterator<Item = (L, Attributes)>,
        E: IntoIterator<Item = (L, L)>,
    {
        let mut graph = Self::with_vertices(
            vertices
                .into_iter()
                .map(|(label, attributes)| (label, attributes, 0.0)),
        );
        graph.connect_labels(edges);
        graph
    }

    /// Index of the first vertex whose label equals `label`.
    #[must_use]
    pub fn vertex_by_label(&self, label: &L) -> Option<usize> {
        self.vertices
            .iter()
            .find(|v| &v.label == label)
            .map(|v| v.index)
    }

    /// Like [`vertex_by_label`](Self::vertex_by_label) but fails on a miss.
    ///
    /// # Errors
    ///
    /// Returns [`SpectraError::UnknownLabel`] when no vertex carries `label`.
    pub fn require_label(&self, label: &L) -> Result<usize, SpectraError> {
        self.vertex_by_label(label)
            .ok_or_else(|| SpectraError::UnknownLabel {
                label: format!("{label:?}"),
            })
    }

    /// Whether the vertices labelled `a` and `b` share an edge.
    ///
    /// Returns `None` if either label is unknown and `Some(false)` when both
    /// labels resolve to the same vertex.
    #[must_use]
    pub fn adjacent(&self, a: &L, b: &L) -> Option<bool> {
        let ia = self.vertex_by_label(a)?;
        let ib = self.vertex_by_label(b)?;
        Some(self.is_adjacent(ia, ib))
    }

    fn connect_labels<E>(&mut self, edges: E)
    where
        E: IntoIterator<Item = (L, L)>,
    {
        let mut lookup: HashMap<L, usize> = HashMap::with_capacity(self.vertices.len());
        for vertex in &self.vertices {
            lookup.entry(vertex.label.clone()).or_insert(vertex.index);
        }

        let start_order = self.order();
        let mut resolved = Vec::new();
        for (src, dst) in edges {
            let s = self.resolve(&mut lookup, src, Endpoint::Source);
            let d = self.resolve(&mut lookup, dst, Endpoint::Destination);
            resolved.push((s, d));
        }

        let new_vertices = self.order() - start_order;
        if new_vertices > 0 {
            self.matrix.grow(new_vertices);
        }

        for (s, d) in resolved {
            if s == d {
                warn!(
                    vertex = ?self.vertices[s].label,
                    "ignoring self-loop edge"
                );
                continue;
            }
            self.connect(s, d);
        }
    }

    fn resolve(&mut self, lookup: &mut HashMap<L, usize>, label: L, end: Endpoint) -> usize {
        if let Some(&index) = lookup.get(&label) {
            return index;
        }
        warn!(
            endpoint = end.as_str(),
            label = ?label,
            "unknown edge vertex added"
        );
        let index = self.vertices.len();
        self.vertices.push(Vertex::bare(index, label.clone()));
        self.synthesized.push(index);
        lookup.insert(label, index);
        index
    }
}

impl<L> fmt::Display for AdjacencyGraph<L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.matrix)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn attrs(items: &[&str]) -> Attributes {
        items.iter().map(|s| (*s).to_string()).collect()
    }

    fn path3() -> AdjacencyGraph<&'static str> {
        AdjacencyGraph::init(
            [
                ("A1", attrs(&["a"])),
                ("A2", attrs(&["b", "a"])),
                ("A3", attrs(&["a", "c"])),
            ],
            [("A1", "A2"), ("A2", "A3")],
        )
    }

    #[test]
    fn init_assigns_indices_in_order() {
        let g = path3();
        assert_eq!(g.order(), 3);
        assert_eq!(g.size(), 2);
        for (i, v) in g.vertices().iter().enumerate() {
            assert_eq!(v.index, i);
        }
        assert_eq!(g.vertex_by_label(&"A3"), Some(2));
        assert!(g.synthesized().is_empty());
        assert!(g.matrix().is_symmetric());
    }

    #[test]
    fn adjacency_is_symmetric_and_loop_free() {
        let g = path3();
        assert_eq!(g.adjacent(&"A1", &"A2"), Some(true));
        assert_eq!(g.adjacent(&"A2", &"A1"), Some(true));
        assert_eq!(g.adjacent(&"A1", &"A3"), Some(false));
        assert_eq!(g.adjacent(&"A2", &"A2"), Some(false));
    }

    #[test]
    fn unknown_labels_report_none() {
        let g = path3();
        assert_eq!(g.vertex_by_label(&"Z"), None);
        assert_eq!(g.adjacent(&"A1", &"Z"), None);
        assert!(matches!(
            g.require_label(&"Z"),
            Err(SpectraError::UnknownLabel { .. })
        ));
    }

    #[test]
    fn neighbors_are_ascending() {
        let g = path3();
        assert_eq!(g.neighbors(1), vec![0, 2]);
        assert_eq!(g.neighbors(0), vec![1]);
        assert_eq!(g.degree(1), 2);
    }

    #[test]
    fn edge_to_unknown_label_synthesizes_vertex() {
        let g = AdjacencyGraph::init([("A", attrs(&["x"]))], [("A", "B"), ("C", "A")]);

        assert_eq!(g.order(), 3);
        assert_eq!(g.synthesized(), &[1, 2]);
        assert_eq!(g.matrix().side(), 3);
        assert_eq!(g.adjacent(&"A", &"B"), Some(true));
        assert_eq!(g.adjacent(&"C", &"A"), Some(true));

        let b = g.vertex(1).expect("synthesized vertex");
        assert_eq!(b.label, "B");
        assert!(b.attributes.is_empty());
        assert!(b.weight.abs() < f64::EPSILON);
    }

    #[test]
    fn self_loops_and_duplicates_are_dropped() {
        let g = AdjacencyGraph::init(
            [("A", attrs(&[])), ("B", attrs(&[]))],
            [("A", "A"), ("A", "B"), ("B", "A")],
        );
        assert_eq!(g.size(), 1);
        assert!(!g.matrix().get(0, 0));
    }

    #[test]
    fn duplicate_labels_resolve_to_first() {
        let g = AdjacencyGraph::init(
            [("A", attrs(&[])), ("A", attrs(&[])), ("B", attrs(&[]))],
            [("A", "B")],
        );
        assert_eq!(g.vertex_by_label(&"A"), Some(0));
        assert!(g.is_adjacent(0, 2));
        assert!(!g.is_adjacent(1, 2));
    }

    #[test]
    fn add_vertex_then_edge() {
        let mut g = path3();
        let d = g.add_vertex("A4");
        assert_eq!(d, 3);
        assert_eq!(g.order(), 4);
        assert_eq!(g.matrix().side(), 4);

        assert_eq!(g.add_edge(2, 3), Ok(true));
        assert_eq!(g.add_edge(3, 2), Ok(false), "already present");
        assert_eq!(g.add_edge(3, 3), Ok(false), "self loop ignored");
        assert_eq!(
            g.add_edge(3, 9),
            Err(SpectraError::VertexOutOfRange { index: 9, order: 4 })
        );
        assert_eq!(g.size(), 3);
    }

    #[test]
    fn clear_edges_keeps_symmetry() {
        let mut g = path3();
        g.clear_edges(1).expect("vertex exists");
        assert_eq!(g.size(), 0);
        assert_eq!(g.order(), 3);
        assert!(g.matrix().is_symmetric());
    }

    #[test]
    fn empty_graph() {
        let g: AdjacencyGraph<&str> = AdjacencyGraph::init([], []);
        assert_eq!(g.order(), 0);
        assert_eq!(g.size(), 0);
        assert_eq!(g.to_string(), "  ");
    }

    #[test]
    fn display_is_matrix() {
        let g = AdjacencyGraph::init([("A", attrs(&[])), ("B", attrs(&[]))], [("A", "B")]);
        assert_eq!(g.to_string(), "  0 1\n0 0 1\n1 1 0");
    }
}
