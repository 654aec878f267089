//! Attributed undirected graphs backed by a bitset adjacency matrix.
//!
//! # Overview
//!
//! An [`AdjacencyGraph`] owns an ordered list of [`Vertex`] records and a
//! square, symmetric, loop-free [`AdjacencyMatrix`]. Vertex indices are dense
//! (`0..order`) and stable for the lifetime of the graph; the matrix only
//! ever grows.
//!
//! Rows of the matrix are [`fixedbitset::FixedBitSet`]s, so the clique search
//! in [`crate::clique`] can intersect neighbourhoods without allocating
//! per-vertex sets.
//!
//! ## Typical Usage
//!
//! ```rust
//! use spectra_core::graph::{AdjacencyGraph, Attributes};
//!
//! let tags = |t: &[&str]| t.iter().map(|s| (*s).to_string()).collect::<Attributes>();
//! let g = AdjacencyGraph::init(
//!     [("A1", tags(&["a"])), ("A2", tags(&["a", "b"]))],
//!     [("A1", "A2")],
//! );
//!
//! assert_eq!(g.order(), 2);
//! assert_eq!(g.size(), 1);
//! assert_eq!(g.adjacent(&"A1", &"A2"), Some(true));
//! ```

pub mod adjacency;
pub mod convert;
pub mod matrix;
pub mod vertex;

pub use adjacency::AdjacencyGraph;
pub use convert::{normalize_edges, vertices_from_edges};
pub use matrix::AdjacencyMatrix;
pub use vertex::{Attributes, Vertex, jaccard};
