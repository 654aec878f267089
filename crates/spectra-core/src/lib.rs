#![forbid(unsafe_code)]
//! spectra-core library.
//!
//! Structural similarity between two attributed graphs, computed as the
//! maximum-weight maximal clique of their association (modular-product)
//! graph.
//!
//! ## Pipeline
//!
//! ```text
//! (vertices, edges) ×2
//!        ↓  graph::AdjacencyGraph::init()
//! AdjacencyGraph ×2
//!        ↓  association::AssociationGraph::associate()
//! AssociationGraph (pairs of source vertices, consistency edges)
//!        ↓  clique::find_cliques()
//! CliqueSet (every maximal clique)
//!        ↓  score::score()
//! SimilarityScore (jaccard_score, weight_score)
//! ```
//!
//! [`similarity::similarity`] runs the whole pipeline with the size guard and
//! time budget from [`config::SimilarityConfig`].
//!
//! # Conventions
//!
//! - **Errors**: library operations return [`SpectraError`]; config loading
//!   uses `anyhow::Result`.
//! - **Logging**: Use `tracing` macros (`warn!`, `debug!`, `trace!`).

pub mod association;
pub mod clique;
pub mod config;
pub mod error;
pub mod graph;
pub mod score;
pub mod similarity;

pub use association::AssociationGraph;
pub use clique::{Clique, CliqueSet, CliqueStrategy, find_cliques, find_cliques_until};
pub use config::SimilarityConfig;
pub use error::{ErrorCode, SpectraError};
pub use graph::{AdjacencyGraph, Attributes, Vertex, jaccard};
pub use score::{SimilarityScore, score};
pub use similarity::similarity;
