//! JSON graph documents.
//!
//! ```json
//! {
//!   "vertices": [{ "label": "A1", "attributes": ["a"] }],
//!   "edges": [["A1", "A2"]]
//! }
//! ```
//!
//! Both keys are optional. Edge endpoints missing from `vertices` are
//! synthesized by the graph (with a warning).

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use spectra_core::{AdjacencyGraph, Attributes};
use std::path::Path;
use tracing::debug;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GraphDocument {
    #[serde(default)]
    pub vertices: Vec<VertexDocument>,
    #[serde(default)]
    pub edges: Vec<(String, String)>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VertexDocument {
    pub label: String,
    #[serde(default)]
    pub attributes: Vec<String>,
}

impl GraphDocument {
    pub fn into_graph(self) -> AdjacencyGraph<String> {
        let vertices = self
            .vertices
            .into_iter()
            .map(|v| (v.label, v.attributes.into_iter().collect::<Attributes>()));
        AdjacencyGraph::init(vertices, self.edges)
    }
}

/// Read and build the graph stored at `path`.
pub fn load_graph(path: &Path) -> Result<AdjacencyGraph<String>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let document: GraphDocument = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse {}", path.display()))?;

    let graph = document.into_graph();
    debug!(
        path = %path.display(),
        order = graph.order(),
        size = graph.size(),
        synthesized = graph.synthesized().len(),
        "graph loaded"
    );
    Ok(graph)
}
