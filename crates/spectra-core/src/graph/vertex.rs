//! Vertex records and attribute-set similarity.

use std::collections::BTreeSet;

/// Opaque tags describing a vertex. Only used for weight computation.
pub type Attributes = BTreeSet<String>;

/// A vertex of an [`AdjacencyGraph`](super::AdjacencyGraph).
#[derive(Debug, Clone, PartialEq)]
pub struct Vertex<L> {
    /// Dense identity, `0..order`, assigned at creation.
    pub index: usize,
    /// Caller-supplied identifier.
    pub label: L,
    /// Tags describing the vertex.
    pub attributes: Attributes,
    /// Weight in `[0, 1]`. Association vertices carry the Jaccard similarity
    /// of the two attribute sets they combine; base vertices default to 0.
    pub weight: f64,
}

impl<L> Vertex<L> {
    /// Create an unweighted vertex with no attributes.
    #[must_use]
    pub fn bare(index: usize, label: L) -> Self {
        Self {
            index,
            label,
            attributes: Attributes::new(),
            weight: 0.0,
        }
    }
}

/// Jaccard similarity: `|A ∩ B| / |A ∪ B|`.
///
/// Returns `0.0` if both sets are empty (to avoid 0/0).
///
/// # Examples
///
/// ```
/// use std::collections::BTreeSet;
/// use spectra_core::graph::jaccard;
///
/// let a: BTreeSet<&str> = ["x", "y", "z"].into_iter().collect();
/// let b: BTreeSet<&str> = ["y", "z", "w"].into_iter().collect();
/// // intersection = {"y","z"} (2), union = {"x","y","z","w"} (4)
/// assert!((jaccard(&a, &b) - 0.5).abs() < 1e-12);
/// ```
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn jaccard<T: Ord>(a: &BTreeSet<T>, b: &BTreeSet<T>) -> f64 {
    let intersection = a.intersection(b).count();
    let union_size = a.len() + b.len() - intersection;
    if union_size == 0 {
        0.0
    } else {
        intersection as f64 / union_size as f64
    }
}
