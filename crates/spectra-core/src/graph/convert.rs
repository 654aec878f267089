//! Conversions between label edge lists and dense index edge lists.

use std::collections::{HashMap, HashSet};
use std::fmt::Debug;
use std::hash::Hash;

use crate::error::SpectraError;

/// Distinct labels of `edges`, in order of first appearance.
///
/// The position of a label in the returned list is its normalized index.
#[must_use]
pub fn vertices_from_edges<L>(edges: &[(L, L)]) -> Vec<L>
where
    L: Clone + Eq + Hash,
{
    let mut seen: HashSet<&L> = HashSet::new();
    let mut vertices = Vec::new();
    for (a, b) in edges {
        for label in [a, b] {
            if seen.insert(label) {
                vertices.push(label.clone());
            }
        }
    }
    vertices
}

/// Rewrite a label edge list as `(index, index)` pairs, where each index is
/// the label's position in `vertices`.
///
/// # Errors
///
/// Returns [`SpectraError::UnknownLabel`] for the first endpoint that does not
/// appear in `vertices`.
pub fn normalize_edges<L>(
    edges: &[(L, L)],
    vertices: &[L],
) -> Result<Vec<(usize, usize)>, SpectraError>
where
    L: Eq + Hash + Debug,
{
    let mut position: HashMap<&L, usize> = HashMap::with_capacity(vertices.len());
    for (idx, label) in vertices.iter().enumerate() {
        position.entry(label).or_insert(idx);
    }

    let lookup = |label: &L| {
        position
            .get(label)
            .copied()
            .ok_or_else(|| SpectraError::UnknownLabel {
                label: format!("{label:?}"),
            })
    };

    edges
        .iter()
        .map(|(a, b)| Ok((lookup(a)?, lookup(b)?)))
        .collect()
}
