#![allow(dead_code)]

use proptest::prelude::*;
use spectra_core::{AdjacencyGraph, Attributes};

pub fn attrs(items: &[&str]) -> Attributes {
    items.iter().map(|s| (*s).to_string()).collect()
}

/// A graph over vertices `0..n` with the given upper-triangle edge mask.
pub fn from_mask(n: usize, mask: &[bool], tags: Vec<Attributes>) -> AdjacencyGraph<usize> {
    let mut edges = Vec::new();
    let mut bits = mask.iter();
    for a in 0..n {
        for b in (a + 1)..n {
            if bits.next().copied().unwrap_or(false) {
                edges.push((a, b));
            }
        }
    }
    AdjacencyGraph::init((0..n).zip(tags), edges)
}

pub fn arb_attributes() -> impl Strategy<Value = Attributes> + Clone {
    prop::collection::btree_set("[a-e]", 0..4)
}

pub fn arb_graph(max_order: usize) -> impl Strategy<Value = AdjacencyGraph<usize>> {
    (0..=max_order).prop_flat_map(|n| {
        let pairs = n * n.saturating_sub(1) / 2;
        (
            Just(n),
            prop::collection::vec(any::<bool>(), pairs),
            prop::collection::vec(arb_attributes(), n),
        )
            .prop_map(|(n, mask, tags)| from_mask(n, &mask, tags))
    })
}

/// Like [`arb_graph`] but labels come from a three-letter alphabet, so
/// repeats are common. Edges are given by label and resolve to the first
/// vertex carrying it.
pub fn arb_labelled_graph(
    max_order: usize,
) -> impl Strategy<Value = AdjacencyGraph<String>> {
    (0..=max_order).prop_flat_map(|n| {
        let pairs = n * n.saturating_sub(1) / 2;
        (
            prop::collection::vec("[a-c]", n),
            prop::collection::vec(any::<bool>(), pairs),
            prop::collection::vec(arb_attributes(), n),
        )
            .prop_map(|(labels, mask, tags)| {
                let n = labels.len();
                let mut edges = Vec::new();
                let mut bits = mask.iter();
                for a in 0..n {
                    for b in (a + 1)..n {
                        if bits.next().copied().unwrap_or(false) {
                            edges.push((labels[a].clone(), labels[b].clone()));
                        }
                    }
                }
                AdjacencyGraph::init(labels.into_iter().zip(tags), edges)
            })
    })
}

/// `g1` and `g2` from the reference pair: two three-vertex paths.
pub fn path_pair() -> (AdjacencyGraph<&'static str>, AdjacencyGraph<&'static str>) {
    let g1 = AdjacencyGraph::init(
        [
            ("A1", attrs(&["a"])),
            ("A2", attrs(&["b", "a"])),
            ("A3", attrs(&["a", "c"])),
        ],
        [("A1", "A2"), ("A2", "A3")],
    );
    let g2 = AdjacencyGraph::init(
        [
            ("B1", attrs(&["a"])),
            ("B2", attrs(&["b", "a"])),
            ("B3", attrs(&["x", "y"])),
        ],
        [("B1", "B2"), ("B2", "B3")],
    );
    (g1, g2)
}

/// Six vertices `"1"..="6"`: triangle 1-2-5, then 2-3, 3-4, 4-5, 4-6.
/// Most edges are listed in both directions.
pub fn six_node() -> AdjacencyGraph<&'static str> {
    AdjacencyGraph::init(
        ["1", "2", "3", "4", "5", "6"].map(|l| (l, attrs(&["a"]))),
        [
            ("1", "2"),
            ("1", "5"),
            ("2", "5"),
            ("2", "1"),
            ("2", "3"),
            ("3", "4"),
            ("3", "2"),
            ("4", "3"),
            ("4", "6"),
            ("4", "5"),
            ("5", "4"),
            ("5", "2"),
            ("5", "1"),
            ("6", "4"),
        ],
    )
}
