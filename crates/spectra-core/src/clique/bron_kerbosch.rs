//! Bron–Kerbosch maximal clique search.
//!
//! Three strategies share one [`Search`]:
//!
//! - [`Search::naive`]: branch on every candidate.
//! - [`Search::pivot`]: pick a pivot `u` from `P ∪ X` with the highest degree
//!   in the whole graph (lowest index on ties) and branch only on
//!   `P \ N(u)`.
//! - [`DegeneracyWalk`]: one pivoted search per vertex in degeneracy order,
//!   with `P` restricted to later neighbours and `X` to earlier ones.
//!
//! `R` is a stack pushed before and popped after each recursive call. `P` and
//! `X` are bitsets; every recursive call receives freshly intersected copies,
//! so a branch never observes a sibling's updates.
//!
//! Recursion depth is bounded by the size of the largest clique.

use fixedbitset::FixedBitSet;

use crate::clique::Clique;
use crate::graph::AdjacencyGraph;

/// Shared state of one enumeration: neighbourhood rows, degrees, and the
/// cliques found so far.
pub(crate) struct Search<'g> {
    rows: &'g [FixedBitSet],
    degrees: Vec<usize>,
    width: usize,
    found: Vec<Clique>,
}

impl<'g> Search<'g> {
    pub(crate) fn new<L>(graph: &'g AdjacencyGraph<L>) -> Self {
        let width = graph.order();
        Self {
            rows: graph.matrix().rows(),
            degrees: (0..width).map(|v| graph.degree(v)).collect(),
            width,
            found: Vec::new(),
        }
    }

    /// `P = V`, `X = ∅`.
    pub(crate) fn root_sets(&self) -> (FixedBitSet, FixedBitSet) {
        let mut p = FixedBitSet::with_capacity(self.width);
        p.insert_range(..);
        (p, FixedBitSet::with_capacity(self.width))
    }

    pub(crate) fn found(&self) -> usize {
        self.found.len()
    }

    pub(crate) fn into_found(self) -> Vec<Clique> {
        self.found
    }

    pub(crate) fn record(&mut self, r: &[usize]) {
        self.found.push(Clique::new(r.to_vec()));
    }

    /// Classic Bron–Kerbosch without pivoting.
    pub(crate) fn naive(&mut self, r: &mut Vec<usize>, mut p: FixedBitSet, mut x: FixedBitSet) {
        if p.is_clear() && x.is_clear() {
            self.record(r);
            return;
        }
        let rows = self.rows;
        loop {
            let Some(v) = p.ones().next() else {
                break;
            };
            p.set(v, false);
            let np = intersect(&p, &rows[v]);
            let nx = intersect(&x, &rows[v]);
            r.push(v);
            self.naive(r, np, nx);
            r.pop();
            x.insert(v);
        }
    }

    /// Bron–Kerbosch with a max-degree pivot.
    pub(crate) fn pivot(&mut self, r: &mut Vec<usize>, mut p: FixedBitSet, mut x: FixedBitSet) {
        if p.is_clear() && x.is_clear() {
            self.record(r);
            return;
        }
        let Some(u) = self.choose_pivot(&p, &x) else {
            return;
        };
        let rows = self.rows;
        let mut branches = p.clone();
        branches.difference_with(&rows[u]);

        for v in branches.ones() {
            let np = intersect(&p, &rows[v]);
            let nx = intersect(&x, &rows[v]);
            r.push(v);
            self.pivot(r, np, nx);
            r.pop();
            p.set(v, false);
            x.insert(v);
        }
    }

    /// Vertex of `P ∪ X` with the most neighbours in the whole graph; the
    /// lowest index wins ties.
    fn choose_pivot(&self, p: &FixedBitSet, x: &FixedBitSet) -> Option<usize> {
        p.ones()
            .chain(x.ones())
            .max_by_key(|&v| (self.degrees[v], std::cmp::Reverse(v)))
    }
}

/// Outer loop of the degeneracy-ordered strategy.
pub(crate) struct DegeneracyWalk {
    p: FixedBitSet,
    x: FixedBitSet,
}

impl DegeneracyWalk {
    pub(crate) fn new(search: &Search<'_>) -> Self {
        let (p, x) = search.root_sets();
        Self { p, x }
    }

    /// Run the pivoted search rooted at `v`, then move `v` from `P` to `X`.
    pub(crate) fn step(&mut self, search: &mut Search<'_>, v: usize) {
        let row = &search.rows[v];
        let p = intersect(&self.p, row);
        let x = intersect(&self.x, row);
        let mut r = vec![v];
        search.pivot(&mut r, p, x);
        self.p.set(v, false);
        self.x.insert(v);
    }
}

// ---------------------------------------------------------------------------
// Bitset helpers
// ---------------------------------------------------------------------------

fn intersect(set: &FixedBitSet, row: &FixedBitSet) -> FixedBitSet {
    let mut out = set.clone();
    out.intersect_with(row);
    out
}
