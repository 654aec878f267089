//! Maximal clique enumeration.
//!
//! # Overview
//!
//! [`find_cliques`] enumerates every maximal clique of an
//! [`AdjacencyGraph`] with one of three interchangeable strategies (see
//! [`CliqueStrategy`]). All three return the same *set* of cliques; only the
//! discovery order differs, and callers must not rely on it.
//!
//! The result is an owned [`CliqueSet`]. Nothing accumulates on the graph, so
//! repeated calls on an unmodified graph return identical output.
//!
//! A graph with no vertices has exactly one maximal clique, the empty set,
//! under every strategy.
//!
//! # Time Budget
//!
//! The search has no internal suspension points. [`find_cliques_until`]
//! checks a deadline before each top-level search: once for `naive` and
//! `pivot`, and before every per-vertex search for `degeneracy`.

mod bron_kerbosch;
pub mod degeneracy;

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;
use std::time::Instant;

use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::error::SpectraError;
use crate::graph::AdjacencyGraph;
use bron_kerbosch::{DegeneracyWalk, Search};
pub use degeneracy::{DegeneracyOrdering, degeneracy_ordering};

// ---------------------------------------------------------------------------
// Strategy
// ---------------------------------------------------------------------------

/// Maximal clique search strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CliqueStrategy {
    /// Exhaustive Bron–Kerbosch.
    Naive,
    /// Bron–Kerbosch with a max-degree pivot.
    Pivot,
    /// Pivoted Bron–Kerbosch rooted at each vertex in degeneracy order.
    #[default]
    Degeneracy,
}

impl CliqueStrategy {
    /// Every strategy, in escalating order.
    pub const ALL: [Self; 3] = [Self::Naive, Self::Pivot, Self::Degeneracy];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Naive => "naive",
            Self::Pivot => "pivot",
            Self::Degeneracy => "degeneracy",
        }
    }
}

impl fmt::Display for CliqueStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a strategy name is not recognised.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown clique strategy '{0}' (expected naive, pivot, or degeneracy)")]
pub struct ParseStrategyError(String);

impl FromStr for CliqueStrategy {
    type Err = ParseStrategyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "naive" => Ok(Self::Naive),
            "pivot" => Ok(Self::Pivot),
            "degeneracy" | "degen" => Ok(Self::Degeneracy),
            other => Err(ParseStrategyError(other.to_string())),
        }
    }
}

// ---------------------------------------------------------------------------
// Clique / CliqueSet
// ---------------------------------------------------------------------------

/// A set of vertex indices into the graph that produced it, kept sorted.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Clique {
    members: Vec<usize>,
}

impl Clique {
    /// Build a clique from member indices. Order and duplicates are
    /// normalized away.
    #[must_use]
    pub fn new(mut members: Vec<usize>) -> Self {
        members.sort_unstable();
        members.dedup();
        Self { members }
    }

    /// Member indices, ascending.
    #[must_use]
    pub fn members(&self) -> &[usize] {
        &self.members
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.members.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    #[must_use]
    pub fn contains(&self, index: usize) -> bool {
        self.members.binary_search(&index).is_ok()
    }

    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.members.iter().copied()
    }
}

/// Every maximal clique found by one enumeration, in discovery order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliqueSet {
    strategy: CliqueStrategy,
    cliques: Vec<Clique>,
}

impl CliqueSet {
    /// Strategy that produced this set.
    #[must_use]
    pub const fn strategy(&self) -> CliqueStrategy {
        self.strategy
    }

    #[must_use]
    pub fn cliques(&self) -> &[Clique] {
        &self.cliques
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cliques.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cliques.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Clique> {
        self.cliques.iter()
    }

    /// The cliques sorted, for order-insensitive comparison.
    #[must_use]
    pub fn sorted(&self) -> Vec<Clique> {
        let mut cliques = self.cliques.clone();
        cliques.sort();
        cliques
    }

    #[must_use]
    pub fn into_vec(self) -> Vec<Clique> {
        self.cliques
    }
}

impl<'a> IntoIterator for &'a CliqueSet {
    type Item = &'a Clique;
    type IntoIter = std::slice::Iter<'a, Clique>;

    fn into_iter(self) -> Self::IntoIter {
        self.cliques.iter()
    }
}

// ---------------------------------------------------------------------------
// Enumeration
// ---------------------------------------------------------------------------

/// Enumerate every maximal clique of `graph`.
#[must_use]
pub fn find_cliques<L>(graph: &AdjacencyGraph<L>, strategy: CliqueStrategy) -> CliqueSet {
    match enumerate(graph, strategy, |_| Ok::<(), Infallible>(())) {
        Ok(set) => set,
        Err(never) => match never {},
    }
}

/// Enumerate every maximal clique of `graph`, giving up once `deadline` has
/// passed. `None` means no deadline.
///
/// # Errors
///
/// Returns [`SpectraError::DeadlineExceeded`] if the deadline passes before
/// the search completes. Partial results are discarded.
pub fn find_cliques_until<L>(
    graph: &AdjacencyGraph<L>,
    strategy: CliqueStrategy,
    deadline: Option<Instant>,
) -> Result<CliqueSet, SpectraError> {
    let Some(deadline) = deadline else {
        return Ok(find_cliques(graph, strategy));
    };
    let started = Instant::now();
    enumerate(graph, strategy, |found| {
        let now = Instant::now();
        if now >= deadline {
            Err(SpectraError::DeadlineExceeded {
                cliques_found: found,
                elapsed_ms: now.duration_since(started).as_millis(),
            })
        } else {
            Ok(())
        }
    })
}

/// Runs `strategy`, calling `check` with the number of cliques found so far
/// before every top-level search.
#[instrument(skip_all, fields(order = graph.order(), strategy = %strategy))]
fn enumerate<L, E, F>(
    graph: &AdjacencyGraph<L>,
    strategy: CliqueStrategy,
    mut check: F,
) -> Result<CliqueSet, E>
where
    F: FnMut(usize) -> Result<(), E>,
{
    let mut search = Search::new(graph);

    match strategy {
        CliqueStrategy::Naive => {
            check(0)?;
            let (p, x) = search.root_sets();
            search.naive(&mut Vec::new(), p, x);
        }
        CliqueStrategy::Pivot => {
            check(0)?;
            let (p, x) = search.root_sets();
            search.pivot(&mut Vec::new(), p, x);
        }
        CliqueStrategy::Degeneracy => {
            let ordering = degeneracy_ordering(graph);
            debug!(degeneracy = ordering.degeneracy, "degeneracy ordering");
            if ordering.order.is_empty() {
                search.record(&[]);
            }
            let mut walk = DegeneracyWalk::new(&search);
            for &v in &ordering.order {
                check(search.found())?;
                walk.step(&mut search, v);
            }
        }
    }

    let cliques = search.into_found();
    debug!(cliques = cliques.len(), "maximal cliques enumerated");
    Ok(CliqueSet { strategy, cliques })
}

// ---------------------------------------------------------------------------
// Validation helpers
// ---------------------------------------------------------------------------

/// Whether `members` are pairwise adjacent in `graph`.
///
/// # Panics
///
/// Panics if a member is not a vertex of `graph`.
#[must_use]
pub fn is_clique<L>(graph: &AdjacencyGraph<L>, members: &[usize]) -> bool {
    members.iter().enumerate().all(|(i, &a)| {
        members[i + 1..]
            .iter()
            .all(|&b| a != b && graph.is_adjacent(a, b))
    })
}

/// Whether `members` form a clique that no other vertex of `graph` extends.
///
/// # Panics
///
/// Panics if a member is not a vertex of `graph`.
#[must_use]
pub fn is_maximal_clique<L>(graph: &AdjacencyGraph<L>, members: &[usize]) -> bool {
    is_clique(graph, members)
        && (0..graph.order())
            .filter(|v| !members.contains(v))
            .all(|v| !members.iter().all(|&m| graph.is_adjacent(m, v)))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
