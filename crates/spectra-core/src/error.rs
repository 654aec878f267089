use std::fmt;

/// Errors raised by graph construction, clique search and scoring.
///
/// Data-quality problems that the pipeline can recover from (an edge naming
/// an unknown vertex, an empty attribute union) are not errors; they are
/// logged and handled in place.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SpectraError {
    /// A label was required to resolve to a vertex and did not.
    #[error("unknown vertex label: {label}")]
    UnknownLabel { label: String },

    /// An index-based operation referenced a vertex outside `0..order`.
    #[error("vertex index {index} out of range for graph of order {order}")]
    VertexOutOfRange { index: usize, order: usize },

    /// A score's denominator was zero.
    #[error("{score} score is undefined ({numerator}/{denominator})")]
    UndefinedScore {
        score: &'static str,
        numerator: f64,
        denominator: usize,
    },

    /// The association graph would exceed the configured vertex bound.
    #[error(
        "association graph of {g1_order}x{g2_order} vertices exceeds the limit of {limit}"
    )]
    AssociationTooLarge {
        g1_order: usize,
        g2_order: usize,
        limit: usize,
    },

    /// The time budget ran out between top-level clique searches.
    #[error("clique search deadline exceeded after {elapsed_ms}ms ({cliques_found} cliques found)")]
    DeadlineExceeded {
        cliques_found: usize,
        elapsed_ms: u128,
    },
}

impl SpectraError {
    /// Stable machine-readable code for this error.
    #[must_use]
    pub const fn code(&self) -> ErrorCode {
        match self {
            Self::UnknownLabel { .. } => ErrorCode::UnknownLabel,
            Self::VertexOutOfRange { .. } => ErrorCode::VertexOutOfRange,
            Self::UndefinedScore { .. } => ErrorCode::UndefinedScore,
            Self::AssociationTooLarge { .. } => ErrorCode::AssociationTooLarge,
            Self::DeadlineExceeded { .. } => ErrorCode::DeadlineExceeded,
        }
    }
}

/// Machine-readable error codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    UnknownLabel,
    VertexOutOfRange,
    UndefinedScore,
    AssociationTooLarge,
    DeadlineExceeded,
}

impl ErrorCode {
    /// Stable code identifier (`E####`) for machine parsing.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::UnknownLabel => "E1001",
            Self::VertexOutOfRange => "E1002",
            Self::UndefinedScore => "E2001",
            Self::AssociationTooLarge => "E3001",
            Self::DeadlineExceeded => "E3002",
        }
    }

    /// Short human-facing summary for logs and terminal output.
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::UnknownLabel => "Unknown vertex label",
            Self::VertexOutOfRange => "Vertex index out of range",
            Self::UndefinedScore => "Score undefined for empty graphs",
            Self::AssociationTooLarge => "Association graph too large",
            Self::DeadlineExceeded => "Clique search deadline exceeded",
        }
    }

    /// Optional remediation hint.
    #[must_use]
    pub const fn hint(self) -> Option<&'static str> {
        match self {
            Self::UnknownLabel => Some("Check that every edge endpoint appears in the vertex list."),
            Self::VertexOutOfRange => None,
            Self::UndefinedScore => Some("Both input graphs must contain at least one vertex."),
            Self::AssociationTooLarge => {
                Some("Raise `max_association_order` or compare smaller graphs.")
            }
            Self::DeadlineExceeded => {
                Some("Raise `time_budget_ms` or use the `degeneracy` strategy.")
            }
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}
