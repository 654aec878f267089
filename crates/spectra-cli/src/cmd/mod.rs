pub mod cliques;
pub mod compare;
pub mod degeneracy;
pub mod rank;

use clap::Args;
use spectra_core::{CliqueStrategy, SimilarityConfig};

/// Search flags shared by every command that enumerates cliques.
#[derive(Args, Debug, Clone, Default)]
pub struct SearchArgs {
    /// Clique search strategy: naive, pivot, or degeneracy.
    #[arg(long)]
    pub strategy: Option<CliqueStrategy>,

    /// Give up on the clique search after this many milliseconds.
    #[arg(long, value_name = "MS")]
    pub time_budget_ms: Option<u64>,
}

impl SearchArgs {
    /// `config` with any flags given on the command line applied on top.
    pub fn apply(&self, config: &SimilarityConfig) -> SimilarityConfig {
        let mut merged = config.clone();
        if let Some(strategy) = self.strategy {
            merged.strategy = strategy;
        }
        if let Some(ms) = self.time_budget_ms {
            merged.time_budget_ms = Some(ms);
        }
        merged
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_override_file_values() {
        let file = SimilarityConfig {
            strategy: CliqueStrategy::Naive,
            time_budget_ms: Some(10),
            ..SimilarityConfig::default()
        };
        let args = SearchArgs {
            strategy: Some(CliqueStrategy::Pivot),
            time_budget_ms: None,
        };
        let merged = args.apply(&file);
        assert_eq!(merged.strategy, CliqueStrategy::Pivot);
        assert_eq!(merged.time_budget_ms, Some(10));
        assert_eq!(SearchArgs::default().apply(&file), file);
    }
}
