use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

use crate::clique::CliqueStrategy;
use crate::score::SimilarityScore;

/// Tuning for one similarity computation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimilarityConfig {
    #[serde(default)]
    pub strategy: CliqueStrategy,
    /// Upper bound on `|V1| * |V2|`.
    #[serde(default = "default_max_association_order")]
    pub max_association_order: usize,
    /// Wall-clock budget for the clique search, in milliseconds.
    #[serde(default)]
    pub time_budget_ms: Option<u64>,
    /// Minimum Jaccard score kept by ranking.
    #[serde(default)]
    pub threshold: Option<f64>,
}

impl Default for SimilarityConfig {
    fn default() -> Self {
        Self {
            strategy: CliqueStrategy::default(),
            max_association_order: default_max_association_order(),
            time_budget_ms: None,
            threshold: None,
        }
    }
}

impl SimilarityConfig {
    #[must_use]
    pub fn time_budget(&self) -> Option<Duration> {
        self.time_budget_ms.map(Duration::from_millis)
    }

    /// Whether `score` clears the configured threshold.
    #[must_use]
    pub fn passes(&self, score: &SimilarityScore) -> bool {
        score.passes(self.threshold)
    }
}

/// Load a [`SimilarityConfig`] from a TOML file. A missing file yields the
/// defaults.
///
/// # Errors
///
/// Returns an error if the file exists but cannot be read or parsed.
pub fn load_config(path: &Path) -> Result<SimilarityConfig> {
    if !path.exists() {
        return Ok(SimilarityConfig::default());
    }

    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;

    toml::from_str::<SimilarityConfig>(&content)
        .with_context(|| format!("Failed to parse {}", path.display()))
}

const fn default_max_association_order() -> usize {
    4096
}
