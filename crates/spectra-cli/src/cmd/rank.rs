//! `spectra rank` — score one query graph against many candidates.

use std::cmp::Ordering;
use std::io::Write;
use std::path::PathBuf;

use clap::Args;
use serde::Serialize;
use spectra_core::{SimilarityConfig, similarity};
use tracing::debug;

use super::SearchArgs;
use crate::document::load_graph;
use crate::output::{OutputMode, fail, format_score, render};

/// Arguments for `spectra rank`.
#[derive(Args, Debug)]
pub struct RankArgs {
    /// Query graph document (JSON).
    pub query: PathBuf,

    /// Candidate graph documents (JSON).
    #[arg(required = true)]
    pub candidates: Vec<PathBuf>,

    /// Keep only candidates whose Jaccard score is at least this value.
    #[arg(long)]
    pub threshold: Option<f64>,

    #[command(flatten)]
    pub search: SearchArgs,
}

#[derive(Debug, Clone, Serialize)]
pub struct RankEntry {
    pub candidate: String,
    pub jaccard_score: Option<f64>,
    pub weight_score: Option<f64>,
    pub matched: usize,
}

#[derive(Debug, Serialize)]
pub struct RankReport {
    pub query: String,
    pub threshold: Option<f64>,
    pub results: Vec<RankEntry>,
}

/// Best first: Jaccard descending, then weight descending. Undefined scores
/// sort last; ties keep input order.
pub fn rank_entries(entries: &mut [RankEntry]) {
    entries.sort_by(|a, b| {
        compare_desc(a.jaccard_score, b.jaccard_score)
            .then_with(|| compare_desc(a.weight_score, b.weight_score))
    });
}

fn compare_desc(a: Option<f64>, b: Option<f64>) -> Ordering {
    match (a, b) {
        (Some(x), Some(y)) => y.total_cmp(&x),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Execute `spectra rank`.
pub fn run_rank(
    args: &RankArgs,
    config: &SimilarityConfig,
    output: OutputMode,
) -> anyhow::Result<()> {
    let mut config = args.search.apply(config);
    if args.threshold.is_some() {
        config.threshold = args.threshold;
    }

    let query = load_graph(&args.query)?;
    let mut results = Vec::with_capacity(args.candidates.len());
    for path in &args.candidates {
        let candidate = load_graph(path)?;
        let score = similarity(&query, &candidate, &config).map_err(|err| fail(output, err))?;
        if !config.passes(&score) {
            debug!(candidate = %path.display(), jaccard = ?score.jaccard, "below threshold");
            continue;
        }
        results.push(RankEntry {
            candidate: path.display().to_string(),
            jaccard_score: score.jaccard,
            weight_score: score.weight,
            matched: score.matched,
        });
    }
    rank_entries(&mut results);

    let report = RankReport {
        query: args.query.display().to_string(),
        threshold: config.threshold,
        results,
    };
    render(output, &report, |report, w| render_rank_human(report, w))
}

fn render_rank_human(report: &RankReport, w: &mut dyn Write) -> std::io::Result<()> {
    for entry in &report.results {
        writeln!(
            w,
            "{}  {}  {}",
            format_score(entry.jaccard_score),
            format_score(entry.weight_score),
            entry.candidate
        )?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(name: &str, jaccard: Option<f64>, weight: Option<f64>) -> RankEntry {
        RankEntry {
            candidate: name.to_string(),
            jaccard_score: jaccard,
            weight_score: weight,
            matched: 0,
        }
    }

    #[test]
    fn best_first_with_weight_tiebreak() {
        let mut entries = vec![
            entry("low", Some(0.2), Some(0.9)),
            entry("tie-light", Some(0.5), Some(0.1)),
            entry("undefined", None, None),
            entry("tie-heavy", Some(0.5), Some(0.4)),
            entry("top", Some(1.0), Some(0.0)),
        ];
        rank_entries(&mut entries);
        let order: Vec<&str> = entries.iter().map(|e| e.candidate.as_str()).collect();
        assert_eq!(order, ["top", "tie-heavy", "tie-light", "low", "undefined"]);
    }

    #[test]
    fn equal_scores_keep_input_order() {
        let mut entries = vec![
            entry("first", Some(0.5), Some(0.5)),
            entry("second", Some(0.5), Some(0.5)),
        ];
        rank_entries(&mut entries);
        assert_eq!(entries[0].candidate, "first");
    }
}
