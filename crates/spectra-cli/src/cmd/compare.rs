//! `spectra compare` — similarity of two graphs.

use std::io::Write;
use std::path::PathBuf;

use clap::Args;
use serde::Serialize;
use spectra_core::{
    AdjacencyGraph, CliqueStrategy, SimilarityConfig, SimilarityScore, similarity,
};

use super::SearchArgs;
use crate::document::load_graph;
use crate::output::{OutputMode, fail, format_score, pretty_kv, render};

/// Arguments for `spectra compare`.
#[derive(Args, Debug)]
pub struct CompareArgs {
    /// First graph document (JSON).
    pub g1: PathBuf,

    /// Second graph document (JSON).
    pub g2: PathBuf,

    #[command(flatten)]
    pub search: SearchArgs,
}

/// Report payload for `spectra compare`.
#[derive(Debug, Serialize)]
pub struct CompareReport {
    pub g1: String,
    pub g2: String,
    pub strategy: CliqueStrategy,
    pub jaccard_score: Option<f64>,
    pub weight_score: Option<f64>,
    pub matched: usize,
    pub clique_weight: f64,
    pub matching: Vec<(String, String)>,
}

impl CompareReport {
    pub fn new(
        args: &CompareArgs,
        strategy: CliqueStrategy,
        g1: &AdjacencyGraph<String>,
        g2: &AdjacencyGraph<String>,
        score: &SimilarityScore,
    ) -> Self {
        Self {
            g1: args.g1.display().to_string(),
            g2: args.g2.display().to_string(),
            strategy,
            jaccard_score: score.jaccard,
            weight_score: score.weight,
            matched: score.matched,
            clique_weight: score.clique_weight,
            matching: matched_labels(g1, g2, score),
        }
    }
}

/// Labels of the source vertices paired by the winning clique.
pub fn matched_labels(
    g1: &AdjacencyGraph<String>,
    g2: &AdjacencyGraph<String>,
    score: &SimilarityScore,
) -> Vec<(String, String)> {
    score
        .pairs
        .iter()
        .filter_map(|&(i, j)| Some((g1.vertex(i)?.label.clone(), g2.vertex(j)?.label.clone())))
        .collect()
}

/// Execute `spectra compare`.
pub fn run_compare(
    args: &CompareArgs,
    config: &SimilarityConfig,
    output: OutputMode,
) -> anyhow::Result<()> {
    let config = args.search.apply(config);
    let g1 = load_graph(&args.g1)?;
    let g2 = load_graph(&args.g2)?;

    let score = similarity(&g1, &g2, &config).map_err(|err| fail(output, err))?;
    let report = CompareReport::new(args, config.strategy, &g1, &g2, &score);

    render(output, &report, |report, w| render_compare_human(report, w))
}

fn render_compare_human(report: &CompareReport, w: &mut dyn Write) -> std::io::Result<()> {
    pretty_kv(w, "jaccard_score", format_score(report.jaccard_score))?;
    pretty_kv(w, "weight_score", format_score(report.weight_score))?;
    pretty_kv(w, "matched", report.matched.to_string())?;
    pretty_kv(w, "clique_weight", format!("{:.6}", report.clique_weight))?;
    let pairs: Vec<String> = report
        .matching
        .iter()
        .map(|(a, b)| format!("{a}={b}"))
        .collect();
    pretty_kv(w, "matching", pairs.join(" "))
}
