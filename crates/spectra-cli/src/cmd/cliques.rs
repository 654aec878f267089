//! `spectra cliques` — every maximal clique of one graph.

use std::io::Write;
use std::path::PathBuf;
use std::time::Instant;

use clap::Args;
use serde::Serialize;
use spectra_core::{
    AdjacencyGraph, CliqueSet, CliqueStrategy, SimilarityConfig, find_cliques_until,
};

use super::SearchArgs;
use crate::document::load_graph;
use crate::output::{OutputMode, fail, render};

/// Arguments for `spectra cliques`.
#[derive(Args, Debug)]
pub struct CliquesArgs {
    /// Graph document (JSON).
    pub graph: PathBuf,

    #[command(flatten)]
    pub search: SearchArgs,
}

/// Report payload for `spectra cliques`.
#[derive(Debug, Serialize)]
pub struct CliquesReport {
    pub strategy: CliqueStrategy,
    pub count: usize,
    pub cliques: Vec<Vec<String>>,
}

impl CliquesReport {
    /// Cliques as label lists, in discovery order.
    pub fn new(graph: &AdjacencyGraph<String>, set: &CliqueSet) -> Self {
        let cliques = set
            .iter()
            .map(|clique| {
                clique
                    .iter()
                    .filter_map(|idx| graph.vertex(idx).map(|v| v.label.clone()))
                    .collect()
            })
            .collect();
        Self {
            strategy: set.strategy(),
            count: set.len(),
            cliques,
        }
    }
}

/// Execute `spectra cliques`.
pub fn run_cliques(
    args: &CliquesArgs,
    config: &SimilarityConfig,
    output: OutputMode,
) -> anyhow::Result<()> {
    let config = args.search.apply(config);
    let graph = load_graph(&args.graph)?;

    let deadline = config.time_budget().map(|budget| Instant::now() + budget);
    let set = find_cliques_until(&graph, config.strategy, deadline)
        .map_err(|err| fail(output, err))?;

    render(output, &CliquesReport::new(&graph, &set), |report, w| {
        render_cliques_human(report, w)
    })
}

fn render_cliques_human(report: &CliquesReport, w: &mut dyn Write) -> std::io::Result<()> {
    for clique in &report.cliques {
        writeln!(w, "{{{}}}", clique.join(", "))?;
    }
    Ok(())
}
