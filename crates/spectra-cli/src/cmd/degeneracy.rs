//! `spectra degeneracy` — degeneracy number and ordering of one graph.

use std::io::Write;
use std::path::PathBuf;

use clap::Args;
use serde::Serialize;
use spectra_core::clique::degeneracy_ordering;

use crate::document::load_graph;
use crate::output::{OutputMode, pretty_kv, render};

/// Arguments for `spectra degeneracy`.
#[derive(Args, Debug)]
pub struct DegeneracyArgs {
    /// Graph document (JSON).
    pub graph: PathBuf,
}

#[derive(Debug, Serialize)]
pub struct DegeneracyReport {
    pub degeneracy: usize,
    pub order: Vec<String>,
}

/// Execute `spectra degeneracy`.
pub fn run_degeneracy(args: &DegeneracyArgs, output: OutputMode) -> anyhow::Result<()> {
    let graph = load_graph(&args.graph)?;
    let ordering = degeneracy_ordering(&graph);

    let report = DegeneracyReport {
        degeneracy: ordering.degeneracy,
        order: ordering
            .order
            .iter()
            .filter_map(|&idx| graph.vertex(idx).map(|v| v.label.clone()))
            .collect(),
    };

    render(output, &report, |report, w| render_degeneracy_human(report, w))
}

fn render_degeneracy_human(report: &DegeneracyReport, w: &mut dyn Write) -> std::io::Result<()> {
    pretty_kv(w, "degeneracy", report.degeneracy.to_string())?;
    pretty_kv(w, "order", report.order.join(" "))
}
