#![forbid(unsafe_code)]

mod cmd;
mod document;
mod output;

use clap::{Parser, Subcommand};
use output::OutputMode;
use spectra_core::SimilarityConfig;
use spectra_core::config::load_config;
use std::env;
use std::path::{Path, PathBuf};
use tracing::debug;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

const DEFAULT_CONFIG: &str = "spectra.toml";

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "spectra: structural similarity of attributed graphs",
    long_about = None
)]
struct Cli {
    /// Emit JSON output instead of human-readable text.
    #[arg(long, global = true)]
    json: bool,

    /// Path to a TOML config file (default: ./spectra.toml if present).
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    #[command(
        about = "Score the similarity of two graphs",
        after_help = "EXAMPLES:\n    spectra compare a.json b.json\n    spectra compare a.json b.json --strategy pivot --json"
    )]
    Compare(cmd::compare::CompareArgs),

    #[command(about = "List every maximal clique of a graph")]
    Cliques(cmd::cliques::CliquesArgs),

    #[command(about = "Show the degeneracy number and ordering of a graph")]
    Degeneracy(cmd::degeneracy::DegeneracyArgs),

    #[command(
        about = "Rank candidate graphs by similarity to a query graph",
        after_help = "EXAMPLES:\n    spectra rank query.json corpus/*.json --threshold 0.5"
    )]
    Rank(cmd::rank::RankArgs),
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env("SPECTRA_LOG").unwrap_or_else(|_| {
        EnvFilter::new(if env::var("DEBUG").is_ok() {
            "spectra=debug,info"
        } else {
            "spectra=info,warn"
        })
    });

    let format = env::var("SPECTRA_LOG_FORMAT").unwrap_or_else(|_| "compact".to_string());

    let registry = tracing_subscriber::registry().with(filter);

    match format.as_str() {
        "json" => {
            registry
                .with(fmt::layer().json().with_ansi(false).with_writer(std::io::stderr))
                .init();
        }
        _ => {
            registry
                .with(fmt::layer().compact().with_writer(std::io::stderr))
                .init();
        }
    }
}

/// Config from `--config`, or `./spectra.toml` when present, or defaults.
fn resolve_config(path: Option<&Path>) -> anyhow::Result<SimilarityConfig> {
    match path {
        Some(path) => {
            if !path.exists() {
                anyhow::bail!("config file not found: {}", path.display());
            }
            load_config(path)
        }
        None => load_config(Path::new(DEFAULT_CONFIG)),
    }
}

fn main() -> anyhow::Result<()> {
    init_tracing();

    let cli = Cli::parse();
    let output = OutputMode::from_json_flag(cli.json);
    let config = resolve_config(cli.config.as_deref())?;
    debug!(?config, "configuration resolved");

    match cli.command {
        Commands::Compare(ref args) => cmd::compare::run_compare(args, &config, output),
        Commands::Cliques(ref args) => cmd::cliques::run_cliques(args, &config, output),
        Commands::Degeneracy(ref args) => cmd::degeneracy::run_degeneracy(args, output),
        Commands::Rank(ref args) => cmd::rank::run_rank(args, &config, output),
    }
}
