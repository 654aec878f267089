//! Shared output layer: human-readable text or stable JSON.
//!
//! Every command handler receives an [`OutputMode`] and renders through
//! [`render`], so `--json` works the same way for every subcommand.

use serde::Serialize;
use spectra_core::SpectraError;
use std::io::{self, Write};

/// The output modes supported by the CLI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    Human,
    Json,
}

impl OutputMode {
    pub const fn from_json_flag(json: bool) -> Self {
        if json { Self::Json } else { Self::Human }
    }
}

/// Render a left-aligned key/value line in human output.
pub fn pretty_kv(w: &mut dyn Write, key: &str, value: impl AsRef<str>) -> io::Result<()> {
    writeln!(w, "{:<15} {}", format!("{key}:"), value.as_ref())
}

/// Format an optional score; `None` renders as `undefined`.
pub fn format_score(score: Option<f64>) -> String {
    score.map_or_else(|| "undefined".to_string(), |s| format!("{s:.6}"))
}

/// A structured error with optional hint and error code.
#[derive(Debug, Serialize)]
pub struct CliError {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_code: Option<String>,
}

impl From<&SpectraError> for CliError {
    fn from(err: &SpectraError) -> Self {
        let code = err.code();
        Self {
            message: err.to_string(),
            hint: code.hint().map(str::to_string),
            error_code: Some(code.code().to_string()),
        }
    }
}

/// Render a serializable value to stdout in the requested format.
///
/// In JSON mode the value is serialized with `serde_json`; otherwise
/// `human_fn` writes the text form.
pub fn render<T: Serialize>(
    mode: OutputMode,
    value: &T,
    human_fn: impl FnOnce(&T, &mut dyn Write) -> io::Result<()>,
) -> anyhow::Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    match mode {
        OutputMode::Json => {
            serde_json::to_writer_pretty(&mut out, value)?;
            writeln!(out)?;
        }
        OutputMode::Human => human_fn(value, &mut out)?,
    }
    Ok(())
}

/// Render an error to stderr in the requested format.
pub fn render_error(mode: OutputMode, error: &CliError) -> anyhow::Result<()> {
    let stderr = io::stderr();
    let mut out = stderr.lock();
    match mode {
        OutputMode::Json => {
            let wrapper = serde_json::json!({ "error": error });
            serde_json::to_writer_pretty(&mut out, &wrapper)?;
            writeln!(out)?;
        }
        OutputMode::Human => {
            writeln!(out, "error: {}", error.message)?;
            if let Some(ref hint) = error.hint {
                writeln!(out, "  hint: {hint}")?;
            }
        }
    }
    Ok(())
}

/// Report a library error on stderr and turn it into the command's failure.
pub fn fail(mode: OutputMode, err: SpectraError) -> anyhow::Error {
    if let Err(render_err) = render_error(mode, &CliError::from(&err)) {
        return render_err;
    }
    anyhow::Error::new(err)
}
