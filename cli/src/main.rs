mod cli;
mod config;

use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use remix_core::domain::changeset::Changeset;
use remix_core::domain::mixtape::Mixtape;
use remix_core::{ApplyOptions, ChangesetService, Diagnostics, Severity};
use remix_fs::{DocumentSink, DocumentSource};

use crate::cli::Cli;
use crate::config::ApplyConfig;

fn main() -> ExitCode {
  let args = Cli::parse();

  // Diagnostics and progress go to stderr: stdout may carry the document.
  tracing_subscriber::fmt()
    .with_env_filter(
      EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("remix=info")),
    )
    .with_writer(std::io::stderr)
    .init();

  match run(args) {
    Ok(false) => ExitCode::SUCCESS,
    Ok(true) => ExitCode::from(1),
    Err(error) => {
      tracing::error!("{error:#}");
      ExitCode::from(1)
    }
  }
}

/// Returns whether the run encountered a (non-fatal) error; fatal failures
/// come back as `Err` and also exit 1.
fn run(args: Cli) -> anyhow::Result<bool> {
  // --- Configuration ---
  // Defaults from the [apply] section of remix.toml; flags override.
  let mut config = ApplyConfig::load().context("failed to load remix.toml")?;
  if args.reject_empty_playlists {
    config.allow_empty_playlists = false;
  }
  if args.compact {
    config.pretty_output = false;
  }

  // --- Changeset load + structural validation ---
  // A changeset that does not match the expected shape is fatal: nothing
  // has touched the document yet.
  let changeset_text = std::fs::read_to_string(&args.changeset)
    .with_context(|| format!("cannot read changeset {}", args.changeset.display()))?;
  let changeset = Changeset::from_json_str(&changeset_text)
    .with_context(|| format!("changeset {} failed validation", args.changeset.display()))?;

  // --- Mixtape load (named file or stdin) ---
  let source = DocumentSource::from_arg(args.input_file);
  let mixtape_text = source.read_to_string().context("cannot read the mixtape document")?;
  let mut mixtape =
    Mixtape::from_json_str(&mixtape_text).context("the mixtape document is not valid JSON")?;

  // --- Apply ---
  let service = ChangesetService::new(ApplyOptions::from(&config));
  let mut diagnostics = Diagnostics::new();
  let report = service.apply(&mut mixtape, &changeset, &mut diagnostics);

  for record in diagnostics.iter() {
    match record.severity {
      Severity::Warning => tracing::warn!("{}", record.message),
      Severity::Error => tracing::error!("{}", record.message),
    }
  }

  // --- Serialize: the document goes out even when passes failed ---
  let output = if config.pretty_output {
    mixtape.to_json_string_pretty()?
  } else {
    mixtape.to_json_string()?
  };
  DocumentSink::from_arg(args.output_file)
    .write_str(&output)
    .context("cannot write the mixtape document")?;

  tracing::info!(
    errors = diagnostics.error_count(),
    warnings = diagnostics.warning_count(),
    "changeset applied"
  );

  Ok(report.encountered_error)
}
