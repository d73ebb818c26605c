//! CLI argument definitions for the remix binary.

use std::path::PathBuf;

use clap::Parser;

/// Apply a declarative changeset to a mixtape document
#[derive(Parser, Debug)]
#[command(name = "remix")]
#[command(about = "remix: apply a declarative changeset to a mixtape document")]
#[command(version)]
pub struct Cli {
  /// The JSON file containing the changes to apply to the mixtape
  pub changeset: PathBuf,

  /// The JSON file containing the mixtape. Reads from stdin if no file is provided
  #[arg(short, long)]
  pub input_file: Option<PathBuf>,

  /// The file to output the altered mixtape to. Writes to stdout if no file is provided
  #[arg(short, long)]
  pub output_file: Option<PathBuf>,

  /// Emit compact JSON instead of the default 2-space indented output
  #[arg(long)]
  pub compact: bool,

  /// Reject new playlists with an empty song list instead of only warning
  #[arg(long, env = "REMIX_REJECT_EMPTY_PLAYLISTS")]
  pub reject_empty_playlists: bool,
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_parses_the_classic_argument_surface() {
    let cli =
      Cli::parse_from(["remix", "changes.json", "-i", "mixtape.json", "-o", "out.json"]);

    assert_eq!(cli.changeset, PathBuf::from("changes.json"));
    assert_eq!(cli.input_file, Some(PathBuf::from("mixtape.json")));
    assert_eq!(cli.output_file, Some(PathBuf::from("out.json")));
    assert!(!cli.compact);
    assert!(!cli.reject_empty_playlists);
  }

  #[test]
  fn test_streams_are_the_default_endpoints() {
    let cli = Cli::parse_from(["remix", "changes.json"]);

    assert!(cli.input_file.is_none());
    assert!(cli.output_file.is_none());
  }
}
