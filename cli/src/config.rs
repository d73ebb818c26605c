use remix_config::{CONFIG_BACKEND, ConfigBackend, ConfigError};
use remix_core::ApplyOptions;
use serde::{Deserialize, Serialize};

/// The `[apply]` section of remix.toml.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ApplyConfig {
  /// Legacy behavior: new playlists with no songs are still created and
  /// only produce a warning.
  #[serde(default = "default_allow_empty_playlists")]
  pub allow_empty_playlists: bool,

  /// 2-space indented JSON output (the classic format).
  #[serde(default = "default_pretty_output")]
  pub pretty_output: bool,
}

fn default_allow_empty_playlists() -> bool {
  true
}

fn default_pretty_output() -> bool {
  true
}

impl Default for ApplyConfig {
  fn default() -> Self {
    ApplyConfig {
      allow_empty_playlists: default_allow_empty_playlists(),
      pretty_output: default_pretty_output(),
    }
  }
}

impl ApplyConfig {
  /// Loads the section and writes missing defaults back, so the user's
  /// file always lists the available keys.
  pub fn load() -> Result<Self, ConfigError> {
    let cfg = CONFIG_BACKEND.load_section_with_default("apply")?;
    CONFIG_BACKEND.save_section("apply", &cfg)?;
    Ok(cfg)
  }
}

impl From<&ApplyConfig> for ApplyOptions {
  fn from(cfg: &ApplyConfig) -> Self {
    ApplyOptions { allow_empty_playlists: cfg.allow_empty_playlists }
  }
}
