use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::domain::playlist::Playlist;
use crate::domain::song::Song;
use crate::domain::user::User;
use crate::errors::DocumentError;

/// El documento que se muta: usuarios, canciones y playlists.
///
/// Las tres secuencias son opcionales en la entrada (default vacío) y
/// siempre están presentes en la salida. Cualquier clave extra del
/// documento se conserva opaca.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Mixtape {
  #[serde(default)]
  pub users: Vec<User>,
  #[serde(default)]
  pub songs: Vec<Song>,
  #[serde(default)]
  pub playlists: Vec<Playlist>,
  #[serde(flatten)]
  pub payload: Map<String, Value>,
}

impl Mixtape {
  pub fn from_json_str(input: &str) -> Result<Self, DocumentError> {
    Ok(serde_json::from_str(input)?)
  }

  /// Volcado con sangría de dos espacios, el formato de salida clásico.
  pub fn to_json_string_pretty(&self) -> Result<String, DocumentError> {
    Ok(serde_json::to_string_pretty(self)?)
  }

  pub fn to_json_string(&self) -> Result<String, DocumentError> {
    Ok(serde_json::to_string(self)?)
  }
}
