use serde::Deserialize;

use crate::domain::ids::{PlaylistId, SongId, UserId};
use crate::errors::DocumentError;

/// Conjunto declarativo de cambios a aplicar sobre un mixtape.
///
/// La deserialización estricta hace de validación estructural: una clave
/// desconocida o un tipo incorrecto rechazan el changeset completo antes
/// de tocar el documento.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Changeset {
  #[serde(default)]
  pub playlist_additions: Vec<PlaylistAddition>,
  #[serde(default)]
  pub remove_playlists: Vec<PlaylistId>,
  #[serde(default)]
  pub new_playlists: Vec<NewPlaylist>,
}

impl Changeset {
  pub fn from_json_str(input: &str) -> Result<Self, DocumentError> {
    Ok(serde_json::from_str(input)?)
  }

  pub fn is_empty(&self) -> bool {
    self.playlist_additions.is_empty()
      && self.remove_playlists.is_empty()
      && self.new_playlists.is_empty()
  }
}

/// Añadir una canción existente al final de una playlist existente.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PlaylistAddition {
  pub playlist_id: PlaylistId,
  pub song_id: SongId,
}

/// Petición de playlist nueva: el id lo asigna el pase de creación.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NewPlaylist {
  pub user_id: UserId,
  pub song_ids: Vec<SongId>,
}
