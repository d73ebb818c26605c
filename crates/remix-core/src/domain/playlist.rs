use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::domain::ids::{PlaylistId, SongId, UserId};
use crate::index::Identified;

/// Una playlist: pertenece a un usuario y lista canciones en orden.
///
/// Invariante al confirmar cambios: `user_id` y cada entrada de `song_ids`
/// deben resolver a entidades existentes del documento. Una referencia rota
/// aborta la creación/mutación de ESA playlist, nunca la ejecución entera.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Playlist {
  pub id: PlaylistId,
  pub user_id: UserId,
  /// Canciones en orden. Los documentos antiguos escriben la clave `songs`;
  /// al serializar normalizamos siempre a `song_ids`.
  #[serde(alias = "songs", default)]
  pub song_ids: Vec<SongId>,
  #[serde(flatten)]
  pub payload: Map<String, Value>,
}

impl Identified for Playlist {
  type Id = PlaylistId;

  fn id(&self) -> PlaylistId {
    self.id
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_accepts_the_legacy_songs_key() {
    let playlist: Playlist =
      serde_json::from_str(r#"{"id":"1","user_id":"2","songs":["8","9"]}"#).unwrap();

    assert_eq!(playlist.song_ids, vec![SongId::new(8), SongId::new(9)]);

    let encoded = serde_json::to_string(&playlist).unwrap();
    assert!(encoded.contains("song_ids"));
    assert!(!encoded.contains("\"songs\""));
  }
}
