use serde_json::Map;

use crate::diagnostics::{DiagnosticKind, Diagnostics};
use crate::domain::changeset::NewPlaylist;
use crate::domain::ids::{PlaylistId, SongId};
use crate::domain::mixtape::Mixtape;
use crate::domain::playlist::Playlist;
use crate::index::EntityIndex;
use crate::services::allocator::PlaylistIdAllocator;
use crate::services::changeset_service::ApplyOptions;

/// Pase de `new_playlists`: valida referencias, asigna ids y añade las
/// playlists nuevas al final del documento, en el orden del changeset.
///
/// Una petición con cualquier referencia rota se rechaza entera (sin
/// playlist parcial) y su id candidato vuelve al fondo del asignador.
pub fn apply_creations(
  mixtape: &mut Mixtape,
  playlist_index: &mut EntityIndex<PlaylistId>,
  song_index: &EntityIndex<SongId>,
  new_playlists: &[NewPlaylist],
  options: &ApplyOptions,
  diagnostics: &mut Diagnostics,
) -> bool {
  if new_playlists.is_empty() {
    return false;
  }

  let mut allocator = PlaylistIdAllocator::from_index(playlist_index);
  // el índice de usuarios se construye fresco aquí: solo este pase lo usa
  let user_index = EntityIndex::build(&mixtape.users);

  let mut encountered_error = false;
  for request in new_playlists {
    let playlist_id = allocator.acquire();

    let mut missing: Vec<String> = Vec::new();
    if !user_index.contains(request.user_id) {
      missing.push(format!("user {}", request.user_id));
    }
    for song_id in &request.song_ids {
      if !song_index.contains(*song_id) {
        missing.push(format!("song {song_id}"));
      }
    }

    if !missing.is_empty() {
      diagnostics.error(
        DiagnosticKind::ReferenceNotFound,
        format!(
          "The following referenced ids do not exist: {}. Error encountered when trying to add \
           a new playlist for user with id {} and songs with ids [{}].",
          missing.join(", "),
          request.user_id,
          join_ids(&request.song_ids)
        ),
      );
      allocator.release(playlist_id);
      encountered_error = true;
      continue;
    }

    if request.song_ids.is_empty() {
      if options.allow_empty_playlists {
        // comportamiento heredado: se avisa pero la playlist se crea igual
        diagnostics.warning(
          DiagnosticKind::EmptyPlaylist,
          format!(
            "Empty playlists are invalid. Encountered when trying to add a new playlist for \
             user with id {}.",
            request.user_id
          ),
        );
      } else {
        diagnostics.error(
          DiagnosticKind::EmptyPlaylist,
          format!(
            "Empty playlists are invalid. Rejected the new playlist for user with id {}.",
            request.user_id
          ),
        );
        allocator.release(playlist_id);
        encountered_error = true;
        continue;
      }
    }

    mixtape.playlists.push(Playlist {
      id: playlist_id,
      user_id: request.user_id,
      song_ids: request.song_ids.clone(),
      payload: Map::new(),
    });
    // la playlist confirmada entra al índice: el resto de la ejecución la ve
    playlist_index.insert(playlist_id, mixtape.playlists.len() - 1);
  }

  encountered_error
}

fn join_ids(song_ids: &[SongId]) -> String {
  song_ids.iter().map(ToString::to_string).collect::<Vec<_>>().join(", ")
}
