use crate::diagnostics::{DiagnosticKind, Diagnostics};
use crate::domain::changeset::PlaylistAddition;
use crate::domain::ids::{PlaylistId, SongId};
use crate::domain::mixtape::Mixtape;
use crate::index::EntityIndex;

/// Pase de `playlist_additions`: añade canciones a playlists existentes,
/// en el orden del changeset.
///
/// Devuelve si alguna adición del lote falló. Una adición con cualquier
/// referencia rota se salta entera: no hay mutación parcial.
pub fn apply_additions(
  mixtape: &mut Mixtape,
  playlist_index: &EntityIndex<PlaylistId>,
  song_index: &EntityIndex<SongId>,
  additions: &[PlaylistAddition],
  diagnostics: &mut Diagnostics,
) -> bool {
  let mut encountered_error = false;
  for addition in additions {
    encountered_error |= add_to_playlist(mixtape, playlist_index, song_index, addition, diagnostics);
  }

  encountered_error
}

fn add_to_playlist(
  mixtape: &mut Mixtape,
  playlist_index: &EntityIndex<PlaylistId>,
  song_index: &EntityIndex<SongId>,
  addition: &PlaylistAddition,
  diagnostics: &mut Diagnostics,
) -> bool {
  let PlaylistAddition { playlist_id, song_id } = *addition;

  let song_missing = !song_index.contains(song_id);
  if song_missing {
    diagnostics.error(
      DiagnosticKind::ReferenceNotFound,
      format!(
        "No song exists with id {song_id}. Error encountered when trying to add song with id \
         {song_id} to playlist with id {playlist_id}."
      ),
    );
  }

  let playlist_position = playlist_index.position(playlist_id);
  if playlist_position.is_none() {
    diagnostics.error(
      DiagnosticKind::ReferenceNotFound,
      format!(
        "No playlist exists with id {playlist_id}. Error encountered when trying to add song \
         with id {song_id} to playlist with id {playlist_id}."
      ),
    );
  }

  let Some(position) = playlist_position else {
    return true;
  };
  if song_missing {
    return true;
  }

  // append puro: sin comprobación de duplicados, conservando el orden
  mixtape.playlists[position].song_ids.push(song_id);

  false
}
