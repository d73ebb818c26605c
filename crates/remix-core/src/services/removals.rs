use crate::diagnostics::{DiagnosticKind, Diagnostics};
use crate::domain::ids::PlaylistId;
use crate::domain::mixtape::Mixtape;
use crate::index::EntityIndex;

/// Pase de `remove_playlists`: elimina playlists por id.
///
/// Los ids ausentes se agregan en un único diagnóstico y marcan fallo, pero
/// los presentes se eliminan igualmente. Una lista vacía es un no-op sin
/// diagnóstico ("nada pedido" no es "pedido no encontrado").
pub fn apply_removals(
  mixtape: &mut Mixtape,
  playlist_index: &mut EntityIndex<PlaylistId>,
  remove_playlists: &[PlaylistId],
  diagnostics: &mut Diagnostics,
) -> bool {
  if remove_playlists.is_empty() {
    return false;
  }

  // los duplicados de la petición colapsan
  let mut requested = remove_playlists.to_vec();
  requested.sort_unstable_by_key(|id| id.value());
  requested.dedup();

  let mut encountered_error = false;
  let missing: Vec<String> = requested
    .iter()
    .filter(|id| !playlist_index.contains(**id))
    .map(ToString::to_string)
    .collect();
  if !missing.is_empty() {
    diagnostics.error(
      DiagnosticKind::MissingRemovalTargets,
      format!(
        "No playlists exist with the following ids: {}. Error encountered while trying to \
         remove playlists.",
        missing.join(", ")
      ),
    );
    encountered_error = true;
  }

  // el índice se consume antes de resolver posiciones
  let mut removed_positions: Vec<usize> =
    requested.iter().filter_map(|id| playlist_index.remove(*id)).collect();
  removed_positions.sort_unstable();

  // borrar de mayor a menor para no invalidar las posiciones pendientes
  for &position in removed_positions.iter().rev() {
    mixtape.playlists.remove(position);
  }

  // las entradas supervivientes bajan tantas posiciones como huecos dejó el lote
  playlist_index.shift_after_removals(&removed_positions);

  encountered_error
}

#[cfg(test)]
mod tests {
  use super::*;

  fn mixtape_with_playlists(ids: &[u64]) -> Mixtape {
    let playlists = ids
      .iter()
      .map(|id| format!(r#"{{"id":"{id}","user_id":"1","song_ids":[]}}"#))
      .collect::<Vec<_>>()
      .join(",");
    Mixtape::from_json_str(&format!(r#"{{"playlists":[{playlists}]}}"#)).unwrap()
  }

  fn ids(raw: &[u64]) -> Vec<PlaylistId> {
    raw.iter().map(|&id| PlaylistId::new(id)).collect()
  }

  #[test]
  fn test_empty_request_is_a_no_op() {
    let mut mixtape = mixtape_with_playlists(&[1, 2]);
    let mut index = EntityIndex::build(&mixtape.playlists);
    let mut diagnostics = Diagnostics::new();

    let failed = apply_removals(&mut mixtape, &mut index, &[], &mut diagnostics);

    assert!(!failed);
    assert!(diagnostics.is_empty());
    assert_eq!(mixtape.playlists.len(), 2);
  }

  #[test]
  fn test_removes_positions_in_descending_order() {
    // playlists 10..14 en posiciones 0..5; se borran las posiciones 0, 2 y 4
    let mut mixtape = mixtape_with_playlists(&[10, 11, 12, 13, 14]);
    let mut index = EntityIndex::build(&mixtape.playlists);
    let mut diagnostics = Diagnostics::new();

    let failed =
      apply_removals(&mut mixtape, &mut index, &ids(&[10, 12, 14]), &mut diagnostics);

    assert!(!failed);
    let survivors: Vec<u64> = mixtape.playlists.iter().map(|p| p.id.value()).collect();
    assert_eq!(survivors, vec![11, 13]);
  }

  #[test]
  fn test_partial_success_still_removes_what_exists() {
    let mut mixtape = mixtape_with_playlists(&[5]);
    let mut index = EntityIndex::build(&mixtape.playlists);
    let mut diagnostics = Diagnostics::new();

    let failed = apply_removals(&mut mixtape, &mut index, &ids(&[5, 99]), &mut diagnostics);

    assert!(failed);
    assert!(mixtape.playlists.is_empty());
    assert_eq!(diagnostics.error_count(), 1);
    let record = diagnostics.iter().next().unwrap();
    assert!(record.message.contains("99"));
  }

  #[test]
  fn test_duplicate_requests_collapse() {
    let mut mixtape = mixtape_with_playlists(&[7, 8]);
    let mut index = EntityIndex::build(&mixtape.playlists);
    let mut diagnostics = Diagnostics::new();

    let failed = apply_removals(&mut mixtape, &mut index, &ids(&[7, 7, 7]), &mut diagnostics);

    assert!(!failed);
    assert_eq!(mixtape.playlists.len(), 1);
    assert_eq!(mixtape.playlists[0].id, PlaylistId::new(8));
  }

  #[test]
  fn test_the_index_stays_consistent_after_a_batch() {
    let mut mixtape = mixtape_with_playlists(&[1, 2, 3, 4]);
    let mut index = EntityIndex::build(&mixtape.playlists);
    let mut diagnostics = Diagnostics::new();

    apply_removals(&mut mixtape, &mut index, &ids(&[1, 3]), &mut diagnostics);

    for (position, playlist) in mixtape.playlists.iter().enumerate() {
      assert_eq!(index.position(playlist.id), Some(position));
    }
    assert!(!index.contains(PlaylistId::new(1)));
    assert!(!index.contains(PlaylistId::new(3)));
  }
}
