use crate::diagnostics::Diagnostics;
use crate::domain::changeset::Changeset;
use crate::domain::mixtape::Mixtape;
use crate::index::EntityIndex;
use crate::services::{additions, creations, removals};

/// Opciones de aplicación.
#[derive(Debug, Clone)]
pub struct ApplyOptions {
  /// Comportamiento heredado: una petición de playlist sin canciones deja
  /// un aviso pero la playlist se crea y la ejecución no se marca fallida.
  /// En `false` la petición se rechaza con error.
  pub allow_empty_playlists: bool,
}

impl Default for ApplyOptions {
  fn default() -> Self {
    ApplyOptions { allow_empty_playlists: true }
  }
}

/// Resultado agregado de aplicar un changeset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ApplyReport {
  /// `true` si algún pase registró algún error. El documento mutado se
  /// entrega (y se serializa) igualmente: los errores solo afectan a la
  /// señal de estado final.
  pub encountered_error: bool,
}

/// Orquestador: secuencia los tres pases de mutación sobre un mixtape.
///
/// Es dueño de los índices durante la ejecución y los presta a cada pase;
/// ningún componente retiene estado entre llamadas.
pub struct ChangesetService {
  options: ApplyOptions,
}

impl ChangesetService {
  pub fn new(options: ApplyOptions) -> Self {
    Self { options }
  }

  /// Aplica `changeset` sobre `mixtape` con orden de pases fijo:
  /// adiciones, luego eliminaciones, luego creaciones, sea cual sea el
  /// orden de los campos en el changeset.
  pub fn apply(
    &self,
    mixtape: &mut Mixtape,
    changeset: &Changeset,
    diagnostics: &mut Diagnostics,
  ) -> ApplyReport {
    let mut playlist_index = EntityIndex::build(&mixtape.playlists);

    // el índice de canciones solo hace falta si hay adiciones o creaciones
    let needs_song_index =
      !changeset.playlist_additions.is_empty() || !changeset.new_playlists.is_empty();
    let song_index = needs_song_index.then(|| EntityIndex::build(&mixtape.songs));

    let mut encountered_error = false;

    if let Some(song_index) = song_index.as_ref() {
      encountered_error |= additions::apply_additions(
        mixtape,
        &playlist_index,
        song_index,
        &changeset.playlist_additions,
        diagnostics,
      );
    }

    encountered_error |= removals::apply_removals(
      mixtape,
      &mut playlist_index,
      &changeset.remove_playlists,
      diagnostics,
    );

    if let Some(song_index) = song_index.as_ref() {
      encountered_error |= creations::apply_creations(
        mixtape,
        &mut playlist_index,
        song_index,
        &changeset.new_playlists,
        &self.options,
        diagnostics,
      );
    }

    ApplyReport { encountered_error }
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::domain::ids::{PlaylistId, SongId};

  fn apply(mixtape_json: &str, changeset_json: &str) -> (Mixtape, Diagnostics, ApplyReport) {
    let mut mixtape = Mixtape::from_json_str(mixtape_json).unwrap();
    let changeset = Changeset::from_json_str(changeset_json).unwrap();
    let mut diagnostics = Diagnostics::new();
    let report =
      ChangesetService::new(ApplyOptions::default()).apply(&mut mixtape, &changeset, &mut diagnostics);
    (mixtape, diagnostics, report)
  }

  #[test]
  fn test_end_to_end_addition_scenario() {
    let (mixtape, diagnostics, report) = apply(
      r#"{"songs":[{"id":"1"}],"playlists":[{"id":"1","user_id":"1","song_ids":["1"]}]}"#,
      r#"{"playlist_additions":[{"playlist_id":"1","song_id":"1"}]}"#,
    );

    assert!(!report.encountered_error);
    assert!(diagnostics.is_empty());
    assert_eq!(mixtape.playlists[0].song_ids, vec![SongId::new(1), SongId::new(1)]);

    let output = mixtape.to_json_string().unwrap();
    assert!(output.contains(r#""song_ids":["1","1"]"#));
  }

  #[test]
  fn test_pass_order_is_fixed_regardless_of_field_order() {
    // el changeset declara los campos "al revés"; aun así la adición se
    // aplica contra la playlist original, el borrado la quita después y la
    // creación (ya sin playlists) reusa el id 1
    let (mixtape, diagnostics, report) = apply(
      r#"{
        "users": [{"id": "1"}],
        "songs": [{"id": "1"}, {"id": "2"}],
        "playlists": [{"id": "1", "user_id": "1", "song_ids": ["1"]}]
      }"#,
      r#"{
        "new_playlists": [{"user_id": "1", "song_ids": ["2"]}],
        "remove_playlists": ["1"],
        "playlist_additions": [{"playlist_id": "1", "song_id": "2"}]
      }"#,
    );

    assert!(!report.encountered_error, "{:?}", diagnostics.into_records());
    assert_eq!(mixtape.playlists.len(), 1);
    assert_eq!(mixtape.playlists[0].id, PlaylistId::new(1));
    assert_eq!(mixtape.playlists[0].song_ids, vec![SongId::new(2)]);
  }

  #[test]
  fn test_errors_accumulate_across_passes_without_blocking() {
    let (mixtape, diagnostics, report) = apply(
      r#"{
        "users": [{"id": "1"}],
        "songs": [{"id": "1"}],
        "playlists": [{"id": "1", "user_id": "1", "song_ids": []}]
      }"#,
      r#"{
        "playlist_additions": [{"playlist_id": "9", "song_id": "1"}],
        "remove_playlists": ["8"],
        "new_playlists": [{"user_id": "1", "song_ids": ["1"]}]
      }"#,
    );

    // dos pases fallaron, el tercero aplicó de todos modos
    assert!(report.encountered_error);
    assert_eq!(diagnostics.error_count(), 2);
    assert_eq!(mixtape.playlists.len(), 2);
    assert_eq!(mixtape.playlists[1].id, PlaylistId::new(2));
  }

  #[test]
  fn test_an_empty_changeset_changes_nothing() {
    let (mixtape, diagnostics, report) = apply(
      r#"{"users":[{"id":"1"}],"songs":[{"id":"1"}],"playlists":[]}"#,
      r#"{}"#,
    );

    assert!(!report.encountered_error);
    assert!(diagnostics.is_empty());
    assert!(mixtape.playlists.is_empty());
  }

  #[test]
  fn test_removal_then_addition_to_the_removed_playlist_fails_later_not_earlier() {
    // la adición va ANTES que el borrado en el orden de pases: no falla
    let (mixtape, _diagnostics, report) = apply(
      r#"{"songs":[{"id":"1"}],"playlists":[
        {"id":"1","user_id":"1","song_ids":[]},
        {"id":"2","user_id":"1","song_ids":[]}
      ]}"#,
      r#"{
        "remove_playlists": ["1"],
        "playlist_additions": [{"playlist_id": "1", "song_id": "1"}]
      }"#,
    );

    assert!(!report.encountered_error);
    assert_eq!(mixtape.playlists.len(), 1);
    assert_eq!(mixtape.playlists[0].id, PlaylistId::new(2));
  }
}
