use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::domain::ids::SongId;
use crate::index::Identified;

/// Una canción del mixtape. Igual que `User`: solo el `id` importa aquí.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Song {
  pub id: SongId,
  #[serde(flatten)]
  pub payload: Map<String, Value>,
}

impl Identified for Song {
  type Id = SongId;

  fn id(&self) -> SongId {
    self.id
  }
}
