use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::domain::ids::UserId;
use crate::index::Identified;

/// Un usuario del mixtape.
///
/// El núcleo solo interpreta el `id`; el resto del payload (nombre, etc.)
/// es opaco y se vuelve a serializar sin tocar.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
  pub id: UserId,
  #[serde(flatten)]
  pub payload: Map<String, Value>,
}

impl Identified for User {
  type Id = UserId;

  fn id(&self) -> UserId {
    self.id
  }
}
