use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

use crate::errors::ParseIdError;

/// Deserializa un id "en bruto" aceptando las dos formas del mundo real:
/// en los mixtapes los ids viajan como enteros codificados en string
/// (`"42"`), pero los changesets históricos los traían como enteros JSON.
/// Al serializar siempre emitimos la forma string.
fn deserialize_raw_id<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
  D: Deserializer<'de>,
{
  struct RawIdVisitor;

  impl<'de> Visitor<'de> for RawIdVisitor {
    type Value = u64;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
      f.write_str("a positive integer or its string-encoded form")
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<u64, E> {
      Ok(v)
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<u64, E> {
      u64::try_from(v).map_err(|_| E::custom(format!("negative id {v}")))
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<u64, E> {
      v.parse::<u64>().map_err(|_| E::custom(format!("invalid id {v:?}")))
    }
  }

  deserializer.deserialize_any(RawIdVisitor)
}

/// Identificador único de un usuario dentro del mixtape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct UserId(u64);

impl UserId {
  pub fn new(raw: u64) -> Self {
    UserId(raw)
  }

  /// Devuelve el entero interno.
  pub fn value(&self) -> u64 {
    self.0
  }
}

impl From<u64> for UserId {
  fn from(raw: u64) -> Self {
    UserId(raw)
  }
}

impl From<UserId> for u64 {
  fn from(id: UserId) -> Self {
    id.0
  }
}

impl fmt::Display for UserId {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    self.0.fmt(f)
  }
}

impl FromStr for UserId {
  type Err = ParseIdError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    s.parse::<u64>().map(UserId).map_err(|_| ParseIdError::new(s))
  }
}

impl Serialize for UserId {
  fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_str(&self.0)
  }
}

impl<'de> Deserialize<'de> for UserId {
  fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
    deserialize_raw_id(deserializer).map(UserId)
  }
}

/// Identificador único de una canción dentro del mixtape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SongId(u64);

impl SongId {
  pub fn new(raw: u64) -> Self {
    SongId(raw)
  }

  pub fn value(&self) -> u64 {
    self.0
  }
}

impl From<u64> for SongId {
  fn from(raw: u64) -> Self {
    SongId(raw)
  }
}

impl From<SongId> for u64 {
  fn from(id: SongId) -> Self {
    id.0
  }
}

impl fmt::Display for SongId {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    self.0.fmt(f)
  }
}

impl FromStr for SongId {
  type Err = ParseIdError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    s.parse::<u64>().map(SongId).map_err(|_| ParseIdError::new(s))
  }
}

impl Serialize for SongId {
  fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_str(&self.0)
  }
}

impl<'de> Deserialize<'de> for SongId {
  fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
    deserialize_raw_id(deserializer).map(SongId)
  }
}

/// Identificador único de una playlist dentro del mixtape.
///
/// A diferencia de usuarios y canciones, estos ids también se asignan
/// durante la aplicación de un changeset (ver el asignador de ids del
/// pase de creación).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PlaylistId(u64);

impl PlaylistId {
  pub fn new(raw: u64) -> Self {
    PlaylistId(raw)
  }

  pub fn value(&self) -> u64 {
    self.0
  }
}

impl From<u64> for PlaylistId {
  fn from(raw: u64) -> Self {
    PlaylistId(raw)
  }
}

impl From<PlaylistId> for u64 {
  fn from(id: PlaylistId) -> Self {
    id.0
  }
}

impl fmt::Display for PlaylistId {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    self.0.fmt(f)
  }
}

impl FromStr for PlaylistId {
  type Err = ParseIdError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    s.parse::<u64>().map(PlaylistId).map_err(|_| ParseIdError::new(s))
  }
}

impl Serialize for PlaylistId {
  fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_str(&self.0)
  }
}

impl<'de> Deserialize<'de> for PlaylistId {
  fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
    deserialize_raw_id(deserializer).map(PlaylistId)
  }
}
