use std::collections::HashMap;
use std::hash::Hash;

/// Entidad que vive en una de las secuencias del documento y tiene id propio.
pub trait Identified {
  type Id: Copy + Eq + Hash;

  fn id(&self) -> Self::Id;
}

/// Índice efímero id → posición sobre una secuencia del documento.
///
/// Se construye una vez por ejecución y el orquestador lo va mutando a
/// medida que el documento cambia (las posiciones se desplazan al borrar
/// o insertar). No sobrevive a la ejecución.
#[derive(Debug, Clone, PartialEq)]
pub struct EntityIndex<I: Eq + Hash> {
  positions: HashMap<I, usize>,
}

impl<I: Copy + Eq + Hash> EntityIndex<I> {
  /// Construye el índice recorriendo la secuencia en orden.
  ///
  /// Ids duplicados no se validan aquí: son un problema de calidad de datos
  /// heredado y la última posición gana, igual que al reindexar.
  pub fn build<E>(entities: &[E]) -> Self
  where
    E: Identified<Id = I>,
  {
    let mut positions = HashMap::with_capacity(entities.len());
    for (position, entity) in entities.iter().enumerate() {
      positions.insert(entity.id(), position);
    }
    EntityIndex { positions }
  }

  pub fn contains(&self, id: I) -> bool {
    self.positions.contains_key(&id)
  }

  pub fn position(&self, id: I) -> Option<usize> {
    self.positions.get(&id).copied()
  }

  /// Consume el id del índice, devolviendo la posición que tenía.
  pub fn remove(&mut self, id: I) -> Option<usize> {
    self.positions.remove(&id)
  }

  pub fn insert(&mut self, id: I, position: usize) {
    self.positions.insert(id, position);
  }

  pub fn ids(&self) -> impl Iterator<Item = I> + '_ {
    self.positions.keys().copied()
  }

  pub fn len(&self) -> usize {
    self.positions.len()
  }

  pub fn is_empty(&self) -> bool {
    self.positions.is_empty()
  }

  /// Reajusta las posiciones tras un borrado por lotes.
  ///
  /// `removed` son las posiciones ya eliminadas de la secuencia, ordenadas
  /// ascendentemente; cada entrada superviviente baja tantas posiciones como
  /// huecos quedaron por debajo de ella.
  pub fn shift_after_removals(&mut self, removed: &[usize]) {
    if removed.is_empty() {
      return;
    }

    for position in self.positions.values_mut() {
      *position -= removed.partition_point(|&hole| hole < *position);
    }
  }
}
