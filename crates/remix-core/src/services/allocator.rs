use std::collections::BTreeSet;

use crate::domain::ids::PlaylistId;
use crate::index::EntityIndex;

/// Asignador de ids de playlist con relleno de huecos.
///
/// El fondo de candidatos son los ids libres estrictamente entre 1 y el
/// máximo en uso; se reparten en orden ascendente. Agotados los huecos se
/// extiende desde el máximo. Un id liberado (petición rechazada) vuelve al
/// fondo, pero el contador de máximo nunca retrocede.
#[derive(Debug)]
pub struct PlaylistIdAllocator {
  free: BTreeSet<u64>,
  max_in_use: u64,
}

impl PlaylistIdAllocator {
  pub fn from_index(index: &EntityIndex<PlaylistId>) -> Self {
    let used: BTreeSet<u64> = index.ids().map(|id| id.value()).collect();
    let max_in_use = used.iter().next_back().copied().unwrap_or(0);
    let free = (1..max_in_use).filter(|candidate| !used.contains(candidate)).collect();

    PlaylistIdAllocator { free, max_in_use }
  }

  pub fn acquire(&mut self) -> PlaylistId {
    if let Some(gap) = self.free.pop_first() {
      return PlaylistId::new(gap);
    }

    self.max_in_use += 1;
    PlaylistId::new(self.max_in_use)
  }

  pub fn release(&mut self, id: PlaylistId) {
    self.free.insert(id.value());
  }
}
