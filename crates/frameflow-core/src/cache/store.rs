use dashmap::DashMap;

use crate::model::Fingerprint;

/// Almacén de resultados indexado por fingerprint.
///
/// Dos nodos con el mismo fingerprint se consideran equivalentes: el cache
/// puede devolver el resultado de uno para el otro.
pub trait ResultCache<D> {
    fn get(&self, fingerprint: &Fingerprint) -> Option<D>;
    fn put(&self, fingerprint: Fingerprint, value: D);
    fn contains(&self, fingerprint: &Fingerprint) -> bool {
        self.get(fingerprint).is_some()
    }
}

/// Cache en memoria, seguro para uso concurrente.
#[derive(Debug)]
pub struct InMemoryResultCache<D> {
    entries: DashMap<Fingerprint, D>,
}

impl<D> InMemoryResultCache<D> {
    pub fn new() -> Self {
        Self { entries: DashMap::new() }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&self) {
        self.entries.clear();
    }
}

impl<D> Default for InMemoryResultCache<D> {
    fn default() -> Self {
        Self::new()
    }
}

impl<D: Clone> ResultCache<D> for InMemoryResultCache<D> {
    fn get(&self, fingerprint: &Fingerprint) -> Option<D> {
        self.entries.get(fingerprint).map(|e| e.value().clone())
    }

    fn put(&self, fingerprint: Fingerprint, value: D) {
        self.entries.insert(fingerprint, value);
    }

    fn contains(&self, fingerprint: &Fingerprint) -> bool {
        self.entries.contains_key(fingerprint)
    }
}
