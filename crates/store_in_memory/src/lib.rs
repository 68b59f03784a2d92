use async_trait::async_trait;
use model::Pokemon;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use store::StoreErrorReason::Unavailable;
use store::{RecordStore, StoreError};

const IN_MEMORY_COLLECTION: &str = "Pokemon";

/// Keeps records in a process-local map. Clones share the same map.
#[derive(Clone)]
pub struct InMemoryRecordStore {
    records: Arc<Mutex<HashMap<String, Pokemon>>>,
}

impl Default for InMemoryRecordStore {
    fn default() -> Self {
        InMemoryRecordStore {
            records: Arc::new(Mutex::new(Default::default())),
        }
    }
}

impl InMemoryRecordStore {
    pub fn get(&self, id: &str) -> Option<Pokemon> {
        self.records
            .lock()
            .ok()
            .and_then(|guard| guard.get(id).cloned())
    }

    pub fn len(&self) -> usize {
        self.records.lock().map(|guard| guard.len()).unwrap_or_default()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl RecordStore for InMemoryRecordStore {
    fn collection(&self) -> &str {
        IN_MEMORY_COLLECTION
    }

    async fn put_pokemon(&self, pokemon: &Pokemon) -> Result<(), StoreError> {
        let mut guard = self.records.lock().map_err(|err| {
            StoreError::new(IN_MEMORY_COLLECTION, pokemon, Unavailable(err.to_string().into()))
        })?;

        guard.insert(pokemon.id.clone(), pokemon.clone());

        Ok(())
    }
}
