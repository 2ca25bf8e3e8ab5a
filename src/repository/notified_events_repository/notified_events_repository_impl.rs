use super::{DedupeLedger, NotifiedEventsRepository, NotifiedEventsRepositoryConfig};
use crate::repository::{self, KeyValueStore};
use std::sync::{Arc, Mutex};

pub struct NotifiedEventsRepositoryImpl {
    config: NotifiedEventsRepositoryConfig,
    store: Arc<dyn KeyValueStore>,

    /// Held for whole read-modify-write of the ledger
    insert_lock: Mutex<()>,
}

impl NotifiedEventsRepositoryImpl {
    pub fn new(config: NotifiedEventsRepositoryConfig, store: Arc<dyn KeyValueStore>) -> Self {
        Self {
            config,
            store,
            insert_lock: Mutex::new(()),
        }
    }
}

impl NotifiedEventsRepository for NotifiedEventsRepositoryImpl {
    fn find_all(&self) -> Result<DedupeLedger, repository::Error> {
        let Some(serialized) = self.store.get(&self.config.storage_key)? else {
            return Ok(DedupeLedger::new(self.config.capacity));
        };

        match serde_json::from_str::<Vec<String>>(&serialized) {
            Ok(keys) => Ok(DedupeLedger::from_keys(keys, self.config.capacity)),
            Err(err) => {
                tracing::warn!(%err, "stored ledger malformed, starting with empty one");
                Ok(DedupeLedger::new(self.config.capacity))
            }
        }
    }

    fn contains(&self, key: &str) -> Result<bool, repository::Error> {
        Ok(self.find_all()?.contains(key))
    }

    fn insert(&self, key: &str) -> Result<bool, repository::Error> {
        let _guard = self
            .insert_lock
            .lock()
            .map_err(|_| repository::Error::Poisoned)?;

        let mut ledger = self.find_all()?;
        if !ledger.push(key) {
            return Ok(false);
        }

        let len = ledger.len();
        let serialized = serde_json::to_string(&ledger.into_keys())?;
        self.store.set(&self.config.storage_key, serialized)?;
        tracing::trace!(key, len, "dedupe key stored");

        Ok(true)
    }
}
