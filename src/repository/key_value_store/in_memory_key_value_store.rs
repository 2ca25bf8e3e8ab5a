use super::KeyValueStore;
use crate::repository::{self, Error};
use std::{collections::HashMap, sync::Mutex};

#[derive(Default)]
pub struct InMemoryKeyValueStore {
    values: Mutex<HashMap<String, String>>,
}

impl InMemoryKeyValueStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for InMemoryKeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, repository::Error> {
        let values = self.values.lock().map_err(|_| Error::Poisoned)?;

        Ok(values.get(key).cloned())
    }

    fn set(&self, key: &str, value: String) -> Result<(), repository::Error> {
        let mut values = self.values.lock().map_err(|_| Error::Poisoned)?;
        values.insert(key.to_string(), value);

        Ok(())
    }
}
