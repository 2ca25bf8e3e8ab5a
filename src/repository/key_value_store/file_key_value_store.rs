use super::KeyValueStore;
use crate::repository::{self, Error};
use std::{
    collections::BTreeMap,
    fs,
    io::ErrorKind,
    path::{Path, PathBuf},
    sync::Mutex,
};

///
/// [KeyValueStore] that keeps all values in a single JSON object on disk.
///
/// File is created on first write. Writes go through a temporary file
/// that is renamed over the previous one, so a crash never leaves
/// half written JSON behind.
///
pub struct FileKeyValueStore {
    path: PathBuf,
    lock: Mutex<()>,
}

impl FileKeyValueStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_values(&self) -> Result<BTreeMap<String, String>, repository::Error> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(BTreeMap::new()),
            Err(err) => return Err(Error::Io(err)),
        };

        if content.trim().is_empty() {
            return Ok(BTreeMap::new());
        }

        Ok(serde_json::from_str(&content)?)
    }

    fn write_values(&self, values: &BTreeMap<String, String>) -> Result<(), repository::Error> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let content = serde_json::to_string_pretty(values)?;
        let tmp_path = self.path.with_extension("json.tmp");
        fs::write(&tmp_path, content)?;
        fs::rename(&tmp_path, &self.path)?;

        tracing::trace!(path = %self.path.display(), "store written");

        Ok(())
    }
}

impl KeyValueStore for FileKeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, repository::Error> {
        let _guard = self.lock.lock().map_err(|_| Error::Poisoned)?;
        let mut values = self.read_values()?;

        Ok(values.remove(key))
    }

    fn set(&self, key: &str, value: String) -> Result<(), repository::Error> {
        let _guard = self.lock.lock().map_err(|_| Error::Poisoned)?;
        let mut values = self.read_values()?;
        values.insert(key.to_string(), value);

        self.write_values(&values)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn get_when_file_not_exist() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileKeyValueStore::new(dir.path().join("store.json"));

        let value = store.get("any").unwrap();

        assert_eq!(value, None);
    }

    #[test]
    fn set_creates_parent_directories() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("deeper").join("store.json");
        let store = FileKeyValueStore::new(&path);

        store.set("key", "value".to_string()).unwrap();

        assert!(path.exists());
    }

    #[test]
    fn set_value_survives_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("store.json");

        FileKeyValueStore::new(&path)
            .set("notified_events", r#"["complete_42"]"#.to_string())
            .unwrap();

        let reopened = FileKeyValueStore::new(&path);
        let value = reopened.get("notified_events").unwrap();

        assert_eq!(value.as_deref(), Some(r#"["complete_42"]"#));
    }

    #[test]
    fn set_keeps_other_keys() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileKeyValueStore::new(dir.path().join("store.json"));

        store.set("a", "1".to_string()).unwrap();
        store.set("b", "2".to_string()).unwrap();

        assert_eq!(store.get("a").unwrap().as_deref(), Some("1"));
        assert_eq!(store.get("b").unwrap().as_deref(), Some("2"));
    }

    #[test]
    fn get_corrupted_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("store.json");
        fs::write(&path, "{ this is not json").unwrap();
        let store = FileKeyValueStore::new(&path);

        let err = store.get("any").unwrap_err();

        assert!(matches!(err, Error::Serialization(_)));
    }

    #[test]
    fn get_empty_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("store.json");
        fs::write(&path, "").unwrap();
        let store = FileKeyValueStore::new(&path);

        let value = store.get("any").unwrap();

        assert_eq!(value, None);
    }
}
