//! Local key-value persistence. Each logical record lives in its own JSON
//! file under the store root.

use std::{
    fs::{self, File},
    io::{self, Write},
    path::{Path, PathBuf},
};

use directories::ProjectDirs;
use serde::{de::DeserializeOwned, Serialize};
use serde_json::Error as SerdeError;
use tracing::{debug, warn};

const APP_QUALIFIER: &str = "com";
const APP_ORG: &str = "BuildCostEstimator";
const APP_NAME: &str = "BuildCostEstimator";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StoreKey {
    Rates,
    Language,
    Inputs,
    History,
}

impl StoreKey {
    pub fn name(&self) -> &'static str {
        match self {
            StoreKey::Rates => "rates",
            StoreKey::Language => "lang",
            StoreKey::Inputs => "inputs",
            StoreKey::History => "history",
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("storage directory unavailable")]
    StorageUnavailable,
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Serde(#[from] SerdeError),
}

/// Handle to the on-disk store. Created once at startup and shared.
#[derive(Clone, Debug, PartialEq)]
pub struct Store {
    root: PathBuf,
}

impl Store {
    /// Store rooted in the platform config directory.
    pub fn open_default() -> Result<Self, StoreError> {
        ProjectDirs::from(APP_QUALIFIER, APP_ORG, APP_NAME)
            .map(|dirs| Self::at(dirs.config_dir()))
            .ok_or(StoreError::StorageUnavailable)
    }

    pub fn at(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub(crate) fn path(&self, key: StoreKey) -> PathBuf {
        self.root.join(format!("{}.json", key.name()))
    }

    pub(crate) fn read_raw(&self, key: StoreKey) -> Option<String> {
        let path = self.path(key);
        match fs::read_to_string(&path) {
            Ok(content) => Some(content),
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                debug!(key = key.name(), "nothing persisted yet");
                None
            }
            Err(err) => {
                warn!(key = key.name(), path = %path.display(), "failed to read: {err}");
                None
            }
        }
    }

    /// Reads and decodes a record. Missing or malformed data yields `None`.
    pub(crate) fn read_json<T: DeserializeOwned>(&self, key: StoreKey) -> Option<T> {
        let content = self.read_raw(key)?;
        match serde_json::from_str(&content) {
            Ok(value) => Some(value),
            Err(err) => {
                warn!(key = key.name(), "ignoring malformed record: {err}");
                None
            }
        }
    }

    /// Replaces a record in a single write.
    pub(crate) fn write_json<T: Serialize + ?Sized>(
        &self,
        key: StoreKey,
        value: &T,
    ) -> Result<(), StoreError> {
        let json = serde_json::to_string_pretty(value)?;
        atomic_write(&self.path(key), json.as_bytes())?;
        debug!(key = key.name(), bytes = json.len(), "record saved");
        Ok(())
    }
}

/// Writes `data` to `{path}.tmp` and renames it over `path`, so readers see
/// either the old or the new content.
pub fn atomic_write(path: &Path, data: &[u8]) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    let mut tmp_name = path.as_os_str().to_owned();
    tmp_name.push(".tmp");
    let tmp_path = PathBuf::from(tmp_name);

    let written = File::create(&tmp_path).and_then(|mut file| {
        file.write_all(data)?;
        file.sync_all()
    });
    if let Err(err) = written.and_then(|_| fs::rename(&tmp_path, path)) {
        let _ = fs::remove_file(&tmp_path);
        return Err(err);
    }
    Ok(())
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    /// Fresh, empty directory for one test.
    pub(crate) fn test_store(name: &str) -> Store {
        let dir = std::env::temp_dir().join(format!(
            "build_cost_estimator_{name}_{}",
            uuid::Uuid::new_v4()
        ));
        let _ = fs::remove_dir_all(&dir);
        Store::at(dir)
    }

    #[test]
    fn missing_record_reads_as_none() {
        let store = test_store("missing");
        assert_eq!(store.read_json::<Vec<u32>>(StoreKey::History), None);
    }

    #[test]
    fn write_then_read_round_trips() {
        let store = test_store("round_trip");
        store.write_json(StoreKey::Inputs, &vec![1, 2, 3]).unwrap();
        assert_eq!(store.read_json::<Vec<u32>>(StoreKey::Inputs), Some(vec![1, 2, 3]));
        assert!(store.path(StoreKey::Inputs).ends_with("inputs.json"));
        let _ = fs::remove_dir_all(store.root());
    }

    #[test]
    fn malformed_record_reads_as_none() {
        let store = test_store("malformed");
        fs::create_dir_all(store.root()).unwrap();
        fs::write(store.path(StoreKey::Rates), "{not json").unwrap();
        assert_eq!(store.read_json::<serde_json::Value>(StoreKey::Rates), None);
        let _ = fs::remove_dir_all(store.root());
    }

    #[test]
    fn atomic_write_leaves_no_temp_file() {
        let store = test_store("atomic");
        let path = store.root().join("nested").join("data.json");
        atomic_write(&path, b"first").unwrap();
        atomic_write(&path, b"second").unwrap();
        assert_eq!(fs::read(&path).unwrap(), b"second");
        assert!(!store.root().join("nested").join("data.json.tmp").exists());
        let _ = fs::remove_dir_all(store.root());
    }
}
