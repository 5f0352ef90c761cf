use std::{
    fs, io,
    path::{Path, PathBuf},
};

use tracing::debug;

use crate::domain::{common::entities::app_errors::CoreError, tracker::ports::StateStore};

/// Keeps the blob in `<data_dir>/<key>.json`.
///
/// Writes go to a sibling temp file that is renamed over the target, so a
/// crash mid-write leaves the previous blob intact.
#[derive(Debug, Clone)]
pub struct FileStateStore {
    path: PathBuf,
}

impl FileStateStore {
    pub fn new(data_dir: impl AsRef<Path>, key: &str) -> Result<Self, CoreError> {
        let data_dir = data_dir.as_ref();
        fs::create_dir_all(data_dir).map_err(|e| {
            CoreError::Storage(format!(
                "Failed to create data directory {}: {}",
                data_dir.display(),
                e
            ))
        })?;

        Ok(Self {
            path: data_dir.join(format!("{}.json", key)),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl StateStore for FileStateStore {
    fn load(&self) -> Result<Option<String>, CoreError> {
        match fs::read_to_string(&self.path) {
            Ok(blob) => Ok(Some(blob)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(CoreError::Storage(format!(
                "Failed to read {}: {}",
                self.path.display(),
                e
            ))),
        }
    }

    fn save(&self, blob: &str) -> Result<(), CoreError> {
        let tmp = self.path.with_extension("json.tmp");

        fs::write(&tmp, blob)
            .and_then(|_| fs::rename(&tmp, &self.path))
            .map_err(|e| {
                CoreError::Storage(format!("Failed to write {}: {}", self.path.display(), e))
            })?;

        debug!(path = %self.path.display(), bytes = blob.len(), "state saved");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_loads_none() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStateStore::new(dir.path(), "CUT_LOGGER_V1").unwrap();
        assert_eq!(store.load().unwrap(), None);
    }

    #[test]
    fn test_save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStateStore::new(dir.path().join("nested"), "CUT_LOGGER_V1").unwrap();

        store.save(r#"{"workouts":[]}"#).unwrap();
        store.save(r#"{"workouts":[1]}"#).unwrap();

        assert_eq!(store.load().unwrap().as_deref(), Some(r#"{"workouts":[1]}"#));
        assert!(store.path().ends_with("nested/CUT_LOGGER_V1.json"));
        assert!(!store.path().with_extension("json.tmp").exists());
    }

    #[test]
    fn test_unreadable_path_is_storage_error() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStateStore::new(dir.path(), "state").unwrap();
        // a directory where the file should be
        fs::create_dir(store.path()).unwrap();

        assert!(matches!(store.load(), Err(CoreError::Storage(_))));
        assert!(matches!(store.save("{}"), Err(CoreError::Storage(_))));
    }
}
