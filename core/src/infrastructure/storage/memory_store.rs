use std::sync::{Arc, Mutex};

use crate::domain::{common::entities::app_errors::CoreError, tracker::ports::StateStore};

/// Process-local store. Clones share the same slot.
#[derive(Debug, Clone, Default)]
pub struct MemoryStateStore {
    blob: Arc<Mutex<Option<String>>>,
}

impl MemoryStateStore {
    pub fn with_blob(blob: &str) -> Self {
        Self {
            blob: Arc::new(Mutex::new(Some(blob.to_string()))),
        }
    }
}

impl StateStore for MemoryStateStore {
    fn load(&self) -> Result<Option<String>, CoreError> {
        self.blob
            .lock()
            .map(|blob| blob.clone())
            .map_err(|_| CoreError::Storage("State lock poisoned".to_string()))
    }

    fn save(&self, blob: &str) -> Result<(), CoreError> {
        let mut slot = self
            .blob
            .lock()
            .map_err(|_| CoreError::Storage("State lock poisoned".to_string()))?;
        *slot = Some(blob.to_string());

        Ok(())
    }
}
