use crate::domain::common::entities::app_errors::CoreError;

/// Key-value blob store holding the serialized application state under one key.
#[cfg_attr(test, mockall::automock)]
pub trait StateStore: Send + Sync {
    /// Returns the last saved blob, or `None` when nothing was ever saved.
    fn load(&self) -> Result<Option<String>, CoreError>;

    /// Overwrites the stored blob.
    fn save(&self, blob: &str) -> Result<(), CoreError>;
}
