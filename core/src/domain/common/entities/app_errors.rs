use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    #[error("{0}")]
    Invalid(String),

    #[error("Not found")]
    NotFound,

    #[error("Day not active. Press Start new day first.")]
    DayNotActive,

    #[error("Day already started.")]
    DayAlreadyActive,

    #[error("Nothing logged yet. Log at least one thing before ending the day.")]
    NothingLogged,

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("{0}")]
    ExternalServiceError(String),

    #[error("Internal server error")]
    InternalServerError,
}

impl CoreError {
    /// Rejections caused by calling a lifecycle operation in the wrong status.
    pub fn is_illegal_transition(&self) -> bool {
        matches!(
            self,
            CoreError::DayNotActive | CoreError::DayAlreadyActive | CoreError::NothingLogged
        )
    }
}
