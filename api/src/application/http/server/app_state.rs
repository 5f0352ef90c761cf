use std::sync::{Arc, Mutex};

use cutlogger_core::{
    application::{CutLoggerAssistant, CutLoggerTracker},
    domain::common::entities::app_errors::CoreError,
};

use crate::{application::http::server::api_entities::api_error::ApiError, args::Args};

#[derive(Clone)]
pub struct AppState {
    pub args: Arc<Args>,
    pub assistant: Arc<CutLoggerAssistant>,
    pub tracker: Arc<Mutex<CutLoggerTracker>>,
}

impl AppState {
    pub fn new(args: Arc<Args>, assistant: CutLoggerAssistant, tracker: CutLoggerTracker) -> Self {
        Self {
            args,
            assistant: Arc::new(assistant),
            tracker: Arc::new(Mutex::new(tracker)),
        }
    }

    /// Run one synchronous tracker operation under the lock.
    pub fn with_tracker<T, F>(&self, f: F) -> Result<T, ApiError>
    where
        F: FnOnce(&mut CutLoggerTracker) -> Result<T, CoreError>,
    {
        let mut tracker = self
            .tracker
            .lock()
            .map_err(|_| ApiError::InternalServerError("Tracker state is unavailable".to_string()))?;

        f(&mut *tracker).map_err(ApiError::from)
    }
}
