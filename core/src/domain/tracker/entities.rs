use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::{
    common::entities::app_errors::CoreError,
    day::entities::{ArchivedDay, DayLedger, DayState, LogEntry},
    workout::entities::{WorkoutPlan, seed_workouts},
};

/// Everything the app persists, written as one blob on every change.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ApplicationState {
    pub workouts: Vec<WorkoutPlan>,
    #[serde(flatten)]
    pub ledger: DayLedger,
}

/// Blob shape on the way in: any key may be missing.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PersistedState {
    workouts: Option<Vec<WorkoutPlan>>,
    day_state: Option<DayState>,
    day_logs: Option<Vec<LogEntry>>,
    ended_days: Option<Vec<ArchivedDay>>,
}

impl ApplicationState {
    pub fn seed(today: NaiveDate) -> Self {
        Self {
            workouts: seed_workouts(),
            ledger: DayLedger::new(today),
        }
    }

    pub fn from_blob(blob: &str, today: NaiveDate) -> Result<Self, CoreError> {
        let persisted: PersistedState =
            serde_json::from_str(blob).map_err(|e| CoreError::Serialization(e.to_string()))?;

        Ok(Self {
            workouts: persisted.workouts.unwrap_or_else(seed_workouts),
            ledger: DayLedger {
                day_state: persisted
                    .day_state
                    .map(DayState::normalized)
                    .unwrap_or_else(|| DayState::locked(today)),
                day_logs: persisted.day_logs.unwrap_or_default(),
                ended_days: persisted.ended_days.unwrap_or_default(),
            },
        })
    }

    pub fn to_blob(&self) -> Result<String, CoreError> {
        serde_json::to_string(self).map_err(|e| CoreError::Serialization(e.to_string()))
    }
}
