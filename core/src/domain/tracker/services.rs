use tracing::{debug, warn};

use crate::domain::{
    common::{Clock, SystemClock, entities::app_errors::CoreError},
    day::{
        entities::{ArchivedDay, DayState, DaySummary, LogEntry},
        services::summarize,
    },
    food::{
        entities::{ClassificationResult, FoodEntry},
        services::classify,
    },
    tracker::{entities::ApplicationState, ports::StateStore},
    workout::{
        entities::WorkoutPlan,
        services::{add_workout, remove_workout},
        value_objects::CreateWorkoutInput,
    },
};

/// Owns the application state for one session and writes it through to a [`StateStore`].
///
/// The in-memory state is the source of truth. Saves are best effort: a failed
/// write is logged and the mutation stands.
pub struct Tracker<S, C = SystemClock>
where
    S: StateStore,
    C: Clock,
{
    state: ApplicationState,
    store: S,
    clock: C,
}

impl<S> Tracker<S, SystemClock>
where
    S: StateStore,
{
    pub fn load(store: S) -> Self {
        Self::load_with_clock(store, SystemClock)
    }
}

impl<S, C> Tracker<S, C>
where
    S: StateStore,
    C: Clock,
{
    /// Restore the last saved state, or start from the seed when there is none
    /// or it cannot be read.
    pub fn load_with_clock(store: S, clock: C) -> Self {
        let today = clock.today();

        let state = match store.load() {
            Ok(Some(blob)) => ApplicationState::from_blob(&blob, today).unwrap_or_else(|e| {
                warn!("Failed to parse saved state, starting fresh: {}", e);
                ApplicationState::seed(today)
            }),
            Ok(None) => {
                debug!("No saved state, starting fresh");
                ApplicationState::seed(today)
            }
            Err(e) => {
                warn!("Failed to load saved state, starting fresh: {}", e);
                ApplicationState::seed(today)
            }
        };

        Self {
            state,
            store,
            clock,
        }
    }

    pub fn state(&self) -> &ApplicationState {
        &self.state
    }

    pub fn day_state(&self) -> &DayState {
        &self.state.ledger.day_state
    }

    pub fn day_logs(&self) -> &[LogEntry] {
        &self.state.ledger.day_logs
    }

    pub fn history(&self) -> &[ArchivedDay] {
        &self.state.ledger.ended_days
    }

    pub fn workouts(&self) -> &[WorkoutPlan] {
        &self.state.workouts
    }

    pub fn summary(&self) -> DaySummary {
        summarize(&self.state.ledger.day_logs)
    }

    pub fn classify(&self, entry: &FoodEntry) -> ClassificationResult {
        classify(entry)
    }

    pub fn start_day(&mut self) -> Result<DayState, CoreError> {
        let day_state = self.state.ledger.start_day(&self.clock)?.clone();
        self.persist();

        Ok(day_state)
    }

    /// Classify the entry and, if the day is active, append it to the live log.
    pub fn log_food(&mut self, entry: &FoodEntry) -> Result<LogEntry, CoreError> {
        let result = classify(entry);
        let log = self
            .state
            .ledger
            .append_log(entry, &result, &self.clock)?
            .clone();
        self.persist();

        Ok(log)
    }

    pub fn end_day(&mut self) -> Result<ArchivedDay, CoreError> {
        let archived = self.state.ledger.end_day(&self.clock)?;
        self.persist();

        Ok(archived)
    }

    pub fn add_workout(&mut self, input: CreateWorkoutInput) -> Result<WorkoutPlan, CoreError> {
        let plan = add_workout(&mut self.state.workouts, input)?;
        self.persist();

        Ok(plan)
    }

    pub fn remove_workout(&mut self, id: &str) -> Result<WorkoutPlan, CoreError> {
        let plan = remove_workout(&mut self.state.workouts, id)?;
        self.persist();

        Ok(plan)
    }

    fn persist(&self) {
        let result = self
            .state
            .to_blob()
            .and_then(|blob| self.store.save(&blob));

        if let Err(e) = result {
            warn!("Failed to save state: {}", e);
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;
    use crate::{
        domain::{
            common::FixedClock,
            day::entities::DayStatus,
            food::entities::{Category, Tier},
            tracker::ports::MockStateStore,
        },
        infrastructure::storage::MemoryStateStore,
    };

    fn clock() -> FixedClock {
        FixedClock::at(NaiveDate::from_ymd_opt(2026, 7, 4).unwrap())
    }

    fn tuna() -> FoodEntry {
        FoodEntry::new(Category::Protein, "Tuna", 120.0, 26.0, 0.0, 0.8)
    }

    #[test]
    fn test_load_seeds_when_store_is_empty() {
        let tracker = Tracker::load_with_clock(MemoryStateStore::default(), clock());
        assert_eq!(tracker.workouts().len(), 2);
        assert_eq!(tracker.day_state(), &DayState::locked(clock().today));
    }

    #[test]
    fn test_load_falls_back_on_store_error() {
        let mut store = MockStateStore::new();
        store
            .expect_load()
            .returning(|| Err(CoreError::Storage("disk gone".to_string())));

        let tracker = Tracker::load_with_clock(store, clock());
        assert_eq!(tracker.state(), &ApplicationState::seed(clock().today));
    }

    #[test]
    fn test_load_falls_back_on_corrupt_blob() {
        let store = MemoryStateStore::with_blob("][");
        let tracker = Tracker::load_with_clock(store, clock());
        assert_eq!(tracker.state(), &ApplicationState::seed(clock().today));
    }

    #[test]
    fn test_every_mutation_saves_full_blob() {
        let mut store = MockStateStore::new();
        store.expect_load().returning(|| Ok(None));
        store.expect_save().times(3).returning(|_| Ok(()));

        let mut tracker = Tracker::load_with_clock(store, clock());
        tracker.start_day().unwrap();
        tracker.log_food(&tuna()).unwrap();
        tracker.end_day().unwrap();
    }

    #[test]
    fn test_rejected_operation_does_not_save() {
        let mut store = MockStateStore::new();
        store.expect_load().returning(|| Ok(None));
        store.expect_save().never();

        let mut tracker = Tracker::load_with_clock(store, clock());
        assert_eq!(tracker.log_food(&tuna()).unwrap_err(), CoreError::DayNotActive);
        assert_eq!(tracker.end_day().unwrap_err(), CoreError::DayNotActive);
    }

    #[test]
    fn test_failed_save_keeps_in_memory_state() {
        let mut store = MockStateStore::new();
        store.expect_load().returning(|| Ok(None));
        store
            .expect_save()
            .returning(|_| Err(CoreError::Storage("read-only".to_string())));

        let mut tracker = Tracker::load_with_clock(store, clock());
        let day = tracker.start_day().unwrap();
        assert_eq!(day.status, DayStatus::Active);

        let log = tracker.log_food(&tuna()).unwrap();
        assert_eq!(log.status, Tier::Good);
        assert_eq!(tracker.day_logs().len(), 1);
    }

    #[test]
    fn test_state_survives_reload() {
        let store = MemoryStateStore::default();
        let mut tracker = Tracker::load_with_clock(store.clone(), clock());
        tracker.start_day().unwrap();
        tracker.log_food(&tuna()).unwrap();
        tracker.end_day().unwrap();
        tracker
            .add_workout(CreateWorkoutInput {
                name: "Stretch".to_string(),
                items: vec!["Hamstrings 60s".to_string()],
            })
            .unwrap();

        let reloaded = Tracker::load_with_clock(store, clock());
        assert_eq!(reloaded.state(), tracker.state());
        assert_eq!(reloaded.history().len(), 1);
        assert_eq!(reloaded.history()[0].summary.pct, 100);
        assert_eq!(reloaded.workouts().len(), 3);
    }
}
