use tracing::info;

use crate::domain::{
    common::{Clock, entities::app_errors::CoreError},
    day::entities::{ArchivedDay, DayLedger, DayState, DayStatus, DaySummary, LogEntry},
    food::entities::{ClassificationResult, FoodEntry, Tier},
};

/// Count tiers and score the day: 2 points per good entry, 1 per mid, 0 per bad.
pub fn summarize<'a, I>(logs: I) -> DaySummary
where
    I: IntoIterator<Item = &'a LogEntry>,
{
    let mut summary = DaySummary::default();

    for log in logs {
        match log.status {
            Tier::Good => summary.green += 1,
            Tier::Mid => summary.yellow += 1,
            Tier::Bad => summary.red += 1,
        }
    }

    summary.total = summary.green + summary.yellow + summary.red;
    summary.points = summary.green * 2 + summary.yellow;
    summary.pct = if summary.total == 0 {
        0
    } else {
        // round half up of points * 100 / (total * 2), in integers
        (summary.points * 100 + summary.total) / (summary.total * 2)
    };

    summary
}

impl DayLedger {
    pub fn start_day(&mut self, clock: &impl Clock) -> Result<&DayState, CoreError> {
        if self.day_state.is_active() {
            return Err(CoreError::DayAlreadyActive);
        }

        self.day_state = DayState {
            date: clock.today(),
            status: DayStatus::Active,
        };
        info!(date = %self.day_state.date, "day started");

        Ok(&self.day_state)
    }

    pub fn append_log(
        &mut self,
        entry: &FoodEntry,
        result: &ClassificationResult,
        clock: &impl Clock,
    ) -> Result<&LogEntry, CoreError> {
        if !self.day_state.is_active() {
            return Err(CoreError::DayNotActive);
        }

        self.day_logs
            .push(LogEntry::new(entry, result.tier, clock.now()));

        self.day_logs.last().ok_or(CoreError::InternalServerError)
    }

    pub fn end_day(&mut self, clock: &impl Clock) -> Result<ArchivedDay, CoreError> {
        if !self.day_state.is_active() {
            return Err(CoreError::DayNotActive);
        }
        if self.day_logs.is_empty() {
            return Err(CoreError::NothingLogged);
        }

        let logs = std::mem::take(&mut self.day_logs);
        let archived = ArchivedDay {
            date: self.day_state.date,
            summary: summarize(&logs),
            logs,
        };

        self.ended_days.push(archived.clone());
        // the next slot is locked immediately, for whatever today is now
        self.day_state = DayState::locked(clock.today());

        info!(
            date = %archived.date,
            total = archived.summary.total,
            pct = archived.summary.pct,
            "day ended"
        );

        Ok(archived)
    }

    pub fn summary(&self) -> DaySummary {
        summarize(&self.day_logs)
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;
    use crate::domain::{
        common::FixedClock,
        food::{classify, entities::Category},
    };

    fn date(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 3, day).unwrap()
    }

    fn log_with(tier: Tier) -> LogEntry {
        let entry = FoodEntry::new(Category::Snack, "x", 0.0, 0.0, 0.0, 0.0);
        LogEntry::new(&entry, tier, FixedClock::at(date(1)).now)
    }

    fn log_food(ledger: &mut DayLedger, clock: &FixedClock, entry: FoodEntry) {
        let result = classify(&entry);
        ledger.append_log(&entry, &result, clock).unwrap();
    }

    #[test]
    fn test_summarize_empty() {
        let summary = summarize(&Vec::<LogEntry>::new());
        assert_eq!(summary, DaySummary::default());
        assert_eq!(summary.pct, 0);
    }

    #[test]
    fn test_summarize_scores() {
        let logs = vec![log_with(Tier::Good), log_with(Tier::Mid), log_with(Tier::Bad)];
        let summary = summarize(&logs);
        assert_eq!(summary.green, 1);
        assert_eq!(summary.yellow, 1);
        assert_eq!(summary.red, 1);
        assert_eq!(summary.total, 3);
        assert_eq!(summary.points, 3);
        assert_eq!(summary.pct, 50);
    }

    #[test]
    fn test_summarize_rounds_like_formula() {
        for green in 0..5u32 {
            for yellow in 0..5u32 {
                for red in 0..5u32 {
                    let mut logs = Vec::new();
                    logs.extend((0..green).map(|_| log_with(Tier::Good)));
                    logs.extend((0..yellow).map(|_| log_with(Tier::Mid)));
                    logs.extend((0..red).map(|_| log_with(Tier::Bad)));

                    let summary = summarize(&logs);
                    let total = green + yellow + red;
                    let expected = if total == 0 {
                        0
                    } else {
                        (100.0 * f64::from(2 * green + yellow) / f64::from(2 * total)).round()
                            as u32
                    };
                    assert_eq!(summary.pct, expected, "g={green} y={yellow} r={red}");
                    assert!(summary.pct <= 100);
                }
            }
        }
    }

    #[test]
    fn test_summarize_is_order_independent() {
        let forward = vec![log_with(Tier::Good), log_with(Tier::Bad), log_with(Tier::Mid)];
        let reversed: Vec<LogEntry> = forward.iter().rev().cloned().collect();
        assert_eq!(summarize(&forward), summarize(&reversed));
    }

    #[test]
    fn test_append_rejected_when_locked() {
        let clock = FixedClock::at(date(2));
        let mut ledger = DayLedger::new(date(2));
        let entry = FoodEntry::new(Category::Meal, "Curry", 800.0, 20.0, 5.0, 2.0);
        let result = classify(&entry);

        let err = ledger.append_log(&entry, &result, &clock).unwrap_err();
        assert_eq!(err, CoreError::DayNotActive);
        assert!(ledger.day_logs.is_empty());
    }

    #[test]
    fn test_append_accepted_when_active() {
        let clock = FixedClock::at(date(2));
        let mut ledger = DayLedger::new(date(1));
        ledger.start_day(&clock).unwrap();
        assert_eq!(ledger.day_state.date, date(2));

        let entry = FoodEntry::new(Category::Meal, "Curry", 800.0, 20.0, 5.0, 2.0);
        let result = classify(&entry);
        let log = ledger.append_log(&entry, &result, &clock).unwrap().clone();

        assert_eq!(ledger.day_logs.len(), 1);
        assert_eq!(log.status, Tier::Bad);
        assert_eq!(log.category, "Meal");
        assert_eq!(log.ts, clock.now);
    }

    #[test]
    fn test_start_day_twice_is_rejected() {
        let clock = FixedClock::at(date(2));
        let mut ledger = DayLedger::new(date(2));
        ledger.start_day(&clock).unwrap();

        assert_eq!(ledger.start_day(&clock).unwrap_err(), CoreError::DayAlreadyActive);
        assert!(ledger.day_state.is_active());
    }

    #[test]
    fn test_end_day_requires_entries() {
        let clock = FixedClock::at(date(2));
        let mut ledger = DayLedger::new(date(2));
        ledger.start_day(&clock).unwrap();

        assert_eq!(ledger.end_day(&clock).unwrap_err(), CoreError::NothingLogged);
        assert!(ledger.day_state.is_active());
        assert!(ledger.ended_days.is_empty());
    }

    #[test]
    fn test_end_day_archives_and_relocks() {
        let morning = FixedClock::at(date(2));
        let mut ledger = DayLedger::new(date(1));
        ledger.start_day(&morning).unwrap();

        log_food(
            &mut ledger,
            &morning,
            FoodEntry::new(Category::Protein, "Eggs", 150.0, 20.0, 1.0, 0.4),
        );
        log_food(
            &mut ledger,
            &morning,
            FoodEntry::new(Category::Sugar, "Cola", 140.0, 0.0, 35.0, 0.0),
        );
        let before = ledger.summary();

        let next_day = FixedClock::at(date(3));
        let archived = ledger.end_day(&next_day).unwrap();

        assert_eq!(archived.date, date(2));
        assert_eq!(archived.logs.len(), 2);
        assert_eq!(archived.summary, before);
        assert_eq!(archived.summary.pct, 50);
        assert!(ledger.day_logs.is_empty());
        assert_eq!(ledger.ended_days, vec![archived]);
        assert_eq!(ledger.day_state, DayState::locked(date(3)));
    }

    #[test]
    fn test_end_day_rejected_when_locked() {
        let clock = FixedClock::at(date(2));
        let mut ledger = DayLedger::new(date(2));
        assert_eq!(ledger.end_day(&clock).unwrap_err(), CoreError::DayNotActive);
    }

    #[test]
    fn test_ended_status_normalizes_to_locked() {
        let state = DayState {
            date: date(4),
            status: DayStatus::Ended,
        };
        assert_eq!(state.normalized(), DayState::locked(date(4)));
    }
}
