use chrono::{DateTime, Local, NaiveDate, Utc};
use uuid::Uuid;

pub mod entities;

pub const DEFAULT_STATE_KEY: &str = "CUT_LOGGER_V1";

#[derive(Clone, Debug)]
pub struct CutLoggerConfig {
    pub llm: LLMConfig,
    pub storage: StorageConfig,
}

#[derive(Clone, Debug)]
pub struct LLMConfig {
    pub openai_api_key: String,
    pub openai_model: String,
    pub openai_base_url: String,
}

#[derive(Clone, Debug)]
pub struct StorageConfig {
    pub data_dir: String,
    pub state_key: String,
}

/// Source of wall-clock time for the day lifecycle.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;

    /// Calendar date in the user's local time zone.
    fn today(&self) -> NaiveDate;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }

    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// A clock frozen at one instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock {
    pub now: DateTime<Utc>,
    pub today: NaiveDate,
}

impl FixedClock {
    pub fn at(today: NaiveDate) -> Self {
        let now = today
            .and_hms_opt(12, 0, 0)
            .map(|dt| dt.and_utc())
            .unwrap_or_else(Utc::now);

        Self { now, today }
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.now
    }

    fn today(&self) -> NaiveDate {
        self.today
    }
}

/// Time-ordered identifier; successive calls in one process sort in call order.
pub fn generate_uuid_v7() -> Uuid {
    Uuid::now_v7()
}
