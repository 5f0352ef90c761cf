use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{
    common::generate_uuid_v7,
    food::{
        entities::{Category, FoodEntry, Tier},
        value_objects::deserialize_measurement,
    },
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "UPPERCASE")]
pub enum DayStatus {
    Locked,
    Active,
    /// Only found in blobs written by older clients; loads as `Locked`.
    Ended,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct DayState {
    pub date: NaiveDate,
    pub status: DayStatus,
}

impl DayState {
    pub fn locked(date: NaiveDate) -> Self {
        Self {
            date,
            status: DayStatus::Locked,
        }
    }

    pub fn is_active(&self) -> bool {
        self.status == DayStatus::Active
    }

    pub fn normalized(self) -> Self {
        match self.status {
            DayStatus::Ended => Self::locked(self.date),
            _ => self,
        }
    }
}

/// A confirmed food log. Immutable once created.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LogEntry {
    pub id: String,
    pub ts: DateTime<Utc>,
    pub category: String,
    pub category_key: Category,
    pub food_name: String,
    #[serde(default, deserialize_with = "deserialize_measurement")]
    pub calories: f64,
    #[serde(default, deserialize_with = "deserialize_measurement")]
    pub protein: f64,
    #[serde(default, deserialize_with = "deserialize_measurement")]
    pub sugar: f64,
    #[serde(default, deserialize_with = "deserialize_measurement")]
    pub salt: f64,
    pub status: Tier,
}

impl LogEntry {
    pub fn new(entry: &FoodEntry, tier: Tier, ts: DateTime<Utc>) -> Self {
        Self {
            id: generate_uuid_v7().to_string(),
            ts,
            category: entry.category.label().to_string(),
            category_key: entry.category,
            food_name: entry.food_name.clone(),
            calories: entry.calories,
            protein: entry.protein,
            sugar: entry.sugar,
            salt: entry.salt,
            status: tier,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct DaySummary {
    pub green: u32,
    pub yellow: u32,
    pub red: u32,
    pub total: u32,
    pub points: u32,
    pub pct: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ArchivedDay {
    pub date: NaiveDate,
    pub logs: Vec<LogEntry>,
    pub summary: DaySummary,
}

/// The live day slot together with its log and the archive of finished days.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DayLedger {
    pub day_state: DayState,
    pub day_logs: Vec<LogEntry>,
    pub ended_days: Vec<ArchivedDay>,
}

impl DayLedger {
    pub fn new(today: NaiveDate) -> Self {
        Self {
            day_state: DayState::locked(today),
            day_logs: Vec::new(),
            ended_days: Vec::new(),
        }
    }
}
