use serde::{Deserialize, Deserializer, Serialize};

use crate::domain::{
    common::entities::app_errors::CoreError,
    food::entities::{Category, FoodEntry, finite_or_zero},
};

/// A measurement as it arrives from a form field: a number, a numeric string, or anything else.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawMeasurement {
    Number(f64),
    Text(String),
    Other(serde_json::Value),
}

impl RawMeasurement {
    pub fn coerce(&self) -> f64 {
        match self {
            RawMeasurement::Number(value) => finite_or_zero(*value),
            RawMeasurement::Text(text) => text
                .trim()
                .parse::<f64>()
                .map(finite_or_zero)
                .unwrap_or(0.0),
            RawMeasurement::Other(_) => 0.0,
        }
    }
}

pub fn coerce_measurement(raw: Option<&RawMeasurement>) -> f64 {
    raw.map(RawMeasurement::coerce).unwrap_or(0.0)
}

/// `deserialize_with` for stored measurements: `null`, strings and junk read as numbers or 0.
pub fn deserialize_measurement<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<RawMeasurement>::deserialize(deserializer)?;
    Ok(coerce_measurement(raw.as_ref()))
}

#[derive(Debug, Clone, Default)]
pub struct RawFoodInput {
    pub category: String,
    pub food_name: Option<String>,
    pub calories: Option<RawMeasurement>,
    pub protein: Option<RawMeasurement>,
    pub sugar: Option<RawMeasurement>,
    pub salt: Option<RawMeasurement>,
}

impl RawFoodInput {
    pub fn into_entry(self) -> Result<FoodEntry, CoreError> {
        let category: Category = self.category.trim().parse()?;

        Ok(FoodEntry::new(
            category,
            self.food_name.as_deref().unwrap_or_default(),
            coerce_measurement(self.calories.as_ref()),
            coerce_measurement(self.protein.as_ref()),
            coerce_measurement(self.sugar.as_ref()),
            coerce_measurement(self.salt.as_ref()),
        ))
    }
}
