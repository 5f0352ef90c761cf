use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{
    common::entities::app_errors::CoreError,
    food::tips::{FALLBACK_BAD_ADVICE, FALLBACK_MID_ADVICE},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Protein,
    Calories,
    Salt,
    Potassium,
    Sugar,
    Meal,
    Snack,
}

impl Category {
    pub const ALL: [Category; 7] = [
        Category::Protein,
        Category::Calories,
        Category::Salt,
        Category::Potassium,
        Category::Sugar,
        Category::Meal,
        Category::Snack,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            Category::Protein => "protein",
            Category::Calories => "calories",
            Category::Salt => "salt",
            Category::Potassium => "potassium",
            Category::Sugar => "sugar",
            Category::Meal => "meal",
            Category::Snack => "snack",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Category::Protein => "Protein",
            Category::Calories => "Calories",
            Category::Salt => "Salt",
            Category::Potassium => "Potassium",
            Category::Sugar => "Sugar",
            Category::Meal => "Meal",
            Category::Snack => "Snack",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Category {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|category| category.key() == s)
            .ok_or_else(|| CoreError::Invalid(format!("Unknown category: {s}")))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Tier {
    Good,
    Mid,
    Bad,
}

/// A food item as typed by the user, before classification.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct FoodEntry {
    pub category: Category,
    pub food_name: String,
    pub calories: f64,
    pub protein: f64,
    pub sugar: f64,
    pub salt: f64,
}

impl FoodEntry {
    pub fn new(
        category: Category,
        food_name: &str,
        calories: f64,
        protein: f64,
        sugar: f64,
        salt: f64,
    ) -> Self {
        let food_name = match food_name.trim() {
            "" => "Unknown".to_string(),
            name => name.to_string(),
        };

        Self {
            category,
            food_name,
            calories: finite_or_zero(calories),
            protein: finite_or_zero(protein),
            sugar: finite_or_zero(sugar),
            salt: finite_or_zero(salt),
        }
    }

    /// Lower-cased, trimmed name used for keyword matching.
    pub fn match_name(&self) -> String {
        self.food_name.trim().to_lowercase()
    }
}

pub(crate) fn finite_or_zero(value: f64) -> f64 {
    if value.is_finite() { value } else { 0.0 }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ClassificationResult {
    pub tier: Tier,
    pub title: String,
    pub why: Vec<String>,
    pub tips_doing: Vec<String>,
    pub tips_should: Vec<String>,
}

impl ClassificationResult {
    /// Advice to show under the result, with a generic line when the branch gave none.
    pub fn advice(&self) -> Vec<String> {
        match self.tier {
            Tier::Good => Vec::new(),
            Tier::Mid if self.tips_should.is_empty() => vec![FALLBACK_MID_ADVICE.to_string()],
            Tier::Bad if self.tips_should.is_empty() => vec![FALLBACK_BAD_ADVICE.to_string()],
            _ => self.tips_should.clone(),
        }
    }
}
