use cutlogger_core::domain::{
    food::value_objects::{RawFoodInput, RawMeasurement},
    workout::value_objects::CreateWorkoutInput,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Food form fields. Measurements may be numbers or numeric strings; anything else counts as 0.
#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FoodInputValidator {
    #[validate(length(min = 1, message = "category is required"))]
    pub category: String,

    #[serde(default, alias = "food_name")]
    pub food_name: Option<String>,

    #[serde(default)]
    #[schema(value_type = Option<f64>)]
    pub calories: Option<RawMeasurement>,

    #[serde(default)]
    #[schema(value_type = Option<f64>)]
    pub protein: Option<RawMeasurement>,

    #[serde(default)]
    #[schema(value_type = Option<f64>)]
    pub sugar: Option<RawMeasurement>,

    #[serde(default)]
    #[schema(value_type = Option<f64>)]
    pub salt: Option<RawMeasurement>,
}

impl From<FoodInputValidator> for RawFoodInput {
    fn from(value: FoodInputValidator) -> Self {
        Self {
            category: value.category,
            food_name: value.food_name,
            calories: value.calories,
            protein: value.protein,
            sugar: value.sugar,
            salt: value.salt,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateWorkoutValidator {
    #[serde(default)]
    #[validate(length(min = 1, message = "Add a name and at least one line."))]
    pub name: String,

    #[serde(default)]
    #[validate(length(min = 1, message = "Add a name and at least one line."))]
    pub items: Vec<String>,
}

impl From<CreateWorkoutValidator> for CreateWorkoutInput {
    fn from(value: CreateWorkoutValidator) -> Self {
        Self {
            name: value.name,
            items: value.items,
        }
    }
}
