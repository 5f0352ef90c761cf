use tracing::info;

use crate::domain::{
    common::entities::app_errors::CoreError,
    workout::{entities::WorkoutPlan, value_objects::CreateWorkoutInput},
};

pub fn add_workout(
    workouts: &mut Vec<WorkoutPlan>,
    input: CreateWorkoutInput,
) -> Result<WorkoutPlan, CoreError> {
    let name = input.name.trim().to_string();
    let items: Vec<String> = input
        .items
        .iter()
        .map(|item| item.trim())
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect();

    if name.is_empty() || items.is_empty() {
        return Err(CoreError::Invalid(
            "Add a name and at least one line.".to_string(),
        ));
    }

    let plan = WorkoutPlan::new(name, items);
    workouts.push(plan.clone());
    info!(id = %plan.id, lines = plan.items.len(), "workout added");

    Ok(plan)
}

pub fn remove_workout(workouts: &mut Vec<WorkoutPlan>, id: &str) -> Result<WorkoutPlan, CoreError> {
    let index = workouts
        .iter()
        .position(|plan| plan.id == id)
        .ok_or(CoreError::NotFound)?;

    let removed = workouts.remove(index);
    info!(id = %removed.id, "workout removed");

    Ok(removed)
}
