pub mod classify_food;
pub mod create_workout;
pub mod delete_workout;
pub mod end_day;
pub mod get_categories;
pub mod get_history;
pub mod get_state;
pub mod get_summary;
pub mod get_tips;
pub mod get_workouts;
pub mod log_food;
pub mod start_day;
