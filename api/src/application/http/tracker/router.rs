use super::handlers::classify_food::{__path_classify_food, classify_food};
use super::handlers::create_workout::{__path_create_workout, create_workout};
use super::handlers::delete_workout::{__path_delete_workout, delete_workout};
use super::handlers::end_day::{__path_end_day, end_day};
use super::handlers::get_categories::{__path_get_categories, get_categories};
use super::handlers::get_history::{__path_get_history, get_history};
use super::handlers::get_state::{__path_get_state, get_state};
use super::handlers::get_summary::{__path_get_summary, get_summary};
use super::handlers::get_tips::{__path_get_tips, get_tips};
use super::handlers::get_workouts::{__path_get_workouts, get_workouts};
use super::handlers::log_food::{__path_log_food, log_food};
use super::handlers::start_day::{__path_start_day, start_day};
use crate::application::http::server::app_state::AppState;

use axum::{
    Router,
    routing::{delete, get, post},
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(
    get_state,
    get_categories,
    classify_food,
    start_day,
    log_food,
    end_day,
    get_summary,
    get_history,
    get_workouts,
    create_workout,
    delete_workout,
    get_tips
))]
pub struct TrackerApiDoc;

pub fn tracker_routes(state: AppState) -> Router<AppState> {
    let root_path = &state.args.server.root_path;

    Router::new()
        .route(&format!("{}/tracker/state", root_path), get(get_state))
        .route(
            &format!("{}/tracker/categories", root_path),
            get(get_categories),
        )
        .route(
            &format!("{}/tracker/classify", root_path),
            post(classify_food),
        )
        .route(&format!("{}/tracker/day/start", root_path), post(start_day))
        .route(&format!("{}/tracker/day/end", root_path), post(end_day))
        .route(&format!("{}/tracker/logs", root_path), post(log_food))
        .route(&format!("{}/tracker/summary", root_path), get(get_summary))
        .route(&format!("{}/tracker/history", root_path), get(get_history))
        .route(
            &format!("{}/tracker/workouts", root_path),
            get(get_workouts).post(create_workout),
        )
        .route(
            &format!("{}/tracker/workouts/{{workout_id}}", root_path),
            delete(delete_workout),
        )
        .route(&format!("{}/tracker/tips", root_path), get(get_tips))
}
