use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::common::generate_uuid_v7;

/// A named routine. Lines are free text, with no sets/reps structure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct WorkoutPlan {
    pub id: String,
    pub name: String,
    pub items: Vec<String>,
}

impl WorkoutPlan {
    pub fn new(name: String, items: Vec<String>) -> Self {
        Self {
            id: format!("w_{}", generate_uuid_v7().simple()),
            name,
            items,
        }
    }
}

const PUSH_ITEMS: [&str; 8] = [
    "Warm-up 3–5 min: arm circles + bodyweight squats + shoulder taps",
    "Incline push-ups (hands on bed/sofa) x10–20 (regress) OR normal x6–15",
    "Pike push-ups x6–12 (shoulders) OR wall pike hold 20–40s",
    "Chair dips x6–12 (triceps) OR bench dip with knees bent x8–15",
    "Split squats x8–15 each leg (slow)",
    "Wall sit 45–75s",
    "Optional finisher: slow push-ups AMRAP (stop 1–2 reps before failure)",
    "Rest 45–75s between exercises. 3–5 rounds total.",
];

const PULL_ITEMS: [&str; 8] = [
    "Warm-up 3–5 min: hip hinges + glute bridges + scap squeezes",
    "Backpack rows x10–20 (fill bag with books/water bottles)",
    "Towel rows (door-anchored carefully) x6–15 OR backpack row again",
    "Biceps curls (backpack or bottles) x10–20",
    "Romanian deadlift (backpack) x10–20 (slow hinge)",
    "Glute bridges x12–25 (pause at top 1s)",
    "Dead bug x10–16 total OR plank 45–75s",
    "Rest 45–75s between exercises. 3–5 rounds total.",
];

/// The two built-in home routines every fresh install starts with.
pub fn seed_workouts() -> Vec<WorkoutPlan> {
    vec![
        WorkoutPlan {
            id: "w_push".to_string(),
            name: "PUSH (Home) — Chest / Shoulders / Triceps / Quads".to_string(),
            items: PUSH_ITEMS.iter().map(|s| s.to_string()).collect(),
        },
        WorkoutPlan {
            id: "w_pull".to_string(),
            name: "PULL (Home) — Back / Biceps / Glutes / Hamstrings / Core".to_string(),
            items: PULL_ITEMS.iter().map(|s| s.to_string()).collect(),
        },
    ]
}
