/// Habits credited on every entry that is not rated `bad`.
pub const DOING_WELL_TIPS: [&str; 6] = [
    "Drink 3L water",
    "Aim 90g+ protein",
    "Avoid sugar/processed foods",
    "Reduce salt",
    "Move indoors often",
    "Sleep 8–9 hours",
];

pub const TIP_LIBRARY: [&str; 12] = [
    "Keep calories 1400–1500 (adjust if you feel weak).",
    "Hit 90g+ protein daily. 3 proper meals spaced out.",
    "Drink 3L water. Avoid fizzy drinks.",
    "Reduce salt to help debloat.",
    "Add potassium foods (bananas, potatoes, beans).",
    "Avoid sugar and processed foods.",
    "Move often indoors: stairs, chores, pacing, standing.",
    "Sleep 8–9 hours. Keep stress down.",
    "Black coffee pre-workout (max 2 cups).",
    "Slow reps. Quality > endless reps.",
    "Don’t overtrain. More isn’t always better.",
    "After 10 days + 15k steps: add 200–300 calories back.",
];

pub const FALLBACK_WHY: &str = "Based on your cut targets.";
pub const FALLBACK_MID_ADVICE: &str = "Tighten the next choice.";
pub const FALLBACK_BAD_ADVICE: &str = "Swap to a better option.";
