use crate::domain::food::entities::{Category, FoodEntry, Tier};

/// Keywords that mark a food as potassium-rich. Matched as exact substrings.
pub const POTASSIUM_FOODS: [&str; 5] = ["banana", "potato", "spinach", "beans", "yoghurt"];

/// Outcome of one branch of the decision table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Verdict {
    pub tier: Tier,
    pub title: &'static str,
    pub why: &'static [&'static str],
    pub should: &'static [&'static str],
}

impl Verdict {
    const fn new(
        tier: Tier,
        title: &'static str,
        why: &'static [&'static str],
        should: &'static [&'static str],
    ) -> Self {
        Self {
            tier,
            title,
            why,
            should,
        }
    }
}

/// Runs the branch selected by the entry's category. Only that branch is consulted.
pub fn evaluate(entry: &FoodEntry) -> Verdict {
    match entry.category {
        Category::Protein => protein(entry),
        Category::Calories => calories(entry),
        Category::Sugar => sugar(entry),
        Category::Salt => salt(entry),
        Category::Potassium => potassium(entry),
        Category::Meal => meal(entry),
        Category::Snack => snack(entry),
    }
}

fn protein(entry: &FoodEntry) -> Verdict {
    if entry.protein >= 20.0 && entry.calories <= 350.0 && entry.sugar <= 8.0 {
        Verdict::new(
            Tier::Good,
            "Good choice",
            &["High protein for the calories."],
            &[],
        )
    } else if entry.protein >= 10.0 {
        Verdict::new(
            Tier::Mid,
            "Okay, could be better",
            &["Some protein, but not great per calorie."],
            &["Pick a leaner protein option next time."],
        )
    } else {
        Verdict::new(
            Tier::Bad,
            "Not helping your protein goal",
            &["Too low protein for your cut."],
            &[
                "Swap to eggs, tuna, lentils, yoghurt, beans.",
                "Make each meal protein-centred.",
            ],
        )
    }
}

fn calories(entry: &FoodEntry) -> Verdict {
    if entry.calories <= 250.0 {
        Verdict::new(
            Tier::Good,
            "Low calorie win",
            &["Easy to stay in deficit."],
            &[],
        )
    } else if entry.calories <= 450.0 {
        Verdict::new(
            Tier::Mid,
            "Manageable, watch the rest of the day",
            &["This can fit, but don’t stack heavy foods."],
            &["Keep the next meal lighter."],
        )
    } else {
        Verdict::new(
            Tier::Bad,
            "Too heavy for a tight cut",
            &["High calories makes 1400–1500 harder."],
            &[
                "Reduce portion or swap to higher-volume foods.",
                "Avoid sugary/processed extras.",
            ],
        )
    }
}

fn sugar(entry: &FoodEntry) -> Verdict {
    if entry.sugar <= 5.0 {
        Verdict::new(
            Tier::Good,
            "Low sugar",
            &["Helps debloat and keeps cravings down."],
            &[],
        )
    } else if entry.sugar <= 15.0 {
        Verdict::new(
            Tier::Mid,
            "A bit sugary",
            &["Okay sometimes, but keep it controlled."],
            &["Choose lower sugar options more often."],
        )
    } else {
        Verdict::new(
            Tier::Bad,
            "Too much sugar",
            &["Likely to spike cravings and add junk calories."],
            &[
                "Swap to protein + fruit/veg instead.",
                "Avoid fizzy drinks and sweets.",
            ],
        )
    }
}

fn salt(entry: &FoodEntry) -> Verdict {
    if entry.salt <= 0.6 {
        Verdict::new(Tier::Good, "Low salt", &["Better for debloating."], &[])
    } else if entry.salt <= 1.5 {
        Verdict::new(
            Tier::Mid,
            "Moderate salt",
            &["Fine, but don’t stack salty foods today."],
            &["Drink water and keep the next meal lower salt."],
        )
    } else {
        Verdict::new(
            Tier::Bad,
            "High salt",
            &["Can cause water retention and bloat."],
            &[
                "Reduce salt for the rest of the day.",
                "Add potassium foods + water.",
            ],
        )
    }
}

// Never rates `bad`: a non-potassium food is only nudged.
fn potassium(entry: &FoodEntry) -> Verdict {
    let name = entry.match_name();
    let is_potassium_food = POTASSIUM_FOODS.iter().any(|food| name.contains(food));

    if is_potassium_food {
        Verdict::new(
            Tier::Good,
            "Potassium boost",
            &["Supports debloat when salt is lower."],
            &[],
        )
    } else {
        Verdict::new(
            Tier::Mid,
            "Okay, add a potassium side",
            &["Not clearly potassium-focused."],
            &["Add banana, potato, spinach, beans, yoghurt."],
        )
    }
}

fn meal(entry: &FoodEntry) -> Verdict {
    if entry.protein >= 25.0 && entry.calories <= 550.0 && entry.sugar <= 10.0 {
        Verdict::new(
            Tier::Good,
            "Good meal for the cut",
            &["Protein-forward and controlled calories."],
            &[],
        )
    } else if entry.calories <= 700.0 {
        Verdict::new(
            Tier::Mid,
            "Meal is okay, tighten the balance",
            &["Keep protein up and keep calories controlled."],
            &["Add lean protein. Reduce sauces/fats."],
        )
    } else {
        Verdict::new(
            Tier::Bad,
            "Meal is too heavy",
            &["Too high calorie for a tight deficit."],
            &["Smaller portion + add veg.", "Keep next meal lighter."],
        )
    }
}

fn snack(entry: &FoodEntry) -> Verdict {
    if entry.calories <= 200.0 && (entry.protein >= 10.0 || entry.sugar <= 8.0) {
        Verdict::new(
            Tier::Good,
            "Good snack",
            &["Fits the cut without wrecking calories."],
            &[],
        )
    } else if entry.calories <= 300.0 {
        Verdict::new(
            Tier::Mid,
            "Snack is okay, but be careful",
            &["Can fit, but don’t keep stacking snacks."],
            &["Prefer protein snacks (yoghurt, eggs, tuna)."],
        )
    } else {
        Verdict::new(
            Tier::Bad,
            "Snack is too big",
            &["Too many calories for a snack on a cut."],
            &["Swap to higher-protein, lower-cal snack."],
        )
    }
}
