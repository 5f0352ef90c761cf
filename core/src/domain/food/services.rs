use crate::domain::food::{
    entities::{ClassificationResult, FoodEntry, Tier},
    policies::evaluate,
    tips::{DOING_WELL_TIPS, FALLBACK_WHY},
};

/// Classify a food entry against the cut targets of its category.
///
/// Deterministic and infallible: every entry yields a result.
pub fn classify(entry: &FoodEntry) -> ClassificationResult {
    let verdict = evaluate(entry);

    let mut why: Vec<String> = verdict.why.iter().map(|s| s.to_string()).collect();
    if why.is_empty() {
        why.push(FALLBACK_WHY.to_string());
    }

    let tips_doing = match verdict.tier {
        Tier::Bad => Vec::new(),
        Tier::Good | Tier::Mid => DOING_WELL_TIPS.iter().map(|s| s.to_string()).collect(),
    };

    let tips_should = match verdict.tier {
        Tier::Good => Vec::new(),
        Tier::Mid | Tier::Bad => verdict.should.iter().map(|s| s.to_string()).collect(),
    };

    ClassificationResult {
        tier: verdict.tier,
        title: verdict.title.to_string(),
        why,
        tips_doing,
        tips_should,
    }
}
