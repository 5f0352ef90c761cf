use crate::domain::assistant::entities::{AssistMode, AssistRequest};

const NO_CONSTRAINTS: &str = "None";

pub fn build_prompt(request: &AssistRequest) -> String {
    let constraints = request
        .constraints
        .as_deref()
        .filter(|c| !c.is_empty())
        .unwrap_or(NO_CONSTRAINTS);

    match request.mode {
        AssistMode::Workout => format!(
            "You are a home-workout assistant.
User: \"{input}\"
Constraints: \"{constraints}\"
Return:
- 3 substitutions OR regressions
- 1 progression
- reps/time for each
- 1 safety note
Bullet points only. Short.",
            input = request.input,
        ),
        AssistMode::Food => format!(
            "You are a nutrition assistant for a calorie deficit.
Food: \"{input}\"
Constraints: \"{constraints}\"
Return:
- 5 substitutions
- each: why it's better for a cut (protein/calories/sugar/salt/potassium)
Bullet points only. Short.",
            input = request.input,
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(mode: AssistMode, constraints: Option<&str>) -> AssistRequest {
        AssistRequest {
            mode,
            input: "push-ups".to_string(),
            constraints: constraints.map(str::to_string),
        }
    }

    #[test]
    fn test_workout_prompt() {
        let prompt = build_prompt(&request(AssistMode::Workout, Some("Home only")));
        assert!(prompt.starts_with("You are a home-workout assistant.\nUser: \"push-ups\"\n"));
        assert!(prompt.contains("Constraints: \"Home only\"\n"));
        assert!(prompt.ends_with("- 1 safety note\nBullet points only. Short."));
    }

    #[test]
    fn test_food_prompt() {
        let prompt = build_prompt(&request(AssistMode::Food, None));
        assert!(prompt.starts_with("You are a nutrition assistant for a calorie deficit.\n"));
        assert!(prompt.contains("Food: \"push-ups\"\n"));
        assert!(prompt.contains("- 5 substitutions\n"));
    }

    #[test]
    fn test_blank_constraints_become_none() {
        for constraints in [None, Some("")] {
            let prompt = build_prompt(&request(AssistMode::Workout, constraints));
            assert!(prompt.contains("Constraints: \"None\"\n"));
        }
    }
}
