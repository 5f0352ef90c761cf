use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::common::entities::app_errors::CoreError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum AssistMode {
    Workout,
    Food,
}

impl AssistMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            AssistMode::Workout => "workout",
            AssistMode::Food => "food",
        }
    }
}

impl fmt::Display for AssistMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AssistMode {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "workout" => Ok(AssistMode::Workout),
            "food" => Ok(AssistMode::Food),
            other => Err(CoreError::Invalid(format!("Unsupported mode: {}", other))),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssistRequest {
    pub mode: AssistMode,
    pub input: String,
    pub constraints: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_parsing() {
        assert_eq!("workout".parse::<AssistMode>().unwrap(), AssistMode::Workout);
        assert_eq!("food".parse::<AssistMode>().unwrap(), AssistMode::Food);
        assert_eq!(
            "Food".parse::<AssistMode>().unwrap_err(),
            CoreError::Invalid("Unsupported mode: Food".to_string())
        );
    }
}
