use cutlogger_core::domain::{
    assistant::entities::{AssistMode, AssistRequest},
    common::entities::app_errors::CoreError,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

pub const MISSING_MODE_OR_INPUT: &str = "Missing mode or input";

#[derive(Debug, Default, Serialize, Deserialize, Validate, ToSchema)]
pub struct AssistValidator {
    /// `workout` or `food`.
    #[validate(
        required(message = "Missing mode or input"),
        length(min = 1, message = "Missing mode or input")
    )]
    #[serde(default)]
    pub mode: Option<String>,

    #[validate(
        required(message = "Missing mode or input"),
        length(min = 1, message = "Missing mode or input")
    )]
    #[serde(default)]
    pub input: Option<String>,

    #[serde(default)]
    pub constraints: Option<String>,
}

impl TryFrom<AssistValidator> for AssistRequest {
    type Error = CoreError;

    fn try_from(value: AssistValidator) -> Result<Self, Self::Error> {
        let (Some(mode), Some(input)) = (value.mode, value.input) else {
            return Err(CoreError::Invalid(MISSING_MODE_OR_INPUT.to_string()));
        };

        Ok(AssistRequest {
            mode: mode.parse::<AssistMode>()?,
            input,
            constraints: value.constraints,
        })
    }
}
