use tracing::info;

use crate::{
    domain::{
        assistant::services::AssistantService,
        common::{CutLoggerConfig, entities::app_errors::CoreError},
        tracker::services::Tracker,
    },
    infrastructure::{llm::OpenAiClient, storage::FileStateStore},
};

pub type CutLoggerAssistant = AssistantService<OpenAiClient>;
pub type CutLoggerTracker = Tracker<FileStateStore>;

pub fn create_assistant(config: &CutLoggerConfig) -> CutLoggerAssistant {
    let llm_client = OpenAiClient::new(
        config.llm.openai_api_key.clone(),
        config.llm.openai_model.clone(),
        config.llm.openai_base_url.clone(),
    );

    AssistantService::new(llm_client)
}

pub fn open_tracker(config: &CutLoggerConfig) -> Result<CutLoggerTracker, CoreError> {
    let store = FileStateStore::new(&config.storage.data_dir, &config.storage.state_key)?;
    info!(path = %store.path().display(), "opening state store");

    Ok(Tracker::load(store))
}
