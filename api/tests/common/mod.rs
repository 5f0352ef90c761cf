use std::sync::Arc;

use axum_test::TestServer;
use cutlogger_api::{
    application::http::server::http_server::{router, state},
    args::{Args, LlmArgs, LogArgs, ServerArgs, StorageArgs},
};
use tempfile::TempDir;

/// Upstream address for tests that never reach the model.
pub const UNUSED_UPSTREAM: &str = "http://127.0.0.1:9";

pub fn test_args(openai_base_url: String, data_dir: &TempDir) -> Args {
    Args {
        server: ServerArgs {
            host: "127.0.0.1".to_string(),
            port: 0,
            root_path: String::new(),
            allowed_origins: vec!["http://localhost:8081".to_string()],
        },
        llm: LlmArgs {
            openai_api_key: "sk-test".to_string(),
            openai_model: "gpt-5-mini".to_string(),
            openai_base_url,
        },
        storage: StorageArgs {
            data_dir: data_dir.path().display().to_string(),
            state_key: "CUT_LOGGER_V1".to_string(),
        },
        log: LogArgs {
            filter: "info".to_string(),
            json: false,
        },
    }
}

pub fn server_with(args: Args) -> TestServer {
    let app_state = state(Arc::new(args)).unwrap();
    TestServer::new(router(app_state).unwrap()).unwrap()
}

pub fn app(openai_base_url: String, data_dir: &TempDir) -> TestServer {
    server_with(test_args(openai_base_url, data_dir))
}
