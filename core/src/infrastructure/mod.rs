pub mod ai_proxy;
pub mod llm;
pub mod storage;
