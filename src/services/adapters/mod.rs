mod file_key_value_store;
mod gemini_client_http;
mod memory_key_value_store;
mod sheet_source_http;

pub use file_key_value_store::FileKeyValueStore;
pub use gemini_client_http::HttpGeminiClient;
pub use memory_key_value_store::MemoryKeyValueStore;
pub use sheet_source_http::HttpSheetSource;
