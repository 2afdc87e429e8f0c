mod catalog_source;
mod key_value_store;
mod suggestion_generator;

pub use catalog_source::CatalogSource;
pub use key_value_store::KeyValueStore;
pub use suggestion_generator::{SuggestionGenerator, SuggestionRequest};
