mod fake_catalog_source;
mod fake_suggestion_generator;

pub use fake_catalog_source::FakeCatalogSource;
pub use fake_suggestion_generator::FakeSuggestionGenerator;
