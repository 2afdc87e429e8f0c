pub mod builtin;
pub mod catalog;
pub mod configuration;
pub mod csv;
pub mod error;
pub mod preferences;
pub mod prompt;
pub mod selection;
pub mod status;
pub mod suggestions;

pub use builtin::{FALLBACK_SUGGESTIONS, builtin_catalogs, category_help};
pub use catalog::{Catalog, CatalogName, CatalogSet, Category, MergeOutcome, SourceRef};
pub use configuration::{AppConfig, CatalogSourceConfig, GeneratorConfig};
pub use error::AppError;
pub use preferences::{Preferences, Theme};
pub use prompt::{
    ComposeError, Composition, EMPTY_PROMPT_PLACEHOLDER, MultiFormatPrompt, compose,
    compose_with_order,
};
pub use selection::Selections;
pub use status::Status;
pub use suggestions::{SuggestionValidation, validate_suggestions};
