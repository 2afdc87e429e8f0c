pub mod adapters;
mod catalog_loader;
mod catalog_store;
mod persisted;
mod preference_state;
mod prompt_record;
mod selection_state;
mod suggestion_importer;

pub use adapters::{FileKeyValueStore, HttpGeminiClient, HttpSheetSource, MemoryKeyValueStore};
pub use catalog_loader::CatalogLoader;
pub use catalog_store::CatalogStore;
pub use preference_state::{PreferenceState, SOUND_KEY, THEME_KEY};
pub use prompt_record::{LAST_PROMPT_KEY, PromptRecord};
pub use selection_state::{SELECTIONS_KEY, SelectionState};
pub use suggestion_importer::{DEFAULT_SUGGESTION_COUNT, SuggestionImporter};
