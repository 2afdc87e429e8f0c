use crate::domain::AppConfig;
use crate::ports::{CatalogSource, KeyValueStore, SuggestionGenerator};
use crate::services::{PreferenceState, PromptRecord, SelectionState};

/// Application context holding configuration, collaborators and durable state.
pub struct AppContext<K, C, G>
where
    K: KeyValueStore + Clone,
    C: CatalogSource,
    G: SuggestionGenerator,
{
    config: AppConfig,
    source: C,
    generator: G,
    selections: SelectionState<K>,
    prompt: PromptRecord<K>,
    preferences: PreferenceState<K>,
}

impl<K, C, G> AppContext<K, C, G>
where
    K: KeyValueStore + Clone,
    C: CatalogSource,
    G: SuggestionGenerator,
{
    /// Create a new application context, restoring durable state from `store`.
    pub fn new(config: AppConfig, store: K, source: C, generator: G) -> Self {
        Self {
            config,
            source,
            generator,
            selections: SelectionState::load(store.clone()),
            prompt: PromptRecord::load(store.clone()),
            preferences: PreferenceState::load(store),
        }
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn source(&self) -> &C {
        &self.source
    }

    pub fn generator(&self) -> &G {
        &self.generator
    }

    pub fn selections(&self) -> &SelectionState<K> {
        &self.selections
    }

    pub fn selections_mut(&mut self) -> &mut SelectionState<K> {
        &mut self.selections
    }

    pub fn prompt(&self) -> &PromptRecord<K> {
        &self.prompt
    }

    pub fn prompt_mut(&mut self) -> &mut PromptRecord<K> {
        &mut self.prompt
    }

    pub fn preferences(&self) -> &PreferenceState<K> {
        &self.preferences
    }

    pub fn preferences_mut(&mut self) -> &mut PreferenceState<K> {
        &mut self.preferences
    }
}
