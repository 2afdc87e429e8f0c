//! Durable user selections.

use crate::domain::{AppError, CatalogName, Selections};
use crate::ports::KeyValueStore;
use crate::services::persisted;

/// Storage key for the selections.
pub const SELECTIONS_KEY: &str = "ai-art-prompt-selections";

/// The user's chosen value per (catalog, category), written through to
/// storage on every mutation.
///
/// Mutating methods take `&mut self`, so writes are serialized by ownership.
#[derive(Debug)]
pub struct SelectionState<S: KeyValueStore> {
    store: S,
    selections: Selections,
}

impl<S: KeyValueStore> SelectionState<S> {
    /// Restore from storage. Missing or corrupt state yields empty selections.
    pub fn load(store: S) -> Self {
        let selections = persisted::load_or_default(&store, SELECTIONS_KEY);
        Self { store, selections }
    }

    /// Set a value; an empty value clears the slot.
    ///
    /// The in-memory state is updated even if persisting fails.
    pub fn set(
        &mut self,
        catalog: CatalogName,
        category: &str,
        value: &str,
    ) -> Result<(), AppError> {
        self.selections.set(catalog, category, value);
        self.persist()
    }

    pub fn get(&self, catalog: CatalogName, category: &str) -> Option<&str> {
        self.selections.get(catalog, category)
    }

    pub fn clear_all(&mut self) -> Result<(), AppError> {
        self.selections.clear();
        self.persist()
    }

    /// Number of non-empty selections across all catalogs.
    pub fn count(&self) -> usize {
        self.selections.count()
    }

    pub fn selections(&self) -> &Selections {
        &self.selections
    }

    fn persist(&self) -> Result<(), AppError> {
        persisted::save(&self.store, SELECTIONS_KEY, &self.selections)
    }
}
