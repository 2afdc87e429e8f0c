//! Imports generator suggestions into a catalog.
//!
//! The importer never fails: when the generator is unreachable or answers in
//! the wrong shape, the built-in fallback suggestions are imported instead and
//! the reason is logged.

use tracing::{debug, info, warn};

use crate::domain::{
    CatalogName, FALLBACK_SUGGESTIONS, MergeOutcome, SuggestionValidation, validate_suggestions,
};
use crate::ports::{SuggestionGenerator, SuggestionRequest};
use crate::services::CatalogStore;

/// Default number of suggestions requested per import.
pub const DEFAULT_SUGGESTION_COUNT: usize = 5;

pub struct SuggestionImporter<'a, G: SuggestionGenerator> {
    generator: &'a G,
    count: usize,
}

impl<'a, G: SuggestionGenerator> SuggestionImporter<'a, G> {
    pub fn new(generator: &'a G) -> Self {
        Self { generator, count: DEFAULT_SUGGESTION_COUNT }
    }

    pub fn with_count(mut self, count: usize) -> Self {
        self.count = count.max(1);
        self
    }

    /// Ask for new values and append the unique ones to the first category
    /// of `catalog`.
    ///
    /// A catalog without categories is left alone and reports zero counts.
    pub fn import(&self, store: &CatalogStore, catalog: CatalogName) -> MergeOutcome {
        if !store.has_categories(catalog) {
            debug!(catalog = %catalog, "no category to import into");
            return MergeOutcome::default();
        }

        let candidates = self.candidates(catalog);
        let outcome = store.merge_into_first(catalog, candidates);
        info!(
            catalog = %catalog,
            added = outcome.added,
            skipped = outcome.skipped,
            "imported suggestions"
        );
        outcome
    }

    fn candidates(&self, catalog: CatalogName) -> Vec<String> {
        let request = SuggestionRequest { catalog, count: self.count };
        let raw = match self.generator.generate(request) {
            Ok(raw) => raw,
            Err(err) => {
                warn!(
                    catalog = %catalog,
                    error = %err,
                    "suggestion generator failed, using fallback list"
                );
                return fallback();
            }
        };

        match validate_suggestions(&raw) {
            SuggestionValidation::Valid(suggestions) => suggestions,
            SuggestionValidation::Invalid(reason) => {
                warn!(catalog = %catalog, %reason, "invalid generator reply, using fallback list");
                fallback()
            }
        }
    }
}

fn fallback() -> Vec<String> {
    FALLBACK_SUGGESTIONS.iter().map(|s| s.to_string()).collect()
}
