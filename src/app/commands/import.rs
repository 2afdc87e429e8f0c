//! AI-assisted catalog expansion.

use crate::app::AppContext;
use crate::domain::{CatalogName, Category, MergeOutcome, Status};
use crate::ports::{CatalogSource, KeyValueStore, SuggestionGenerator};
use crate::services::{CatalogStore, SuggestionImporter};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportOutcome {
    pub catalog: CatalogName,
    pub merged: MergeOutcome,
    /// The category values were imported into, after the merge.
    pub category: Option<Category>,
    pub status: Status,
}

/// Import generator suggestions into the first category of `catalog`.
pub fn execute<K, C, G>(
    ctx: &AppContext<K, C, G>,
    store: &CatalogStore,
    catalog: CatalogName,
) -> ImportOutcome
where
    K: KeyValueStore + Clone,
    C: CatalogSource,
    G: SuggestionGenerator,
{
    let merged = SuggestionImporter::new(ctx.generator())
        .with_count(ctx.config().generator.suggestion_count)
        .import(store, catalog);

    let category = store.snapshot().get(catalog).categories().first().cloned();

    ImportOutcome {
        catalog,
        merged,
        category,
        status: Status::Imported { added: merged.added, skipped: merged.skipped },
    }
}
