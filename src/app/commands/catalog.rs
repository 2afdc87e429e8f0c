//! Catalog loading and listing.

use tracing::warn;

use crate::app::AppContext;
use crate::domain::{CatalogName, CatalogSet, SourceRef, builtin_catalogs, category_help};
use crate::ports::{CatalogSource, KeyValueStore, SuggestionGenerator};
use crate::services::{CatalogLoader, CatalogStore};

/// One category as shown to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryListing {
    pub name: String,
    pub values: Vec<String>,
    pub help: Option<&'static str>,
    pub source: SourceRef,
    /// Current selection in this category, if any.
    pub selected: Option<String>,
}

/// Build the session catalog store.
///
/// Offline mode uses the built-in catalog. Otherwise the remote source is
/// loaded; if that fails as a whole, or every catalog comes back empty, the
/// built-in catalog is used instead.
pub fn load<K, C, G>(ctx: &AppContext<K, C, G>) -> CatalogStore
where
    K: KeyValueStore + Clone,
    C: CatalogSource,
    G: SuggestionGenerator,
{
    if ctx.config().catalog.offline {
        return CatalogStore::new(builtin_catalogs());
    }

    let catalogs = CatalogLoader::new(ctx.source()).load_or_builtin();
    if CatalogName::ALL.iter().all(|name| catalogs.get(*name).is_empty()) {
        warn!("remote catalog source returned no categories; using built-in catalog");
        return CatalogStore::new(builtin_catalogs());
    }
    CatalogStore::new(catalogs)
}

/// List the categories of one catalog with help text and current selections.
pub fn list<K, C, G>(
    ctx: &AppContext<K, C, G>,
    catalogs: &CatalogSet,
    name: CatalogName,
) -> Vec<CategoryListing>
where
    K: KeyValueStore + Clone,
    C: CatalogSource,
    G: SuggestionGenerator,
{
    catalogs
        .get(name)
        .categories()
        .iter()
        .map(|category| CategoryListing {
            name: category.name.clone(),
            values: category.values().to_vec(),
            help: category_help(name, &category.name),
            source: category.source.clone(),
            selected: ctx.selections().get(name, &category.name).map(str::to_string),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::AppConfig;
    use crate::services::MemoryKeyValueStore;
    use crate::testing::{FakeCatalogSource, FakeSuggestionGenerator};

    fn context(
        source: FakeCatalogSource,
        offline: bool,
    ) -> AppContext<MemoryKeyValueStore, FakeCatalogSource, FakeSuggestionGenerator> {
        let mut config = AppConfig::default();
        config.catalog.offline = offline;
        let generator = FakeSuggestionGenerator::replying("[]");
        AppContext::new(config, MemoryKeyValueStore::new(), source, generator)
    }

    #[test]
    fn offline_uses_builtin_without_fetching() {
        let ctx = context(FakeCatalogSource::new(), true);
        let store = load(&ctx);
        assert_eq!(store.snapshot(), builtin_catalogs());
        assert!(ctx.source().fetched().is_empty());
    }

    #[test]
    fn remote_catalogs_replace_builtin() {
        let source = FakeCatalogSource::new().with_table(CatalogName::Scene, "Biome\nTundra");
        let ctx = context(source, false);

        let snapshot = load(&ctx).snapshot();

        assert_eq!(snapshot.scene.categories()[0].name, "Biome");
        assert!(snapshot.character.is_empty());
    }

    #[test]
    fn all_empty_remote_falls_back_to_builtin() {
        let ctx = context(FakeCatalogSource::new(), false);
        assert_eq!(load(&ctx).snapshot(), builtin_catalogs());
    }

    #[test]
    fn list_includes_help_and_selection() {
        let mut ctx = context(FakeCatalogSource::new(), true);
        ctx.selections_mut().set(CatalogName::Camera, "Lens", "Macro Lens").unwrap();

        let listing = list(&ctx, &builtin_catalogs(), CatalogName::Camera);

        let lens = listing.iter().find(|c| c.name == "Lens").unwrap();
        assert_eq!(lens.help, Some("The type of camera lens used."));
        assert_eq!(lens.selected.as_deref(), Some("Macro Lens"));
        assert_eq!(listing.len(), 3);
    }
}
