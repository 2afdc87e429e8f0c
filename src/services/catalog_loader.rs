//! Loads the three catalogs from a remote source.

use std::thread;

use tracing::{debug, warn};

use crate::domain::csv::{parse_rows, transform_to_categories};
use crate::domain::{AppError, Catalog, CatalogName, CatalogSet, builtin_catalogs};
use crate::ports::CatalogSource;

/// Fetches and transforms catalogs. Holds no state of its own.
pub struct CatalogLoader<'a, S: CatalogSource> {
    source: &'a S,
}

impl<'a, S: CatalogSource> CatalogLoader<'a, S> {
    pub fn new(source: &'a S) -> Self {
        Self { source }
    }

    /// Fetch all three catalogs concurrently.
    ///
    /// A failing catalog resolves to an empty category list and the others
    /// still load. Only a failure of the orchestration itself is an error.
    pub fn load(&self) -> Result<CatalogSet, AppError> {
        thread::scope(|scope| {
            let handles: Vec<_> = CatalogName::ALL
                .iter()
                .map(|&name| (name, scope.spawn(move || self.load_one(name))))
                .collect();

            let joined: Vec<_> =
                handles.into_iter().map(|(name, handle)| (name, handle.join())).collect();

            let mut catalogs = CatalogSet::default();
            for (name, result) in joined {
                let catalog = result.map_err(|_| {
                    AppError::CatalogLoadFailure(format!("loader for {} panicked", name))
                })?;
                catalogs.set(name, catalog);
            }
            Ok(catalogs)
        })
    }

    /// Load, or fall back to the built-in catalog when loading fails as a whole.
    pub fn load_or_builtin(&self) -> CatalogSet {
        match self.load() {
            Ok(catalogs) => catalogs,
            Err(err) => {
                warn!(error = %err, "using built-in catalog");
                builtin_catalogs()
            }
        }
    }

    fn load_one(&self, name: CatalogName) -> Catalog {
        let text = match self.source.fetch_table(name) {
            Ok(text) if text.trim().is_empty() => {
                warn!(catalog = %name, "catalog source returned an empty table");
                return Catalog::new();
            }
            Ok(text) => text,
            Err(err) => {
                warn!(catalog = %name, error = %err, "could not load catalog");
                return Catalog::new();
            }
        };

        let catalog = transform_to_categories(&parse_rows(&text), name);
        debug!(catalog = %name, categories = catalog.categories().len(), "loaded catalog");
        catalog
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::FakeCatalogSource;

    #[test]
    fn loads_each_catalog_from_its_table() {
        let source = FakeCatalogSource::new()
            .with_table(CatalogName::Character, "Mood,Pose\ncalm,seated\n\"wry, tired\",")
            .with_table(CatalogName::Scene, "Setting\nDesert")
            .with_table(CatalogName::Camera, "Lens\n35mm");

        let catalogs = CatalogLoader::new(&source).load().unwrap();

        assert_eq!(catalogs.character.category("Mood").unwrap().values(), ["calm", "wry, tired"]);
        assert_eq!(catalogs.character.category("Pose").unwrap().values(), ["seated"]);
        assert_eq!(catalogs.scene.categories()[0].name, "Setting");
        assert_eq!(catalogs.camera.categories()[0].values(), ["35mm"]);
        assert_eq!(source.fetched(), CatalogName::ALL.to_vec());
    }

    #[test]
    fn failing_catalog_is_isolated() {
        let source = FakeCatalogSource::new()
            .with_table(CatalogName::Character, "Mood\ncalm")
            .with_failure(CatalogName::Scene, "connection reset")
            .with_table(CatalogName::Camera, "   \n");

        let catalogs = CatalogLoader::new(&source).load().unwrap();

        assert_eq!(catalogs.character.categories().len(), 1);
        assert!(catalogs.scene.is_empty());
        assert!(catalogs.camera.is_empty());
    }

    #[test]
    fn orchestration_failure_is_an_error() {
        let source = FakeCatalogSource::new()
            .with_table(CatalogName::Character, "Mood\ncalm")
            .panicking_on(CatalogName::Scene);

        let result = CatalogLoader::new(&source).load();
        assert!(matches!(result, Err(AppError::CatalogLoadFailure(_))));
    }

    #[test]
    fn load_or_builtin_falls_back_on_orchestration_failure() {
        let source = FakeCatalogSource::new().panicking_on(CatalogName::Camera);
        let catalogs = CatalogLoader::new(&source).load_or_builtin();
        assert_eq!(catalogs, builtin_catalogs());
    }
}
