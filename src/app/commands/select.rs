//! Setting and clearing one selection.

use crate::app::AppContext;
use crate::domain::{AppError, CatalogName, CatalogSet};
use crate::ports::{CatalogSource, KeyValueStore, SuggestionGenerator};

/// What a select command changed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectOutcome {
    pub catalog: CatalogName,
    pub category: String,
    /// Stored value, or `None` when the slot was cleared.
    pub value: Option<String>,
    pub total_selected: usize,
}

/// Select `value` in `category`, or clear the slot when `value` is `None` or empty.
///
/// Category and value are matched case-insensitively against the catalog and
/// stored with the catalog's spelling.
pub fn execute<K, C, G>(
    ctx: &mut AppContext<K, C, G>,
    catalogs: &CatalogSet,
    catalog: CatalogName,
    category: &str,
    value: Option<&str>,
) -> Result<SelectOutcome, AppError>
where
    K: KeyValueStore + Clone,
    C: CatalogSource,
    G: SuggestionGenerator,
{
    let entries = catalogs.get(catalog);
    let wanted = category.trim().to_lowercase();
    let Some(found) = entries.categories().iter().find(|c| c.name.to_lowercase() == wanted) else {
        return Err(AppError::UnknownCategory {
            catalog: catalog.to_string(),
            category: category.to_string(),
            available: entries
                .categories()
                .iter()
                .map(|c| c.name.as_str())
                .collect::<Vec<_>>()
                .join(", "),
        });
    };

    let value = match value.map(str::trim).filter(|v| !v.is_empty()) {
        None => None,
        Some(value) => match found.find_ignore_case(value) {
            Some(stored) => Some(stored.to_string()),
            None => {
                return Err(AppError::UnknownValue {
                    category: found.name.clone(),
                    value: value.to_string(),
                    available: found.values().join(", "),
                });
            }
        },
    };

    ctx.selections_mut().set(catalog, &found.name, value.as_deref().unwrap_or(""))?;

    Ok(SelectOutcome {
        catalog,
        category: found.name.clone(),
        value,
        total_selected: ctx.selections().count(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{AppConfig, builtin_catalogs};
    use crate::services::MemoryKeyValueStore;
    use crate::testing::{FakeCatalogSource, FakeSuggestionGenerator};

    type TestContext = AppContext<MemoryKeyValueStore, FakeCatalogSource, FakeSuggestionGenerator>;

    fn context() -> TestContext {
        AppContext::new(
            AppConfig::default(),
            MemoryKeyValueStore::new(),
            FakeCatalogSource::new(),
            FakeSuggestionGenerator::replying("[]"),
        )
    }

    #[test]
    fn select_uses_catalog_spelling() {
        let mut ctx = context();
        let catalogs = builtin_catalogs();
        let outcome =
            execute(&mut ctx, &catalogs, CatalogName::Scene, "time of day", Some("blue hour"))
                .unwrap();

        assert_eq!(outcome.category, "Time of Day");
        assert_eq!(outcome.value.as_deref(), Some("Blue Hour"));
        assert_eq!(ctx.selections().get(CatalogName::Scene, "Time of Day"), Some("Blue Hour"));
        assert_eq!(outcome.total_selected, 1);
    }

    #[test]
    fn missing_value_clears_slot() {
        let mut ctx = context();
        let catalogs = builtin_catalogs();
        execute(&mut ctx, &catalogs, CatalogName::Camera, "Lens", Some("Macro Lens")).unwrap();

        let outcome = execute(&mut ctx, &catalogs, CatalogName::Camera, "Lens", None).unwrap();

        assert_eq!(outcome.value, None);
        assert_eq!(ctx.selections().count(), 0);
    }

    #[test]
    fn unknown_category_is_rejected() {
        let mut ctx = context();
        let catalogs = builtin_catalogs();
        let result = execute(&mut ctx, &catalogs, CatalogName::Camera, "Aperture", Some("f/2"));
        assert!(matches!(result, Err(AppError::UnknownCategory { .. })));
    }

    #[test]
    fn unknown_value_is_rejected_and_state_unchanged() {
        let mut ctx = context();
        let catalogs = builtin_catalogs();
        let result =
            execute(&mut ctx, &catalogs, CatalogName::Character, "Eye Color", Some("Plaid"));
        assert!(matches!(result, Err(AppError::UnknownValue { .. })));
        assert_eq!(ctx.selections().count(), 0);
    }
}
