use crate::app::AppContext;
use crate::domain::{CatalogName, Preferences, Status};
use crate::ports::{CatalogSource, KeyValueStore, SuggestionGenerator};

/// Snapshot of durable state for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusReport {
    pub status: Status,
    /// `(catalog, category, value)` in catalog order.
    pub selected: Vec<(CatalogName, String, String)>,
    pub preferences: Preferences,
    pub last_prompt: Option<String>,
}

impl StatusReport {
    pub fn selected_count(&self) -> usize {
        self.selected.len()
    }
}

pub fn execute<K, C, G>(ctx: &AppContext<K, C, G>) -> StatusReport
where
    K: KeyValueStore + Clone,
    C: CatalogSource,
    G: SuggestionGenerator,
{
    let selections = ctx.selections().selections();
    let selected = CatalogName::ALL
        .into_iter()
        .flat_map(|name| {
            selections
                .section(name)
                .iter()
                .filter(|(_, value)| !value.is_empty())
                .map(move |(category, value)| (name, category.clone(), value.clone()))
        })
        .collect();

    let last = ctx.prompt().last();
    StatusReport {
        status: Status::Ready,
        selected,
        preferences: ctx.preferences().preferences(),
        last_prompt: (!last.is_empty()).then(|| last.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{AppConfig, Theme};
    use crate::services::MemoryKeyValueStore;
    use crate::testing::{FakeCatalogSource, FakeSuggestionGenerator};

    #[test]
    fn report_lists_selections_in_catalog_order() {
        let mut ctx = AppContext::new(
            AppConfig::default(),
            MemoryKeyValueStore::new(),
            FakeCatalogSource::new(),
            FakeSuggestionGenerator::replying("[]"),
        );
        ctx.selections_mut().set(CatalogName::Camera, "Lens", "Macro Lens").unwrap();
        ctx.selections_mut().set(CatalogName::Character, "Eye Color", "Molten Gold").unwrap();
        ctx.preferences_mut().set_theme(Theme::Forest).unwrap();

        let report = execute(&ctx);

        assert_eq!(report.selected_count(), 2);
        assert_eq!(
            report.selected[0],
            (CatalogName::Character, "Eye Color".into(), "Molten Gold".into())
        );
        assert_eq!(report.selected[1].0, CatalogName::Camera);
        assert_eq!(report.preferences.theme, Theme::Forest);
        assert_eq!(report.last_prompt, None);
    }
}
