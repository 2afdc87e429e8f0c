//! Single-line prompt generation.

use crate::app::AppContext;
use crate::domain::{AppError, CatalogSet, Composition, EMPTY_PROMPT_PLACEHOLDER, Status, compose};
use crate::ports::{CatalogSource, KeyValueStore, SuggestionGenerator};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateOutcome {
    /// Text to show: the prompt, or the placeholder when nothing is selected.
    pub prompt: String,
    pub status: Status,
}

/// Compose the single-line prompt and remember it.
///
/// With no usable selections the placeholder is returned and the last
/// recorded prompt is left as it was.
pub fn execute<K, C, G>(
    ctx: &mut AppContext<K, C, G>,
    catalogs: &CatalogSet,
) -> Result<GenerateOutcome, AppError>
where
    K: KeyValueStore + Clone,
    C: CatalogSource,
    G: SuggestionGenerator,
{
    let composition = compose(ctx.selections().selections(), catalogs)?;

    match composition {
        Composition::Empty => Ok(GenerateOutcome {
            prompt: EMPTY_PROMPT_PLACEHOLDER.to_string(),
            status: Status::NeedSelections,
        }),
        Composition::Composed { single, .. } => {
            ctx.prompt_mut().record(&single)?;
            Ok(GenerateOutcome { prompt: single, status: Status::Generated })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{AppConfig, CatalogName, builtin_catalogs};
    use crate::services::{MemoryKeyValueStore, PromptRecord};
    use crate::testing::{FakeCatalogSource, FakeSuggestionGenerator};

    fn context(
        store: MemoryKeyValueStore,
    ) -> AppContext<MemoryKeyValueStore, FakeCatalogSource, FakeSuggestionGenerator> {
        AppContext::new(
            AppConfig::default(),
            store,
            FakeCatalogSource::new(),
            FakeSuggestionGenerator::replying("[]"),
        )
    }

    #[test]
    fn generates_and_records_prompt() {
        let store = MemoryKeyValueStore::new();
        let mut ctx = context(store.clone());
        ctx.selections_mut().set(CatalogName::Camera, "Lighting", "Chiaroscuro").unwrap();
        ctx.selections_mut().set(CatalogName::Character, "Art Style", "Studio Ghibli").unwrap();

        let outcome = execute(&mut ctx, &builtin_catalogs()).unwrap();

        assert_eq!(outcome.prompt, "Studio Ghibli, Chiaroscuro");
        assert_eq!(outcome.status, Status::Generated);
        assert_eq!(PromptRecord::load(store).last(), "Studio Ghibli, Chiaroscuro");
    }

    #[test]
    fn empty_selection_keeps_previous_prompt() {
        let store = MemoryKeyValueStore::new();
        let mut ctx = context(store.clone());
        ctx.prompt_mut().record("Dawn").unwrap();

        let outcome = execute(&mut ctx, &builtin_catalogs()).unwrap();

        assert_eq!(outcome.prompt, EMPTY_PROMPT_PLACEHOLDER);
        assert_eq!(outcome.status, Status::NeedSelections);
        assert_eq!(ctx.prompt().last(), "Dawn");
        assert_eq!(PromptRecord::load(store).last(), "Dawn");
    }
}
