//! Alternate prompt formats.

use crate::app::AppContext;
use crate::domain::{AppError, CatalogSet, MultiFormatPrompt, Status, compose};
use crate::ports::{CatalogSource, KeyValueStore, SuggestionGenerator};

/// Formats, or the status explaining why there are none.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormatsOutcome {
    Formats(MultiFormatPrompt),
    Unavailable(Status),
}

/// Which alternate format to show.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptFormat {
    Narrative,
    Technical,
    Poetic,
    BulletPoint,
}

impl PromptFormat {
    pub const ALL: [PromptFormat; 4] = [
        PromptFormat::Narrative,
        PromptFormat::Technical,
        PromptFormat::Poetic,
        PromptFormat::BulletPoint,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            PromptFormat::Narrative => "Narrative",
            PromptFormat::Technical => "Technical",
            PromptFormat::Poetic => "Poetic",
            PromptFormat::BulletPoint => "Bullet Point",
        }
    }

    pub fn pick<'a>(&self, formats: &'a MultiFormatPrompt) -> &'a str {
        match self {
            PromptFormat::Narrative => &formats.narrative,
            PromptFormat::Technical => &formats.technical,
            PromptFormat::Poetic => &formats.poetic,
            PromptFormat::BulletPoint => &formats.bullet_point,
        }
    }
}

/// Compose the four alternate formats from the current selections.
///
/// Durable state is not touched.
pub fn execute<K, C, G>(
    ctx: &AppContext<K, C, G>,
    catalogs: &CatalogSet,
) -> Result<FormatsOutcome, AppError>
where
    K: KeyValueStore + Clone,
    C: CatalogSource,
    G: SuggestionGenerator,
{
    let composition = compose(ctx.selections().selections(), catalogs)?;
    Ok(match composition.formats() {
        Some(formats) => FormatsOutcome::Formats(formats.clone()),
        None => FormatsOutcome::Unavailable(Status::NeedSelections),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{AppConfig, CatalogName, builtin_catalogs};
    use crate::services::MemoryKeyValueStore;
    use crate::testing::{FakeCatalogSource, FakeSuggestionGenerator};

    fn context() -> AppContext<MemoryKeyValueStore, FakeCatalogSource, FakeSuggestionGenerator> {
        AppContext::new(
            AppConfig::default(),
            MemoryKeyValueStore::new(),
            FakeCatalogSource::new(),
            FakeSuggestionGenerator::replying("[]"),
        )
    }

    #[test]
    fn no_selections_reports_status() {
        let outcome = execute(&context(), &builtin_catalogs()).unwrap();
        assert_eq!(outcome, FormatsOutcome::Unavailable(Status::NeedSelections));
    }

    #[test]
    fn formats_are_available_after_selecting() {
        let mut ctx = context();
        ctx.selections_mut().set(CatalogName::Scene, "Weather", "Meteor Shower").unwrap();

        let FormatsOutcome::Formats(formats) = execute(&ctx, &builtin_catalogs()).unwrap() else {
            panic!("expected formats");
        };

        assert_eq!(PromptFormat::Technical.pick(&formats), formats.technical);
        assert!(formats.bullet_point.contains("  1. Meteor Shower"));
        assert!(formats.technical.contains("  • Weather: Meteor Shower"));
    }
}
