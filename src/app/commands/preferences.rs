use crate::app::AppContext;
use crate::domain::{AppError, Preferences, Theme};
use crate::ports::{CatalogSource, KeyValueStore, SuggestionGenerator};

/// Change the theme, returning the updated preferences.
pub fn set_theme<K, C, G>(
    ctx: &mut AppContext<K, C, G>,
    theme: Theme,
) -> Result<Preferences, AppError>
where
    K: KeyValueStore + Clone,
    C: CatalogSource,
    G: SuggestionGenerator,
{
    ctx.preferences_mut().set_theme(theme)?;
    Ok(ctx.preferences().preferences())
}

/// Turn sound feedback on or off, returning the updated preferences.
pub fn set_sound<K, C, G>(
    ctx: &mut AppContext<K, C, G>,
    enabled: bool,
) -> Result<Preferences, AppError>
where
    K: KeyValueStore + Clone,
    C: CatalogSource,
    G: SuggestionGenerator,
{
    ctx.preferences_mut().set_sound_enabled(enabled)?;
    Ok(ctx.preferences().preferences())
}
