use crate::app::AppContext;
use crate::domain::{AppError, Status};
use crate::ports::{CatalogSource, KeyValueStore, SuggestionGenerator};

/// Clear every selection and the last generated prompt.
pub fn execute<K, C, G>(ctx: &mut AppContext<K, C, G>) -> Result<Status, AppError>
where
    K: KeyValueStore + Clone,
    C: CatalogSource,
    G: SuggestionGenerator,
{
    ctx.selections_mut().clear_all()?;
    ctx.prompt_mut().clear()?;
    Ok(Status::Cleared)
}
