//! API Facade for the application.
//!
//! This module exposes high-level functions that glue together context creation
//! and command execution.

use std::env;
use std::path::PathBuf;

use crate::app::{AppContext, Session, commands::preferences};
use crate::domain::configuration::load_config;
use crate::services::{FileKeyValueStore, HttpGeminiClient, HttpSheetSource};

pub use crate::app::commands::catalog::CategoryListing;
pub use crate::app::commands::formats::{FormatsOutcome, PromptFormat};
pub use crate::app::commands::generate::GenerateOutcome;
pub use crate::app::commands::import::ImportOutcome;
pub use crate::app::commands::select::SelectOutcome;
pub use crate::app::commands::status::StatusReport;
pub use crate::domain::{AppError, CatalogName, Preferences, Status, Theme};

/// Environment variable overriding the home directory.
pub const HOME_ENV: &str = "ARTPROMPT_HOME";

type Context = AppContext<FileKeyValueStore, HttpSheetSource, HttpGeminiClient>;

/// Session over the production adapters.
pub type ArtSession = Session<FileKeyValueStore, HttpSheetSource, HttpGeminiClient>;

/// Directory holding `config.toml` and persisted state.
///
/// `$ARTPROMPT_HOME` when set, otherwise `$HOME/.artprompt`.
pub fn home_dir() -> Result<PathBuf, AppError> {
    if let Some(home) = env::var_os(HOME_ENV).filter(|v| !v.is_empty()) {
        return Ok(PathBuf::from(home));
    }
    env::var_os("HOME")
        .filter(|v| !v.is_empty())
        .map(|home| PathBuf::from(home).join(".artprompt"))
        .ok_or_else(|| {
            AppError::config_error(format!("Neither {} nor HOME is set", HOME_ENV))
        })
}

/// Create an `AppContext` rooted at the home directory.
fn create_context(offline: bool) -> Result<Context, AppError> {
    let home = home_dir()?;
    let mut config = load_config(&home)?;
    if offline {
        config.catalog.offline = true;
    }

    let store = FileKeyValueStore::new(home);
    let source = HttpSheetSource::new(&config.catalog)?;
    let generator = HttpGeminiClient::from_env(&config.generator)?;
    Ok(AppContext::new(config, store, source, generator))
}

/// Open a session whose catalog is shared by every following call.
///
/// Values imported through the session can be selected and composed until
/// it is dropped.
pub fn open_session(offline: bool) -> Result<ArtSession, AppError> {
    Ok(Session::open(create_context(offline)?))
}

/// List categories of the given catalogs, or all of them.
pub fn catalog(
    offline: bool,
    name: Option<CatalogName>,
) -> Result<Vec<(CatalogName, Vec<CategoryListing>)>, AppError> {
    let session = open_session(offline)?;
    let names = match name {
        Some(name) => vec![name],
        None => CatalogName::ALL.to_vec(),
    };
    Ok(names.into_iter().map(|name| (name, session.list(name))).collect())
}

/// Select a value, or clear the slot when `value` is `None`.
pub fn select(
    offline: bool,
    name: CatalogName,
    category: &str,
    value: Option<&str>,
) -> Result<SelectOutcome, AppError> {
    open_session(offline)?.select(name, category, value)
}

/// Report current selections, preferences and last prompt.
pub fn status() -> Result<StatusReport, AppError> {
    Ok(open_session(true)?.status())
}

/// Generate the single-line prompt.
pub fn generate(offline: bool) -> Result<GenerateOutcome, AppError> {
    open_session(offline)?.generate()
}

/// Compose the alternate formats.
pub fn formats(offline: bool) -> Result<FormatsOutcome, AppError> {
    open_session(offline)?.formats()
}

/// Import AI-suggested values into the first category of `name`.
///
/// The catalog only lives for this call; use [`open_session`] to select
/// imported values afterwards.
pub fn import(offline: bool, name: CatalogName) -> Result<ImportOutcome, AppError> {
    Ok(open_session(offline)?.import(name))
}

/// Clear every selection and the last prompt.
pub fn clear() -> Result<Status, AppError> {
    open_session(true)?.clear()
}

/// Show preferences, or change the theme when one is given.
pub fn theme(theme: Option<Theme>) -> Result<Preferences, AppError> {
    let mut ctx = create_context(true)?;
    match theme {
        Some(theme) => preferences::set_theme(&mut ctx, theme),
        None => Ok(ctx.preferences().preferences()),
    }
}

/// Turn sound feedback on or off.
pub fn sound(enabled: bool) -> Result<Preferences, AppError> {
    let mut ctx = create_context(true)?;
    preferences::set_sound(&mut ctx, enabled)
}
