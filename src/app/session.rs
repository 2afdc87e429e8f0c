//! One catalog session shared by every action.
//!
//! The catalog store lives as long as the session, so values added by an
//! import can be selected and composed before the session ends.

use crate::app::AppContext;
use crate::app::commands::catalog::{self, CategoryListing};
use crate::app::commands::clear;
use crate::app::commands::formats::{self, FormatsOutcome};
use crate::app::commands::generate::{self, GenerateOutcome};
use crate::app::commands::import::{self, ImportOutcome};
use crate::app::commands::select::{self, SelectOutcome};
use crate::app::commands::status::{self, StatusReport};
use crate::domain::{AppError, CatalogName, CatalogSet, Status};
use crate::ports::{CatalogSource, KeyValueStore, SuggestionGenerator};
use crate::services::CatalogStore;

pub struct Session<K, C, G>
where
    K: KeyValueStore + Clone,
    C: CatalogSource,
    G: SuggestionGenerator,
{
    ctx: AppContext<K, C, G>,
    catalogs: CatalogStore,
}

impl<K, C, G> Session<K, C, G>
where
    K: KeyValueStore + Clone,
    C: CatalogSource,
    G: SuggestionGenerator,
{
    /// Load the catalogs once and keep them for the rest of the session.
    pub fn open(ctx: AppContext<K, C, G>) -> Self {
        let catalogs = catalog::load(&ctx);
        Self { ctx, catalogs }
    }

    pub fn context(&self) -> &AppContext<K, C, G> {
        &self.ctx
    }

    pub fn catalogs(&self) -> CatalogSet {
        self.catalogs.snapshot()
    }

    pub fn list(&self, name: CatalogName) -> Vec<CategoryListing> {
        catalog::list(&self.ctx, &self.catalogs.snapshot(), name)
    }

    pub fn select(
        &mut self,
        name: CatalogName,
        category: &str,
        value: Option<&str>,
    ) -> Result<SelectOutcome, AppError> {
        let snapshot = self.catalogs.snapshot();
        select::execute(&mut self.ctx, &snapshot, name, category, value)
    }

    pub fn generate(&mut self) -> Result<GenerateOutcome, AppError> {
        let snapshot = self.catalogs.snapshot();
        generate::execute(&mut self.ctx, &snapshot)
    }

    pub fn formats(&self) -> Result<FormatsOutcome, AppError> {
        formats::execute(&self.ctx, &self.catalogs.snapshot())
    }

    /// Import suggestions into this session's catalog.
    pub fn import(&self, name: CatalogName) -> ImportOutcome {
        import::execute(&self.ctx, &self.catalogs, name)
    }

    pub fn status(&self) -> StatusReport {
        status::execute(&self.ctx)
    }

    pub fn clear(&mut self) -> Result<Status, AppError> {
        clear::execute(&mut self.ctx)
    }
}
