//! Session-scoped owner of the catalog set.

use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::domain::{CatalogName, CatalogSet, MergeOutcome};

/// Holds the catalogs for the lifetime of a session.
///
/// All mutation goes through [`CatalogStore::merge_into_first`], which
/// computes the merge against the current contents while holding the lock,
/// so concurrent imports into the same category never lose values.
#[derive(Debug, Default)]
pub struct CatalogStore {
    catalogs: Mutex<CatalogSet>,
}

impl CatalogStore {
    pub fn new(catalogs: CatalogSet) -> Self {
        Self { catalogs: Mutex::new(catalogs) }
    }

    /// Copy of the current catalogs.
    pub fn snapshot(&self) -> CatalogSet {
        self.lock().clone()
    }

    /// Whether `name` has at least one category to import into.
    pub fn has_categories(&self, name: CatalogName) -> bool {
        !self.lock().get(name).is_empty()
    }

    /// Append unique candidates to the first category of `name`.
    pub fn merge_into_first<I, S>(&self, name: CatalogName, candidates: I) -> MergeOutcome
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.lock().merge_into_first(name, candidates)
    }

    fn lock(&self) -> MutexGuard<'_, CatalogSet> {
        self.catalogs.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
