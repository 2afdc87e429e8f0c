use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::domain::{AppError, CatalogName};
use crate::ports::CatalogSource;

/// Catalog source answering from fixed tables.
#[derive(Clone, Default)]
pub struct FakeCatalogSource {
    tables: HashMap<CatalogName, Result<String, String>>,
    panic_on: Option<CatalogName>,
    pub fetch_log: Arc<Mutex<Vec<CatalogName>>>,
}

impl FakeCatalogSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_table(mut self, name: CatalogName, text: impl Into<String>) -> Self {
        self.tables.insert(name, Ok(text.into()));
        self
    }

    pub fn with_failure(mut self, name: CatalogName, details: impl Into<String>) -> Self {
        self.tables.insert(name, Err(details.into()));
        self
    }

    pub fn panicking_on(mut self, name: CatalogName) -> Self {
        self.panic_on = Some(name);
        self
    }

    pub fn fetched(&self) -> Vec<CatalogName> {
        let mut fetched = self.fetch_log.lock().unwrap().clone();
        fetched.sort();
        fetched
    }
}

impl CatalogSource for FakeCatalogSource {
    fn fetch_table(&self, name: CatalogName) -> Result<String, AppError> {
        self.fetch_log.lock().unwrap().push(name);
        if self.panic_on == Some(name) {
            panic!("fake source exploded for {}", name);
        }
        match self.tables.get(&name) {
            Some(Ok(text)) => Ok(text.clone()),
            Some(Err(details)) => Err(AppError::transport(name.as_str(), details)),
            None => Err(AppError::transport(name.as_str(), "404 Not Found")),
        }
    }
}
