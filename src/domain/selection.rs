//! User selections per catalog and category.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::domain::CatalogName;

/// Chosen value per category, grouped by catalog.
///
/// Serialized as `{"character": {..}, "scene": {..}, "camera": {..}}`.
/// Empty strings are never stored; setting one clears the slot.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selections {
    #[serde(default)]
    character: BTreeMap<String, String>,
    #[serde(default)]
    scene: BTreeMap<String, String>,
    #[serde(default)]
    camera: BTreeMap<String, String>,
}

impl Selections {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn section(&self, name: CatalogName) -> &BTreeMap<String, String> {
        match name {
            CatalogName::Character => &self.character,
            CatalogName::Scene => &self.scene,
            CatalogName::Camera => &self.camera,
        }
    }

    fn section_mut(&mut self, name: CatalogName) -> &mut BTreeMap<String, String> {
        match name {
            CatalogName::Character => &mut self.character,
            CatalogName::Scene => &mut self.scene,
            CatalogName::Camera => &mut self.camera,
        }
    }

    /// Set a value; an empty value clears the slot.
    pub fn set(&mut self, catalog: CatalogName, category: &str, value: &str) {
        let section = self.section_mut(catalog);
        if value.is_empty() {
            section.remove(category);
        } else {
            section.insert(category.to_string(), value.to_string());
        }
    }

    pub fn get(&self, catalog: CatalogName, category: &str) -> Option<&str> {
        self.section(catalog).get(category).map(String::as_str).filter(|v| !v.is_empty())
    }

    /// Number of non-empty selections in one catalog.
    pub fn count_in(&self, catalog: CatalogName) -> usize {
        self.section(catalog).values().filter(|v| !v.is_empty()).count()
    }

    /// Number of non-empty selections across all catalogs.
    pub fn count(&self) -> usize {
        CatalogName::ALL.iter().map(|name| self.count_in(*name)).sum()
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}
