//! Catalog domain models.
//!
//! A catalog set holds the three named catalogs. Each catalog is an ordered
//! list of categories, and each category an ordered list of values that are
//! unique under case-insensitive comparison.

use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

use crate::domain::AppError;

/// One of the three fixed catalogs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum CatalogName {
    Character,
    Scene,
    Camera,
}

impl CatalogName {
    /// All catalogs in flattening order.
    pub const ALL: [CatalogName; 3] =
        [CatalogName::Character, CatalogName::Scene, CatalogName::Camera];

    /// Name used by the remote source and in labels (`CHARACTER`).
    pub fn as_str(&self) -> &'static str {
        match self {
            CatalogName::Character => "CHARACTER",
            CatalogName::Scene => "SCENE",
            CatalogName::Camera => "CAMERA",
        }
    }

    /// Key used in persisted selections (`character`).
    pub fn key(&self) -> &'static str {
        match self {
            CatalogName::Character => "character",
            CatalogName::Scene => "scene",
            CatalogName::Camera => "camera",
        }
    }
}

impl fmt::Display for CatalogName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CatalogName {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "character" => Ok(CatalogName::Character),
            "scene" => Ok(CatalogName::Scene),
            "camera" => Ok(CatalogName::Camera),
            _ => Err(AppError::UnknownCatalog(s.to_string())),
        }
    }
}

/// Where a category's values came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceRef {
    /// Origin identifier (sheet tab name).
    pub sheet: String,
    /// 1-based column index.
    pub col: usize,
    /// 1-based row of the first value.
    pub row_start: usize,
}

/// A named, ordered, deduplicated list of selectable values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    pub name: String,
    values: Vec<String>,
    pub source: SourceRef,
}

/// Counts produced by a merge.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MergeOutcome {
    pub added: usize,
    pub skipped: usize,
}

impl Category {
    /// Build a category, collapsing case-insensitive duplicates (first wins).
    pub fn new<I, S>(name: impl Into<String>, values: I, source: SourceRef) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut category = Self { name: name.into(), values: Vec::new(), source };
        category.merge(values);
        category
    }

    pub fn values(&self) -> &[String] {
        &self.values
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Exact (case-sensitive) membership.
    pub fn contains(&self, value: &str) -> bool {
        self.values.iter().any(|v| v == value)
    }

    /// Case-insensitive lookup returning the stored spelling.
    pub fn find_ignore_case(&self, value: &str) -> Option<&str> {
        let needle = value.to_lowercase();
        self.values.iter().find(|v| v.to_lowercase() == needle).map(String::as_str)
    }

    /// Append candidates that are not already present (case-insensitive).
    ///
    /// Existing values keep their order; new values are appended in candidate
    /// order. Merging the same candidates again adds nothing.
    pub fn merge<I, S>(&mut self, candidates: I) -> MergeOutcome
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut seen: HashSet<String> = self.values.iter().map(|v| v.to_lowercase()).collect();
        let mut outcome = MergeOutcome::default();

        for candidate in candidates {
            let candidate = candidate.into();
            if seen.insert(candidate.to_lowercase()) {
                self.values.push(candidate);
                outcome.added += 1;
            } else {
                outcome.skipped += 1;
            }
        }

        outcome
    }
}

/// Ordered categories of one catalog. Category names are unique.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    categories: Vec<Category>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    pub fn category(&self, name: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.name == name)
    }

    pub fn first_mut(&mut self) -> Option<&mut Category> {
        self.categories.first_mut()
    }

    /// Add a category; a category with an existing name merges into it.
    /// Empty categories are dropped.
    pub fn push(&mut self, category: Category) {
        if category.is_empty() {
            return;
        }
        match self.categories.iter_mut().find(|c| c.name == category.name) {
            Some(existing) => {
                existing.merge(category.values);
            }
            None => self.categories.push(category),
        }
    }
}

impl FromIterator<Category> for Catalog {
    fn from_iter<T: IntoIterator<Item = Category>>(iter: T) -> Self {
        let mut catalog = Catalog::new();
        for category in iter {
            catalog.push(category);
        }
        catalog
    }
}

/// The three catalogs together.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CatalogSet {
    pub character: Catalog,
    pub scene: Catalog,
    pub camera: Catalog,
}

impl CatalogSet {
    pub fn get(&self, name: CatalogName) -> &Catalog {
        match name {
            CatalogName::Character => &self.character,
            CatalogName::Scene => &self.scene,
            CatalogName::Camera => &self.camera,
        }
    }

    pub fn get_mut(&mut self, name: CatalogName) -> &mut Catalog {
        match name {
            CatalogName::Character => &mut self.character,
            CatalogName::Scene => &mut self.scene,
            CatalogName::Camera => &mut self.camera,
        }
    }

    pub fn set(&mut self, name: CatalogName, catalog: Catalog) {
        *self.get_mut(name) = catalog;
    }

    /// Append candidates to the first category of `name`.
    ///
    /// A catalog without categories is left untouched and reports zero counts.
    pub fn merge_into_first<I, S>(&mut self, name: CatalogName, candidates: I) -> MergeOutcome
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        match self.get_mut(name).first_mut() {
            Some(category) => category.merge(candidates),
            None => MergeOutcome::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn src() -> SourceRef {
        SourceRef { sheet: "CHARACTER".into(), col: 1, row_start: 2 }
    }

    #[test]
    fn catalog_name_parses_case_insensitively() {
        assert_eq!("Scene".parse::<CatalogName>().unwrap(), CatalogName::Scene);
        assert_eq!(" CAMERA ".parse::<CatalogName>().unwrap(), CatalogName::Camera);
        assert!(matches!("lighting".parse::<CatalogName>(), Err(AppError::UnknownCatalog(_))));
    }

    #[test]
    fn category_new_collapses_case_insensitive_duplicates() {
        let category = Category::new("Mood", ["Calm", "calm", "Eerie"], src());
        assert_eq!(category.values(), ["Calm", "Eerie"]);
    }

    #[test]
    fn merge_appends_unique_and_counts_duplicates() {
        let mut category = Category::new("Style", ["Foo"], src());

        let first = category.merge(["Foo", "bar"]);
        assert_eq!(first, MergeOutcome { added: 1, skipped: 1 });
        assert_eq!(category.values(), ["Foo", "bar"]);

        let second = category.merge(["Foo", "bar"]);
        assert_eq!(second, MergeOutcome { added: 0, skipped: 2 });
        assert_eq!(category.values(), ["Foo", "bar"]);
    }

    #[test]
    fn merge_treats_duplicates_within_candidates_as_skipped() {
        let mut category = Category::new("Style", ["A"], src());
        let outcome = category.merge(["New", "NEW", "new"]);
        assert_eq!(outcome, MergeOutcome { added: 1, skipped: 2 });
        assert_eq!(category.values(), ["A", "New"]);
    }

    #[test]
    fn merge_preserves_existing_order() {
        let mut category = Category::new("Style", ["z", "a", "m"], src());
        category.merge(["b"]);
        assert_eq!(category.values(), ["z", "a", "m", "b"]);
    }

    #[test]
    fn catalog_drops_empty_and_merges_repeated_names() {
        let empty: [&str; 0] = [];
        let catalog: Catalog = [
            Category::new("A", ["x"], src()),
            Category::new("B", empty, src()),
            Category::new("A", ["X", "y"], src()),
        ]
        .into_iter()
        .collect();

        assert_eq!(catalog.categories().len(), 1);
        assert_eq!(catalog.category("A").unwrap().values(), ["x", "y"]);
        assert!(catalog.category("B").is_none());
    }

    #[test]
    fn merge_into_first_on_empty_catalog_is_noop() {
        let mut set = CatalogSet::default();
        let outcome = set.merge_into_first(CatalogName::Scene, ["Fog"]);
        assert_eq!(outcome, MergeOutcome::default());
        assert!(set.scene.is_empty());
    }

    #[test]
    fn find_ignore_case_returns_stored_spelling() {
        let category = Category::new("Lens", ["Macro Lens"], src());
        assert_eq!(category.find_ignore_case("macro lens"), Some("Macro Lens"));
        assert!(category.contains("Macro Lens"));
        assert!(!category.contains("macro lens"));
    }
}
