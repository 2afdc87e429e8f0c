//! Suggestion generator port definition.

use crate::domain::{AppError, CatalogName};

/// Request for new catalog values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SuggestionRequest {
    /// Catalog the suggestions are for.
    pub catalog: CatalogName,
    /// Number of short phrases to ask for.
    pub count: usize,
}

/// Port for the external suggestion generator.
pub trait SuggestionGenerator {
    /// Return the generator's raw reply, expected to be a JSON array of strings.
    ///
    /// The reply is not validated here.
    fn generate(&self, request: SuggestionRequest) -> Result<String, AppError>;
}
