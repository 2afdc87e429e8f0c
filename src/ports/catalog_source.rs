//! Remote catalog source port definition.

use crate::domain::{AppError, CatalogName};

/// Port for fetching the tabular text behind one catalog.
///
/// Implementations are called from several threads at once during a load.
pub trait CatalogSource: Sync {
    /// Fetch the raw delimited text for `name`.
    ///
    /// Transport errors and non-success responses are reported as
    /// `AppError::TransportFailure`; an empty body as `AppError::MalformedResponse`.
    fn fetch_table(&self, name: CatalogName) -> Result<String, AppError>;
}
