//! Spreadsheet CSV export client using reqwest.

use std::time::Duration;

use reqwest::blocking::Client;
use url::Url;

use crate::domain::{AppError, CatalogName, CatalogSourceConfig};
use crate::ports::CatalogSource;

/// Fetches one spreadsheet tab per catalog as CSV.
#[derive(Debug, Clone)]
pub struct HttpSheetSource {
    base_url: Url,
    sheet_id: String,
    client: Client,
}

impl HttpSheetSource {
    pub fn new(config: &CatalogSourceConfig) -> Result<Self, AppError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| AppError::Configuration(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { base_url: config.base_url.clone(), sheet_id: config.sheet_id.clone(), client })
    }

    /// `{base}/{sheet_id}/gviz/tq?tqx=out:csv&sheet={CATALOG}`
    fn tab_url(&self, name: CatalogName) -> Result<Url, AppError> {
        let raw =
            format!("{}/{}/gviz/tq", self.base_url.as_str().trim_end_matches('/'), self.sheet_id);
        let mut url = Url::parse(&raw)
            .map_err(|e| AppError::Configuration(format!("Invalid sheet URL '{}': {}", raw, e)))?;
        url.query_pairs_mut().append_pair("tqx", "out:csv").append_pair("sheet", name.as_str());
        Ok(url)
    }
}

impl CatalogSource for HttpSheetSource {
    fn fetch_table(&self, name: CatalogName) -> Result<String, AppError> {
        let url = self.tab_url(name)?;
        let target = format!("sheet tab {}", name);

        let response = self.client.get(url).send().map_err(|e| AppError::transport(&target, e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(AppError::transport(&target, format!("HTTP {}", status.as_u16())));
        }

        let text = response.text().map_err(|e| AppError::transport(&target, e))?;
        if text.trim().is_empty() {
            return Err(AppError::malformed(&target, "empty response"));
        }
        Ok(text)
    }
}
