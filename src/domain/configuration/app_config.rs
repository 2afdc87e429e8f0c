//! Application configuration domain models.

use serde::{Deserialize, Serialize};
use url::Url;

use crate::domain::AppError;

/// Configuration loaded from `config.toml` in the artprompt home directory.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AppConfig {
    /// Remote catalog source configuration.
    #[serde(default)]
    pub catalog: CatalogSourceConfig,
    /// Suggestion generator configuration.
    #[serde(default)]
    pub generator: GeneratorConfig,
}

impl AppConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        self.catalog.validate()?;
        self.generator.validate()?;
        Ok(())
    }
}

/// Spreadsheet-backed catalog source.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CatalogSourceConfig {
    /// Spreadsheet identifier; one tab per catalog.
    #[serde(default = "default_sheet_id")]
    pub sheet_id: String,
    /// Root of the spreadsheet export endpoint.
    #[serde(default = "default_sheet_base_url")]
    pub base_url: Url,
    /// Request timeout in seconds.
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
    /// Skip the remote source and use the built-in catalog.
    #[serde(default)]
    pub offline: bool,
}

impl Default for CatalogSourceConfig {
    fn default() -> Self {
        Self {
            sheet_id: default_sheet_id(),
            base_url: default_sheet_base_url(),
            timeout_secs: default_timeout(),
            offline: false,
        }
    }
}

impl CatalogSourceConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        if self.sheet_id.trim().is_empty() {
            return Err(AppError::InvalidConfig("catalog.sheet_id must not be empty".to_string()));
        }
        if self.timeout_secs == 0 {
            return Err(AppError::InvalidConfig(
                "catalog.timeout_secs must be greater than 0".to_string(),
            ));
        }
        Ok(())
    }
}

/// Suggestion generator (Gemini `generateContent`).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GeneratorConfig {
    /// Models endpoint root; the model name and `:generateContent` are appended.
    #[serde(default = "default_generator_url")]
    pub api_url: Url,
    #[serde(default = "default_model")]
    pub model: String,
    /// Request timeout in seconds.
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
    /// Number of suggestions requested per import.
    #[serde(default = "default_suggestion_count")]
    pub suggestion_count: usize,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            api_url: default_generator_url(),
            model: default_model(),
            timeout_secs: default_timeout(),
            suggestion_count: default_suggestion_count(),
        }
    }
}

impl GeneratorConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        if self.model.trim().is_empty() {
            return Err(AppError::InvalidConfig("generator.model must not be empty".to_string()));
        }
        if self.timeout_secs == 0 {
            return Err(AppError::InvalidConfig(
                "generator.timeout_secs must be greater than 0".to_string(),
            ));
        }
        if !(1..=MAX_SUGGESTION_COUNT).contains(&self.suggestion_count) {
            return Err(AppError::InvalidConfig(format!(
                "generator.suggestion_count must be between 1 and {}",
                MAX_SUGGESTION_COUNT
            )));
        }
        Ok(())
    }
}

const MAX_SUGGESTION_COUNT: usize = 20;

fn default_sheet_id() -> String {
    "1Gxj0VfgtkqtTicsjK2_2Gx5sOXK8L3PJtI2-yKjftOE".to_string()
}

fn default_sheet_base_url() -> Url {
    Url::parse("https://docs.google.com/spreadsheets/d/").expect("Default sheet URL must be valid")
}

fn default_generator_url() -> Url {
    Url::parse("https://generativelanguage.googleapis.com/v1beta/models/")
        .expect("Default generator URL must be valid")
}

fn default_model() -> String {
    "gemini-2.5-flash".to_string()
}

fn default_timeout() -> u64 {
    30
}

fn default_suggestion_count() -> usize {
    5
}
