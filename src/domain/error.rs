use std::io;

use thiserror::Error;

use crate::domain::prompt::ComposeError;

/// Library-wide error type for artprompt operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Configuration or environment issue.
    #[error("{0}")]
    Configuration(String),

    /// Configuration file parsed but holds an invalid value.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    /// Network or remote-service failure.
    #[error("Transport failure while contacting {target}: {details}")]
    TransportFailure { target: String, details: String },

    /// A remote source answered, but not in the expected shape.
    #[error("Malformed response from {target}: {details}")]
    MalformedResponse { target: String, details: String },

    /// A persisted value could not be deserialized.
    #[error("Corrupt persisted state under '{key}': {details}")]
    CorruptPersistedState { key: String, details: String },

    /// Catalog loading failed as a whole (not per catalog).
    #[error("Catalog load failed: {0}")]
    CatalogLoadFailure(String),

    /// Catalog name is not one of CHARACTER, SCENE, CAMERA.
    #[error("Unknown catalog '{0}': must be one of character, scene, camera")]
    UnknownCatalog(String),

    /// Category is not part of the catalog.
    #[error("Category '{category}' not found in {catalog}. Available: {available}")]
    UnknownCategory { catalog: String, category: String, available: String },

    /// Value is not listed in the category.
    #[error("Value '{value}' is not listed under '{category}'. Available: {available}")]
    UnknownValue { category: String, value: String, available: String },

    /// Theme name is not one of the built-in themes.
    #[error("Unknown theme '{name}'. Available: {available}")]
    UnknownTheme { name: String, available: String },

    /// Interactive terminal input failed.
    #[error("Interactive input failed: {0}")]
    Interaction(String),

    /// Prompt template rendering failed.
    #[error(transparent)]
    Prompt(#[from] ComposeError),
}

impl AppError {
    pub fn config_error<S: Into<String>>(message: S) -> Self {
        AppError::Configuration(message.into())
    }

    pub fn transport<T: Into<String>, D: std::fmt::Display>(target: T, details: D) -> Self {
        AppError::TransportFailure { target: target.into(), details: details.to_string() }
    }

    pub fn malformed<T: Into<String>, D: std::fmt::Display>(target: T, details: D) -> Self {
        AppError::MalformedResponse { target: target.into(), details: details.to_string() }
    }
}
