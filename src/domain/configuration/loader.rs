//! Configuration loading.

use std::fs;
use std::path::Path;

use crate::domain::{AppConfig, AppError};

/// File name of the configuration inside the home directory.
pub const CONFIG_FILE: &str = "config.toml";

/// Load `config.toml` from `home`, falling back to defaults when absent.
pub fn load_config(home: &Path) -> Result<AppConfig, AppError> {
    let path = home.join(CONFIG_FILE);
    if !path.exists() {
        return Ok(AppConfig::default());
    }

    let content = fs::read_to_string(&path)?;
    parse_config_content(&content)
}

/// Parse configuration from string content.
pub fn parse_config_content(content: &str) -> Result<AppConfig, AppError> {
    let config: AppConfig = toml::from_str(content)?;
    config.validate()?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn app_config_parses_from_toml() {
        let toml = r#"
[catalog]
sheet_id = "abc123"
base_url = "http://127.0.0.1:9000/sheets/"
offline = true

[generator]
model = "gemini-2.5-pro"
suggestion_count = 3
"#;
        let config = parse_config_content(toml).unwrap();

        assert_eq!(config.catalog.sheet_id, "abc123");
        assert_eq!(config.catalog.base_url.as_str(), "http://127.0.0.1:9000/sheets/");
        assert!(config.catalog.offline);
        assert_eq!(config.generator.model, "gemini-2.5-pro");
        assert_eq!(config.generator.suggestion_count, 3);
        assert_eq!(config.generator.timeout_secs, 30);
    }

    #[test]
    fn app_config_uses_defaults_for_missing_sections() {
        let config = parse_config_content("").unwrap();
        assert_eq!(config.catalog.timeout_secs, 30);
        assert!(!config.catalog.offline);
    }

    #[test]
    fn app_config_rejects_unknown_fields() {
        let result = parse_config_content("[catalog]\nsheet = \"x\"\n");
        assert!(matches!(result, Err(AppError::TomlParse(_))));
    }

    #[test]
    fn app_config_rejects_invalid_values() {
        let result = parse_config_content("[generator]\nsuggestion_count = 0\n");
        assert!(matches!(result, Err(AppError::InvalidConfig(_))));
    }

    #[test]
    fn load_config_defaults_when_file_missing() {
        let dir = tempfile::tempdir().unwrap();
        let config = load_config(dir.path()).unwrap();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn load_config_reads_file() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(CONFIG_FILE), "[catalog]\noffline = true\n").unwrap();
        let config = load_config(dir.path()).unwrap();
        assert!(config.catalog.offline);
    }
}
