// FILE: src/cli/config.rs

use crate::error::{Result, SketchError};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct ConfigFile {
    pub theme: Option<String>,
    pub theme_overrides: Option<HashMap<String, String>>,
    pub escape_output: Option<bool>,
    pub debug_mode: Option<bool>,
    pub output_directory: Option<String>,
}

pub const STARTER_CONFIG: &str = r##"# sketchc configuration

# Theme used to resolve style tokens: "variables", "light" or "dark"
theme = "variables"

# Print code listings HTML-escaped (`--raw` turns this off per run)
escape_output = true

# Directory for preview pages written by `sketchc batch`
output_directory = "previews"

# Concrete values for individual tokens (names as in `--color-primary`)
[theme_overrides]
color-primary = "#007BFF"
space-md = "16px"
"##;

pub fn load(config_path: &str) -> Result<ConfigFile> {
    log::info!("Loaded configuration from {}", config_path);
    let config_content = fs::read_to_string(config_path).map_err(|e| SketchError::FileNotFound {
        path: format!("Config file {}: {}", config_path, e),
    })?;

    parse(config_path, &config_content)
}

fn parse(config_path: &str, config_content: &str) -> Result<ConfigFile> {
    if config_path.ends_with(".json") {
        serde_json::from_str(config_content)
            .map_err(|e| SketchError::invalid_format(format!("Invalid JSON config: {}", e)))
    } else if config_path.ends_with(".toml") {
        toml::from_str(config_content)
            .map_err(|e| SketchError::invalid_format(format!("Invalid TOML config: {}", e)))
    } else {
        Err(SketchError::invalid_format("Config file must be .json or .toml format"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_starter_config_parses() {
        let config = parse("sketch.toml", STARTER_CONFIG).unwrap();
        assert_eq!(config.theme.as_deref(), Some("variables"));
        assert_eq!(config.escape_output, Some(true));
        let overrides = config.theme_overrides.unwrap();
        assert_eq!(overrides.get("color-primary").map(String::as_str), Some("#007BFF"));
    }

    #[test]
    fn test_load_json_config() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("sketch.json");
        fs::write(&path, r#"{ "theme": "dark", "debug_mode": true }"#).unwrap();

        let config = load(path.to_str().unwrap()).unwrap();
        assert_eq!(config.theme.as_deref(), Some("dark"));
        assert_eq!(config.debug_mode, Some(true));
        assert!(config.theme_overrides.is_none());
    }

    #[test]
    fn test_rejects_unknown_extension_and_bad_content() {
        assert!(matches!(
            parse("sketch.yaml", "theme: dark"),
            Err(SketchError::InvalidFormat { .. })
        ));
        assert!(matches!(
            parse("sketch.toml", "theme = "),
            Err(SketchError::InvalidFormat { .. })
        ));
        assert!(matches!(
            load("/nonexistent/sketch.toml"),
            Err(SketchError::FileNotFound { .. })
        ));
    }
}
