use crate::output::{ColorMode, OutputFormat};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const APP_NAME: &str = "quizq";
const CONFIG_FILE: &str = "config.json";

/// User configuration stored in the platform config directory
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Output format used when `--format` is not given
    #[serde(default)]
    pub format: OutputFormat,

    /// Color mode used when `--color` is not given
    #[serde(default)]
    pub color: ColorMode,

    /// Log level used when neither `-v` nor RUST_LOG is given (0 = warn, 3 = trace)
    #[serde(default = "default_verbosity")]
    pub verbosity: u8,
}

fn default_verbosity() -> u8 {
    0
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::default(),
            color: ColorMode::default(),
            verbosity: default_verbosity(),
        }
    }
}

impl AppConfig {
    /// Load config from the default location.
    ///
    /// A missing file or a platform without a config directory gives the defaults.
    pub fn load() -> Result<Self> {
        match get_config_path() {
            Ok(path) => Self::load_from(&path),
            Err(_) => Ok(Self::default()),
        }
    }

    /// Load config from a specific file, or return default if it doesn't exist
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config: AppConfig = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;
        Ok(config)
    }

    /// Save config to a specific file, creating parent directories
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
        let content = serde_json::to_string_pretty(self).context("Failed to serialize config")?;
        fs::write(path, content)
            .with_context(|| format!("Failed to write config file {}", path.display()))?;
        Ok(())
    }
}

/// Get the path to the config file
pub fn get_config_path() -> Result<PathBuf> {
    let base = dirs::config_dir().context("Could not determine config directory")?;
    Ok(base.join(APP_NAME).join(CONFIG_FILE))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir()
            .join("quizq_config_tests")
            .join(format!("{}_{}", std::process::id(), name))
    }

    #[test]
    fn test_missing_file_is_default() {
        let config = AppConfig::load_from(&temp_path("missing.json")).unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_save_and_load() {
        let path = temp_path("roundtrip/config.json");
        let config = AppConfig {
            format: OutputFormat::Json,
            color: ColorMode::Never,
            verbosity: 2,
        };
        config.save_to(&path).unwrap();
        assert_eq!(AppConfig::load_from(&path).unwrap(), config);
        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let path = temp_path("partial.json");
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, r#"{"format": "pretty"}"#).unwrap();

        let config = AppConfig::load_from(&path).unwrap();
        assert_eq!(config.format, OutputFormat::Pretty);
        assert_eq!(config.color, ColorMode::Auto);
        assert_eq!(config.verbosity, 0);
        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_invalid_file_errors() {
        let path = temp_path("invalid.json");
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, "not json").unwrap();

        let err = AppConfig::load_from(&path).unwrap_err();
        assert!(err.to_string().contains("Failed to parse config file"));
        let _ = fs::remove_file(&path);
    }
}
