use crate::output::OutputFormat;
use anyhow::{Context, Result};
use directories::ProjectDirs;
use log::debug;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub input: InputConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InputConfig {
    /// Zero-based CSV column holding the homeowner entries
    #[serde(default)]
    pub column: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub format: OutputFormat,
}

impl Config {
    /// Load from the default location, falling back to defaults
    pub fn load() -> Result<Self> {
        match get_config_path() {
            Ok(path) => Self::load_from(&path),
            Err(e) => {
                debug!("No config directory available: {}", e);
                Ok(Self::default())
            }
        }
    }

    /// Load from `path`; a missing file yields the defaults
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            debug!("Config file {} not found, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).context("Failed to read config file")?;
        toml::from_str(&content).context("Failed to parse config file")
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        fs::write(path, content).context("Failed to write config file")?;

        Ok(())
    }
}

pub fn get_config_path() -> Result<PathBuf> {
    let proj_dirs = ProjectDirs::from("com", "homeowner-parser", "homeowner-parser")
        .context("Failed to determine config directory")?;

    Ok(proj_dirs.config_dir().join("config.toml"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::tempdir;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.input.column, 0);
        assert_eq!(config.output.format, OutputFormat::Text);
    }

    #[test]
    fn test_missing_file_gives_default() -> Result<()> {
        let temp_dir = tempdir()?;
        let config = Config::load_from(&temp_dir.path().join("missing.toml"))?;
        assert_eq!(config, Config::default());
        Ok(())
    }

    #[test]
    fn test_config_save_load() -> Result<()> {
        let temp_dir = tempdir()?;
        let config_path = temp_dir.path().join("nested").join("config.toml");

        let config = Config {
            input: InputConfig { column: 2 },
            output: OutputConfig { format: OutputFormat::Json },
        };
        config.save_to(&config_path)?;

        let loaded = Config::load_from(&config_path)?;
        assert_eq!(loaded, config);

        Ok(())
    }

    #[test]
    fn test_partial_config() -> Result<()> {
        let temp_dir = tempdir()?;
        let config_path = temp_dir.path().join("config.toml");
        fs::write(&config_path, "[output]\nformat = \"debug\"\n")?;

        let loaded = Config::load_from(&config_path)?;
        assert_eq!(loaded.input.column, 0);
        assert_eq!(loaded.output.format, OutputFormat::Debug);
        Ok(())
    }

    #[test]
    fn test_invalid_config_is_error() -> Result<()> {
        let temp_dir = tempdir()?;
        let config_path = temp_dir.path().join("config.toml");
        fs::write(&config_path, "[input]\ncolumn = \"first\"\n")?;

        assert!(Config::load_from(&config_path).is_err());
        Ok(())
    }
}
