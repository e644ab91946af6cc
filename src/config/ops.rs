use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

use super::Config;

impl Config {
    /// Location of the settings file.
    ///
    /// # Errors
    ///
    /// Fails when the home directory cannot be determined.
    pub fn path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .context("Could not determine home directory")?;
        Ok(home.join(".config").join("open-assets").join("config.toml"))
    }

    /// Load from [`Config::path`]; a missing file yields the defaults.
    ///
    /// # Errors
    ///
    /// See [`Config::load_from`].
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::path()?)
    }

    /// Load from an explicit path; a missing file yields the defaults.
    ///
    /// # Errors
    ///
    /// Fails when the file exists but cannot be read or is not valid TOML.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {}", path.display()))?;
        let config: Self = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config at {}", path.display()))?;
        Ok(config)
    }

    /// Write to [`Config::path`], creating parent directories.
    ///
    /// # Errors
    ///
    /// See [`Config::save_to`].
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::path()?)
    }

    /// Write to an explicit path, creating parent directories.
    ///
    /// # Errors
    ///
    /// Fails when the directory or file cannot be written.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config dir {}", parent.display()))?;
        }
        let content = toml::to_string_pretty(self)
            .context("Failed to serialize config")?;
        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config to {}", path.display()))?;
        Ok(())
    }

    /// Get a config value by dot-separated key path
    ///
    /// # Errors
    ///
    /// Fails for an unknown key.
    pub fn get_value(&self, key: &str) -> Result<String> {
        match key {
            "editor.command" => Ok(self.editor.command.clone()),
            "launch.augment_path" => Ok(self.launch.augment_path.to_string()),
            _ => anyhow::bail!("Unknown config key: {key}"),
        }
    }

    /// Set a config value by dot-separated key path
    ///
    /// # Errors
    ///
    /// Fails for an unknown key or a value of the wrong shape.
    pub fn set_value(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "editor.command" => {
                let value = value.trim();
                if value.is_empty() {
                    anyhow::bail!("editor.command cannot be empty");
                }
                self.editor.command = value.to_string();
            }
            "launch.augment_path" => {
                self.launch.augment_path = value.parse::<bool>()
                    .with_context(|| format!("Invalid boolean value: {value}"))?;
            }
            _ => anyhow::bail!("Unknown config key: {key}"),
        }
        Ok(())
    }
}
