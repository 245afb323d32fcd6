// File: ./src/config.rs
// Handles configuration loading, saving, and defaults.
use crate::context::AppContext;
use crate::storage;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;

fn default_true() -> bool {
    true
}

fn default_indent_width() -> usize {
    2
}

fn default_separator_width() -> usize {
    66
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Persist the task list after every successful mutation.
    #[serde(default = "default_true")]
    pub autosave: bool,
    #[serde(default = "default_indent_width")]
    pub indent_width: usize,
    #[serde(default = "default_separator_width")]
    pub separator_width: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            autosave: true,
            indent_width: default_indent_width(),
            separator_width: default_separator_width(),
        }
    }
}

impl Config {
    /// Load the configuration from disk using an explicit context.
    /// A missing config file is not an error; defaults apply.
    pub fn load_or_default(ctx: &dyn AppContext) -> Self {
        match Self::load(ctx) {
            Ok(config) => config,
            Err(e) => {
                log::info!("Using default configuration: {}", e);
                Self::default()
            }
        }
    }

    pub fn load(ctx: &dyn AppContext) -> Result<Self> {
        let path = ctx.get_config_file_path()?;

        if !path.exists() {
            return Err(anyhow::anyhow!("Config file not found"));
        }

        let contents = fs::read_to_string(&path).map_err(|e| {
            anyhow::anyhow!("Failed to read config file '{}': {}", path.display(), e)
        })?;

        let config: Config = toml::from_str(&contents).map_err(|e| {
            anyhow::anyhow!("Failed to parse config file '{}': {}", path.display(), e)
        })?;

        Ok(config)
    }

    pub fn save(&self, ctx: &dyn AppContext) -> Result<()> {
        let path = ctx.get_config_file_path()?;
        let toml_str = toml::to_string_pretty(self)?;
        storage::atomic_write(&path, toml_str)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::TestContext;

    #[test]
    fn test_missing_config_falls_back_to_defaults() {
        let ctx = TestContext::new();
        let config = Config::load_or_default(&ctx);
        assert!(config.autosave);
        assert_eq!(config.indent_width, 2);
        assert_eq!(config.separator_width, 66);
    }

    #[test]
    fn test_config_roundtrip() {
        let ctx = TestContext::new();
        let config = Config {
            autosave: false,
            indent_width: 4,
            separator_width: 40,
        };
        config.save(&ctx).unwrap();

        let loaded = Config::load(&ctx).unwrap();
        assert!(!loaded.autosave);
        assert_eq!(loaded.indent_width, 4);
        assert_eq!(loaded.separator_width, 40);
    }

    #[test]
    fn test_partial_config_uses_field_defaults() {
        let ctx = TestContext::new();
        let path = ctx.get_config_file_path().unwrap();
        fs::write(&path, "autosave = false\n").unwrap();

        let loaded = Config::load(&ctx).unwrap();
        assert!(!loaded.autosave);
        assert_eq!(loaded.indent_width, 2);
        assert_eq!(loaded.separator_width, 66);
    }
}
