//! Configuration for the Topolab CLI.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use topolab::prelude::*;

pub const CONFIG_FILE: &str = "topolab.toml";

/// Topolab project configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub analysis: AnalysisConfig,
    /// Overrides the catalog's price list when present.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prices: Option<PriceList>,
    #[serde(default)]
    pub compare: CompareConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnalysisConfig {
    /// Alternate catalog JSON; the built-in catalog is used when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub catalog: Option<PathBuf>,
}

impl Config {
    /// The config written by `topolab init`, with prices spelled out.
    pub fn starter() -> Self {
        Self {
            prices: Some(PriceList::default()),
            ..Self::default()
        }
    }

    /// Load config from topolab.toml in the current or parent directories.
    pub fn load() -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to read current directory")?;
        match find_config_file(&cwd) {
            Some(path) => Self::load_from(&path),
            None => Ok(Config::default()),
        }
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config: {}", path.display()))?;
        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config: {}", path.display()))?;
        if let Some(prices) = &config.prices {
            prices
                .validate()
                .with_context(|| format!("Invalid prices in {}", path.display()))?;
        }
        Ok(config)
    }

    /// Save config to the specified path.
    pub fn save(&self, path: &Path) -> Result<()> {
        std::fs::write(path, self.to_toml()?)
            .with_context(|| format!("Failed to write config: {}", path.display()))?;
        Ok(())
    }

    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Failed to serialize config")
    }

    /// Build an analyzer from the configured catalog and overrides.
    pub fn analyzer(&self) -> Result<Analyzer> {
        let mut catalog = match &self.analysis.catalog {
            Some(path) => {
                let json = std::fs::read_to_string(path)
                    .with_context(|| format!("Failed to read catalog: {}", path.display()))?;
                Catalog::from_json_str(&json)
                    .with_context(|| format!("Failed to load catalog: {}", path.display()))?
            }
            None => Catalog::builtin().context("Built-in catalog is invalid")?,
        };
        if let Some(prices) = &self.prices {
            catalog = catalog.with_prices(prices.clone())?;
        }
        Ok(Analyzer::new(Arc::new(catalog), self.compare.clone()))
    }
}

/// Find topolab.toml in `start` or any of its parents.
fn find_config_file(start: &Path) -> Option<PathBuf> {
    let mut dir = start.to_path_buf();
    loop {
        let config_path = dir.join(CONFIG_FILE);
        if config_path.exists() {
            return Some(config_path);
        }
        if !dir.pop() {
            break;
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_use_builtin_catalog() {
        let config = Config::default();
        assert_eq!(config.compare.max_selected, 3);
        assert!(config.prices.is_none());
        assert!(config.analysis.catalog.is_none());

        let analyzer = config.analyzer().unwrap();
        assert_eq!(analyzer.catalog().templates.len(), 3);
    }

    #[test]
    fn starter_config_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        Config::starter().save(&path).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        assert!(text.contains("max-selected = 3"));
        assert!(text.contains("router = 500.0"));

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded, Config::starter());
    }

    #[test]
    fn partial_config_fills_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        std::fs::write(&path, "[prices.devices]\nrouter = 650.0\n").unwrap();

        let config = Config::load_from(&path).unwrap();
        let prices = config.prices.as_ref().unwrap();
        assert_eq!(prices.devices.router, 650.0);
        assert_eq!(prices.devices.switch, 300.0);
        assert_eq!(config.compare.max_selected, 3);

        let analyzer = config.analyzer().unwrap();
        let mut draft = analyzer.draft();
        let id = draft.add_device(DeviceType::Router);
        assert_eq!(draft.device(&id).unwrap().cost, 650.0);
    }

    #[test]
    fn negative_prices_are_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        std::fs::write(&path, "[prices.connections]\nfiber-per-meter = -5.0\n").unwrap();
        assert!(Config::load_from(&path).is_err());
    }

    #[test]
    fn config_is_found_in_parent_directories() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("a").join("b");
        std::fs::create_dir_all(&nested).unwrap();
        std::fs::write(dir.path().join(CONFIG_FILE), "").unwrap();

        let found = find_config_file(&nested).unwrap();
        assert_eq!(found, dir.path().join(CONFIG_FILE));
    }

    #[test]
    fn missing_catalog_file_is_an_error() {
        let config = Config {
            analysis: AnalysisConfig {
                catalog: Some(PathBuf::from("/nonexistent/catalog.json")),
            },
            ..Config::default()
        };
        assert!(config.analyzer().is_err());
    }
}
