//! Configuration file support
//!
//! Loads configuration from `<config_dir>/plantui/config.toml`.

use crate::models::{Plant, default_plants};
use anyhow::{Context, bail};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Where the daily record is kept. Defaults to the platform data dir.
    pub storage_path: Option<PathBuf>,
    /// `tracing` filter directive, e.g. `debug` or `plantui=trace`.
    pub log_level: Option<String>,
    #[serde(default)]
    pub plants: Vec<Plant>,
}

impl Config {
    /// Reads `explicit` if given (it must exist), otherwise the default path
    /// if present, otherwise built-in defaults.
    pub fn load(explicit: Option<&Path>) -> anyhow::Result<Self> {
        let path = match explicit {
            Some(path) if !path.exists() => bail!("config file {} not found", path.display()),
            Some(path) => path.to_path_buf(),
            None => match Self::default_path() {
                Some(path) if path.exists() => path,
                _ => return Ok(Self::default()),
            },
        };

        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("reading {}", path.display()))?;
        Self::parse(&content).with_context(|| format!("parsing {}", path.display()))
    }

    pub fn parse(content: &str) -> anyhow::Result<Self> {
        Ok(toml::from_str(content)?)
    }

    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("plantui").join("config.toml"))
    }

    /// Configured plants with duplicate ids dropped (first one wins), or the
    /// built-in list when none are configured.
    pub fn plants(&self) -> Vec<Plant> {
        if self.plants.is_empty() {
            return default_plants();
        }

        let mut seen = HashSet::new();
        self.plants
            .iter()
            .filter(|plant| {
                let fresh = seen.insert(plant.id.clone());
                if !fresh {
                    tracing::warn!(id = %plant.id, "duplicate plant id in config, skipping");
                }
                fresh
            })
            .cloned()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_config_uses_built_in_plants() {
        let config = Config::parse("").unwrap();
        assert!(config.storage_path.is_none());
        assert_eq!(config.plants(), default_plants());
    }

    #[test]
    fn parses_plants_and_paths() {
        let config = Config::parse(
            r#"
            storage_path = "/tmp/plants.json"
            log_level = "debug"

            [[plants]]
            id = "fern"
            name = "Boston fern"
            location = "Bathroom"

            [[plants]]
            id = "ivy"
            name = "Ivy"
            location = "Balcony"
            notes = "Water every other day."
            "#,
        )
        .unwrap();

        assert_eq!(config.storage_path, Some(PathBuf::from("/tmp/plants.json")));
        assert_eq!(config.log_level.as_deref(), Some("debug"));
        let plants = config.plants();
        assert_eq!(plants.len(), 2);
        assert_eq!(plants[0].notes, "");
        assert_eq!(plants[1].notes, "Water every other day.");
    }

    #[test]
    fn duplicate_ids_keep_the_first() {
        let config = Config::parse(
            r#"
            [[plants]]
            id = "fern"
            name = "First"
            location = "Bathroom"

            [[plants]]
            id = "fern"
            name = "Second"
            location = "Hall"
            "#,
        )
        .unwrap();

        let plants = config.plants();
        assert_eq!(plants.len(), 1);
        assert_eq!(plants[0].name, "First");
    }

    #[test]
    fn missing_explicit_file_is_an_error() {
        let dir = tempfile::TempDir::new().unwrap();
        assert!(Config::load(Some(&dir.path().join("nope.toml"))).is_err());
    }

    #[test]
    fn invalid_toml_is_an_error() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "plants = 3").unwrap();
        assert!(Config::load(Some(&path)).is_err());
    }
}
