// File storage - JSON-backed key-value store, written through on every set

use super::KeyValueStore;
use anyhow::Context;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

pub struct FileStorage {
    file_path: PathBuf,
}

impl FileStorage {
    pub fn new(file_path: PathBuf) -> Self {
        Self { file_path }
    }

    pub fn path(&self) -> &Path {
        &self.file_path
    }

    fn load_entries(&self) -> anyhow::Result<BTreeMap<String, String>> {
        if !self.file_path.exists() {
            return Ok(BTreeMap::new());
        }

        let contents = fs::read_to_string(&self.file_path)
            .with_context(|| format!("reading {}", self.file_path.display()))?;
        if contents.trim().is_empty() {
            return Ok(BTreeMap::new());
        }

        let entries = serde_json::from_str(&contents)
            .with_context(|| format!("parsing {}", self.file_path.display()))?;
        Ok(entries)
    }

    fn save_entries(&self, entries: &BTreeMap<String, String>) -> anyhow::Result<()> {
        if let Some(parent) = self.file_path.parent() {
            fs::create_dir_all(parent)?;
        }

        let json = serde_json::to_string_pretty(entries)?;
        fs::write(&self.file_path, json)
            .with_context(|| format!("writing {}", self.file_path.display()))?;
        Ok(())
    }

    /// `<data_local_dir>/plantui/storage.json`, falling back to the working
    /// directory when the platform has no data dir.
    pub fn get_default_path() -> PathBuf {
        dirs::data_local_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("plantui")
            .join("storage.json")
    }
}

impl KeyValueStore for FileStorage {
    fn get(&self, key: &str) -> anyhow::Result<Option<String>> {
        Ok(self.load_entries()?.remove(key))
    }

    fn set(&mut self, key: &str, value: &str) -> anyhow::Result<()> {
        // A corrupt file is replaced rather than blocking every later write.
        let mut entries = self.load_entries().unwrap_or_default();
        entries.insert(key.to_string(), value.to_string());
        self.save_entries(&entries)
    }
}
