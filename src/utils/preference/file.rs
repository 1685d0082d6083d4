use std::collections::BTreeMap;
use std::path::{ Path, PathBuf };
use super::PreferenceStorage;
use crate::error::PersistenceError;

const APP_DIR: &str = "portfolio";
const FILE_NAME: &str = "preferences.json";

/// Preferences kept as a flat JSON object on disk, used by native builds.
#[derive(Debug, Clone)]
pub struct FileStorage {
    path: PathBuf,
}

impl FileStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// `<config_dir>/portfolio/preferences.json`
    pub fn default_path() -> Result<PathBuf, PersistenceError> {
        let config_dir = dirs
            ::config_dir()
            .ok_or_else(|| PersistenceError::Unavailable("No config directory".to_string()))?;
        Ok(config_dir.join(APP_DIR).join(FILE_NAME))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Raw file contents, `None` when the file does not exist yet.
    fn contents(&self) -> std::io::Result<Option<String>> {
        match std::fs::read_to_string(&self.path) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e),
        }
    }

    fn load(&self) -> Result<BTreeMap<String, String>, PersistenceError> {
        match self.contents()? {
            Some(content) => Ok(serde_json::from_str(&content)?),
            None => Ok(BTreeMap::new()),
        }
    }
}

impl PreferenceStorage for FileStorage {
    fn read(&self, key: &str) -> Result<Option<String>, PersistenceError> {
        Ok(self.load()?.get(key).cloned())
    }

    fn write(&mut self, key: &str, value: &str) -> Result<(), PersistenceError> {
        let content = self
            .contents()
            .map_err(|e| PersistenceError::Write(format!("Failed to read {}: {}", self.path.display(), e)))?;

        // Malformed JSON is replaced; any other read failure leaves the file alone.
        let mut values: BTreeMap<String, String> = match content {
            Some(content) =>
                serde_json::from_str(&content).unwrap_or_else(|e| {
                    log::warn!("Discarding malformed preferences at {}: {}", self.path.display(), e);
                    BTreeMap::new()
                }),
            None => BTreeMap::new(),
        };
        values.insert(key.to_string(), value.to_string());

        if let Some(parent) = self.path.parent() {
            std::fs
                ::create_dir_all(parent)
                .map_err(|e| PersistenceError::Write(format!("Failed to create {}: {}", parent.display(), e)))?;
        }
        let content = serde_json
            ::to_string_pretty(&values)
            .map_err(|e| PersistenceError::Write(e.to_string()))?;
        std::fs
            ::write(&self.path, content)
            .map_err(|e| PersistenceError::Write(format!("Failed to write {}: {}", self.path.display(), e)))
    }
}
