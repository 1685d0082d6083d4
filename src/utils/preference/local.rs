use web_sys::Storage;
use super::PreferenceStorage;
use crate::error::PersistenceError;

/// Browser `localStorage`, scoped to the page origin.
#[derive(Debug, Default, Clone, Copy)]
pub struct LocalStorage;

impl LocalStorage {
    fn storage() -> Result<Storage, PersistenceError> {
        let window = web_sys
            ::window()
            .ok_or_else(|| PersistenceError::Unavailable("No window".to_string()))?;
        window
            .local_storage()
            .map_err(|e| PersistenceError::Unavailable(format!("{:?}", e)))?
            .ok_or_else(|| PersistenceError::Unavailable("localStorage disabled".to_string()))
    }
}

impl PreferenceStorage for LocalStorage {
    fn read(&self, key: &str) -> Result<Option<String>, PersistenceError> {
        Self::storage()?
            .get_item(key)
            .map_err(|e| PersistenceError::Read(format!("{:?}", e)))
    }

    fn write(&mut self, key: &str, value: &str) -> Result<(), PersistenceError> {
        Self::storage()?
            .set_item(key, value)
            .map_err(|e| PersistenceError::Write(format!("{:?}", e)))
    }
}
