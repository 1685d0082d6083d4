use thiserror::Error;

/// Failures of the durable theme preference store.
///
/// None of these ever reach the user: a failed read falls through to the
/// next initialization tier and a failed write only costs the preference
/// its survival across sessions.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PersistenceError {
    #[error("Storage unavailable: {0}")]
    Unavailable(String),
    #[error("Read Error: {0}")]
    Read(String),
    #[error("Write Error: {0}")]
    Write(String),
}

impl From<std::io::Error> for PersistenceError {
    fn from(error: std::io::Error) -> Self {
        PersistenceError::Read(error.to_string())
    }
}

impl From<serde_json::Error> for PersistenceError {
    fn from(error: serde_json::Error) -> Self {
        PersistenceError::Read(format!("Malformed preferences: {}", error))
    }
}
