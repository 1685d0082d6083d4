use std::cell::RefCell;
use std::rc::Rc;
use crate::error::PersistenceError;
use crate::utils::PreferenceStorage;

/// Storage whose reads and writes can be forced to fail, and which keeps a
/// log of every attempted write the test can inspect after the storage has
/// been handed to a store.
#[derive(Default)]
pub struct MockStorage {
    pub stored: Option<String>,
    pub fail_reads: bool,
    pub fail_writes: bool,
    writes: Rc<RefCell<Vec<(String, String)>>>,
}

impl MockStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_stored(value: &str) -> Self {
        Self { stored: Some(value.to_string()), ..Self::default() }
    }

    pub fn failing_reads(mut self) -> Self {
        self.fail_reads = true;
        self
    }

    pub fn failing_writes(mut self) -> Self {
        self.fail_writes = true;
        self
    }

    pub fn write_log(&self) -> Rc<RefCell<Vec<(String, String)>>> {
        self.writes.clone()
    }
}

impl PreferenceStorage for MockStorage {
    fn read(&self, _key: &str) -> Result<Option<String>, PersistenceError> {
        if self.fail_reads {
            return Err(PersistenceError::Read("mock read failure".to_string()));
        }
        Ok(self.stored.clone())
    }

    fn write(&mut self, key: &str, value: &str) -> Result<(), PersistenceError> {
        self.writes.borrow_mut().push((key.to_string(), value.to_string()));
        if self.fail_writes {
            return Err(PersistenceError::Write("mock write failure".to_string()));
        }
        self.stored = Some(value.to_string());
        Ok(())
    }
}
