//! In-memory backend.

use std::cell::{Cell, RefCell};

use super::backend::{BackendError, StorageBackend};

const RESOURCE_NAME: &str = "memory://stafflist";

/// Keeps the record lines in memory.
///
/// Uses `RefCell`/`Cell` for interior mutability since the store is
/// single-threaded and the [`StorageBackend`] trait takes `&self`.
/// Failure switches let tests drive the store's rollback paths.
#[derive(Debug, Default)]
pub struct MemoryBackend {
    lines: RefCell<Option<Vec<String>>>,
    fail_writes: Cell<bool>,
    deny_access: Cell<bool>,
    writes: Cell<usize>,
}

impl MemoryBackend {
    /// Creates a backend whose resource does not exist yet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a backend whose resource already holds `lines`.
    pub fn with_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let backend = Self::new();
        *backend.lines.borrow_mut() = Some(lines.into_iter().map(Into::into).collect());
        backend
    }

    /// Makes every following write fail until switched off.
    pub fn set_fail_writes(&self, fail: bool) {
        self.fail_writes.set(fail);
    }

    /// Makes every following read, write and create fail with an access error.
    pub fn set_deny_access(&self, deny: bool) {
        self.deny_access.set(deny);
    }

    /// Returns the stored lines, or `None` if the resource does not exist.
    pub fn lines(&self) -> Option<Vec<String>> {
        self.lines.borrow().clone()
    }

    /// Returns how many writes have succeeded.
    pub fn write_count(&self) -> usize {
        self.writes.get()
    }

    fn check_access(&self) -> Result<(), BackendError> {
        if self.deny_access.get() {
            return Err(BackendError::Access {
                resource: RESOURCE_NAME.to_string(),
                message: "Simulated permission denied".to_string(),
            });
        }
        Ok(())
    }
}

impl StorageBackend for MemoryBackend {
    fn describe(&self) -> String {
        RESOURCE_NAME.to_string()
    }

    fn read_all_lines(&self) -> Result<Vec<String>, BackendError> {
        self.check_access()?;
        self.lines
            .borrow()
            .clone()
            .ok_or_else(|| BackendError::NotFound {
                resource: RESOURCE_NAME.to_string(),
            })
    }

    fn write_all_lines(&self, lines: &[String]) -> Result<(), BackendError> {
        self.check_access()?;
        if self.fail_writes.get() {
            return Err(BackendError::Access {
                resource: RESOURCE_NAME.to_string(),
                message: "Simulated write error".to_string(),
            });
        }
        *self.lines.borrow_mut() = Some(lines.to_vec());
        self.writes.set(self.writes.get() + 1);
        Ok(())
    }

    fn create(&self) -> Result<(), BackendError> {
        self.check_access()?;
        self.lines.borrow_mut().get_or_insert_with(Vec::new);
        Ok(())
    }
}
