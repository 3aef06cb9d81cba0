//! The staff record store.
//!
//! [`StaffStore`] owns the in-memory record collection and keeps it in step
//! with a [`StorageBackend`]. Every mutating operation validates first,
//! mutates memory, then rewrites the whole backend resource. If that write
//! fails the in-memory change is undone before the error is returned, so
//! memory and storage agree after every call.
//!
//! # Example
//!
//! ```
//! use staff_payroll::models::Staff;
//! use staff_payroll::storage::MemoryBackend;
//! use staff_payroll::store::StaffStore;
//! use rust_decimal::Decimal;
//!
//! let mut store = StaffStore::open(MemoryBackend::new())?;
//! store.add(Staff::hourly("Alice", "E1", Decimal::from(15), Decimal::from(40))?)?;
//!
//! let roster = store.list().expect("one record");
//! let row = roster.iter().next().unwrap();
//! assert_eq!(row.compensation, Decimal::from(600));
//!
//! store.remove("E1")?;
//! assert!(store.list().is_none());
//! # Ok::<(), staff_payroll::error::PayrollError>(())
//! ```

mod roster;

use tracing::{debug, info, warn};

use crate::codec::{decode_staff, encode_staff};
use crate::error::{PayrollError, PayrollResult};
use crate::models::{Staff, StaffUpdate};
use crate::storage::{BackendError, StorageBackend};

pub use roster::{Roster, RosterEntry};

/// Owns the staff records and their persistence.
///
/// Not thread-safe: one caller drives a store, one operation at a time, and
/// the backend resource is assumed to have no other writer.
#[derive(Debug)]
pub struct StaffStore<B: StorageBackend> {
    backend: B,
    records: Vec<Staff>,
}

impl<B: StorageBackend> StaffStore<B> {
    /// Creates a store over `backend` and loads its records.
    ///
    /// # Errors
    ///
    /// Everything returned here is fatal for the caller:
    /// - [`PayrollError::StorageAccess`] if the resource cannot be read, or
    ///   cannot be created when it does not exist yet
    /// - [`PayrollError::MalformedRecord`] if a stored line cannot be decoded
    pub fn open(backend: B) -> PayrollResult<Self> {
        let mut store = Self {
            backend,
            records: Vec::new(),
        };
        store.load()?;
        Ok(store)
    }

    /// Replaces the in-memory records with the backend's content.
    ///
    /// Lines with fewer than two fields or an unknown tag are skipped. A
    /// missing resource is created empty. Two lines with the same id make
    /// the resource malformed. On error the current records are kept.
    pub fn load(&mut self) -> PayrollResult<()> {
        let resource = self.backend.describe();
        let lines = match self.backend.read_all_lines() {
            Ok(lines) => lines,
            Err(BackendError::NotFound { .. }) => {
                warn!(resource = %resource, "Staff file not found, creating an empty one");
                self.backend
                    .create()
                    .map_err(|e| PayrollError::StorageAccess {
                        resource: resource.clone(),
                        message: e.message(),
                    })?;
                Vec::new()
            }
            Err(e) => {
                return Err(PayrollError::StorageAccess {
                    resource,
                    message: e.message(),
                });
            }
        };

        let mut records: Vec<Staff> = Vec::with_capacity(lines.len());
        for (position, line) in lines.iter().enumerate() {
            let line_number = position + 1;
            match decode_staff(line, line_number)? {
                Some(staff) => {
                    if records.iter().any(|s| s.id() == staff.id()) {
                        return Err(PayrollError::MalformedRecord {
                            line: line_number,
                            message: format!("duplicate staff id '{}'", staff.id()),
                        });
                    }
                    records.push(staff);
                }
                None if !line.trim().is_empty() => {
                    warn!(resource = %resource, line = line_number, "Skipping unrecognized line");
                }
                None => {}
            }
        }

        info!(resource = %resource, count = records.len(), "Loaded staff records");
        self.records = records;
        Ok(())
    }

    /// Writes every record, in order, over the backend resource.
    ///
    /// # Errors
    ///
    /// Returns [`PayrollError::PersistenceFailed`] if the backend write fails.
    /// The backend guarantees its previous content survives such a failure.
    pub fn save(&self) -> PayrollResult<()> {
        let lines: Vec<String> = self.records.iter().map(encode_staff).collect();
        self.backend
            .write_all_lines(&lines)
            .map_err(|e| PayrollError::PersistenceFailed {
                resource: self.backend.describe(),
                message: e.message(),
            })?;
        debug!(count = lines.len(), "Saved staff records");
        Ok(())
    }

    /// Adds a new record and persists the collection.
    ///
    /// Name and id are already non-empty by construction of [`Staff`].
    ///
    /// # Errors
    ///
    /// - [`PayrollError::DuplicateId`] if another record has the same id
    /// - [`PayrollError::PersistenceFailed`] if the write fails; the record is
    ///   not kept in memory
    pub fn add(&mut self, staff: Staff) -> PayrollResult<()> {
        if self.position(staff.id()).is_some() {
            return Err(PayrollError::DuplicateId {
                id: staff.id().to_string(),
            });
        }

        let previous_len = self.records.len();
        let id = staff.id().to_string();
        self.records.push(staff);

        if let Err(e) = self.save() {
            self.records.truncate(previous_len);
            warn!(id = %id, error = %e, "Add rolled back");
            return Err(e);
        }

        info!(id = %id, "Added staff record");
        Ok(())
    }

    /// Applies `update` to the record with `id` and persists the collection.
    ///
    /// The record is snapshotted first; any failure while applying fields or
    /// saving restores the whole record, category-specific fields included.
    ///
    /// # Errors
    ///
    /// - [`PayrollError::StaffNotFound`] if no record has `id`
    /// - [`PayrollError::InvalidField`] if the update is empty or a value is rejected
    /// - [`PayrollError::DuplicateId`] if the new id belongs to another record
    /// - [`PayrollError::CategoryMismatch`] if the terms update is for another category
    /// - [`PayrollError::PersistenceFailed`] if the write fails
    pub fn modify(&mut self, id: &str, update: &StaffUpdate) -> PayrollResult<()> {
        let index = self.position(id).ok_or_else(|| PayrollError::StaffNotFound {
            id: id.to_string(),
        })?;

        if update.is_empty() {
            return Err(PayrollError::invalid_field("update", "No changes were made"));
        }

        if let Some(new_id) = update.id.as_deref() {
            if new_id != id && self.position(new_id).is_some() {
                return Err(PayrollError::DuplicateId {
                    id: new_id.to_string(),
                });
            }
        }

        let snapshot = self.records[index].clone();
        let result = self.records[index]
            .apply(update)
            .and_then(|()| self.save());

        if let Err(e) = result {
            self.records[index] = snapshot;
            warn!(id = %id, error = %e, "Modify rolled back");
            return Err(e);
        }

        info!(id = %id, new_id = %self.records[index].id(), "Modified staff record");
        Ok(())
    }

    /// Removes the record with `id` and persists the collection.
    ///
    /// # Errors
    ///
    /// - [`PayrollError::StaffNotFound`] if no record has `id`
    /// - [`PayrollError::PersistenceFailed`] if the write fails; the record is
    ///   put back at its original position
    pub fn remove(&mut self, id: &str) -> PayrollResult<Staff> {
        let index = self.position(id).ok_or_else(|| PayrollError::StaffNotFound {
            id: id.to_string(),
        })?;

        let removed = self.records.remove(index);
        if let Err(e) = self.save() {
            self.records.insert(index, removed);
            warn!(id = %id, error = %e, "Remove rolled back");
            return Err(e);
        }

        info!(id = %id, "Removed staff record");
        Ok(removed)
    }

    /// Returns a listing of all records, or `None` when there are none.
    pub fn list(&self) -> Option<Roster<'_>> {
        if self.records.is_empty() {
            None
        } else {
            Some(Roster::new(&self.records))
        }
    }

    /// Looks up a record by id.
    pub fn get(&self, id: &str) -> Option<&Staff> {
        self.records.iter().find(|s| s.id() == id)
    }

    /// All records in insertion order.
    pub fn records(&self) -> &[Staff] {
        &self.records
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns true if the store holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// The backend this store writes to.
    pub fn backend(&self) -> &B {
        &self.backend
    }

    fn position(&self, id: &str) -> Option<usize> {
        self.records.iter().position(|s| s.id() == id)
    }
}
