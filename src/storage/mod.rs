//! Storage backends for the serialized record lines.
//!
//! The store only needs a named resource holding newline-separated lines.
//! [`StorageBackend`] describes that contract; two implementations ship
//! with the crate:
//!
//! - [`FileBackend`]: a single text file, replaced atomically on every write.
//! - [`MemoryBackend`]: lines kept in memory, with switches to simulate
//!   failures. Used by tests and benchmarks.

mod backend;
mod file;
mod memory;

pub use backend::{BackendError, StorageBackend};
pub use file::FileBackend;
pub use memory::MemoryBackend;
