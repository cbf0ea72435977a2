//! # Storage Layer
//!
//! The [`RecordStore`] trait abstracts where the record collection lives.
//!
//! Storage is behind a trait to enable testing with `InMemoryStore` (no
//! filesystem needed) and to keep command logic decoupled from persistence
//! details.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: production storage. The collection is the literal
//!   contents of one file, encoded as a JSON array of records. Every load
//!   reads the whole file; every save rewrites it in full. An absent or
//!   empty file loads as an empty collection.
//!
//! - [`memory::InMemoryStore`]: in-memory storage for tests. No persistence.
//!
//! ## Known Hazard: Concurrent Access
//!
//! There is no locking discipline. Each operation is an unsynchronized
//! read-entire-file then write-entire-file cycle, so two processes working
//! on the same file race and the last writer wins. Multi-process safety is
//! out of scope.

use crate::error::Result;
use crate::model::Record;

pub mod fs;
pub mod memory;

/// Abstract interface for record collection storage.
///
/// The store is deliberately stateless between calls: the collection is the
/// single source of truth, and callers load it fresh for every operation.
pub trait RecordStore {
    /// Load the full collection. Absent backing data yields an empty vec.
    fn load(&self) -> Result<Vec<Record>>;

    /// Replace the full collection.
    fn save(&mut self, records: &[Record]) -> Result<()>;
}
