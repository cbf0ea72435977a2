//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer: the single
//! entry point for all roster operations, regardless of the UI driving it.
//!
//! It dispatches to the appropriate command function and returns structured
//! `Result<CmdResult>` values. It holds no business logic, performs no I/O
//! formatting, and never touches stdout or stderr.
//!
//! `RosterApi<S: RecordStore>` is generic over the storage backend:
//! `RosterApi<FileStore>` in production, `RosterApi<InMemoryStore>` in
//! tests, so the facade can be exercised without touching the filesystem.

use crate::commands;
use crate::error::Result;
use crate::model::Record;
use crate::store::RecordStore;

/// The main API facade for roster operations.
///
/// Generic over `RecordStore` to allow different storage backends.
/// All UI clients should interact through this API.
pub struct RosterApi<S: RecordStore> {
    store: S,
}

impl<S: RecordStore> RosterApi<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn add_record(&mut self, record: Record) -> Result<commands::CmdResult> {
        commands::add::run(&mut self.store, record)
    }

    pub fn list_records(&self) -> Result<commands::CmdResult> {
        commands::list::run(&self.store)
    }

    pub fn find_by_id(&self, id: &str) -> Result<commands::CmdResult> {
        commands::find::run(&self.store, id)
    }

    pub fn remove_by_id(&mut self, id: &str) -> Result<commands::CmdResult> {
        commands::remove::run(&mut self.store, id)
    }
}

pub use commands::{CmdMessage, CmdOutcome, CmdResult, MessageLevel};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::InMemoryStore;

    #[test]
    fn add_then_find_round_trips_through_the_facade() {
        let mut api = RosterApi::new(InMemoryStore::new());
        api.add_record(Record::new("1", "a@b.com", 20)).unwrap();

        let result = api.find_by_id("1").unwrap();
        assert_eq!(result.found, Some(Record::new("1", "a@b.com", 20)));
    }

    #[test]
    fn remove_then_list_shows_empty_collection() {
        let mut api = RosterApi::new(InMemoryStore::new());
        api.add_record(Record::new("1", "a@b.com", 20)).unwrap();
        api.remove_by_id("1").unwrap();

        let result = api.list_records().unwrap();
        assert!(result.listed.is_empty());
    }
}
