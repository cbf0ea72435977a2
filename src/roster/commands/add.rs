use crate::commands::{CmdMessage, CmdOutcome, CmdResult};
use crate::error::Result;
use crate::model::Record;
use crate::store::RecordStore;

/// Add a record to the collection. New records are prepended, so the
/// collection stays ordered most-recently-added first. A duplicate id
/// leaves the collection untouched and reports `DuplicateId`.
pub fn run<S: RecordStore>(store: &mut S, record: Record) -> Result<CmdResult> {
    let existing = store.load()?;
    let mut result = CmdResult::default();

    if existing.iter().any(|r| r.id == record.id) {
        result.outcome = CmdOutcome::DuplicateId;
        result.add_message(CmdMessage::warning(format!(
            "Item with id {} already exists",
            record.id
        )));
        return Ok(result);
    }

    let mut records = Vec::with_capacity(existing.len() + 1);
    records.push(record);
    records.extend(existing);
    store.save(&records)?;

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::InMemoryStore;

    #[test]
    fn prepends_new_records() {
        let mut store = InMemoryStore::new();
        run(&mut store, Record::new("1", "a@b.com", 30)).unwrap();
        run(&mut store, Record::new("2", "b@c.com", 40)).unwrap();

        let records = store.load().unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].id, "2");
        assert_eq!(records[1].id, "1");
    }

    #[test]
    fn duplicate_id_leaves_collection_unchanged() {
        let mut store = InMemoryStore::new();
        run(&mut store, Record::new("1", "a@b.com", 30)).unwrap();

        let result = run(&mut store, Record::new("1", "other@b.com", 99)).unwrap();
        assert_eq!(result.outcome, CmdOutcome::DuplicateId);
        assert_eq!(result.messages.len(), 1);
        assert_eq!(result.messages[0].content, "Item with id 1 already exists");

        let records = store.load().unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].email, "a@b.com");
    }

    #[test]
    fn successful_add_reports_ok_with_no_messages() {
        let mut store = InMemoryStore::new();
        let result = run(&mut store, Record::new("1", "a@b.com", 30)).unwrap();
        assert_eq!(result.outcome, CmdOutcome::Ok);
        assert!(result.messages.is_empty());
    }
}
