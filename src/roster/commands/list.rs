use crate::commands::CmdResult;
use crate::error::Result;
use crate::store::RecordStore;

/// Return the full collection in stored order. An absent or empty backing
/// file is an empty collection, not an error.
pub fn run<S: RecordStore>(store: &S) -> Result<CmdResult> {
    let records = store.load()?;
    Ok(CmdResult::default().with_listed(records))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::{add, CmdOutcome};
    use crate::model::Record;
    use crate::store::memory::InMemoryStore;

    #[test]
    fn empty_store_lists_nothing() {
        let store = InMemoryStore::new();
        let result = run(&store).unwrap();
        assert_eq!(result.outcome, CmdOutcome::Ok);
        assert!(result.listed.is_empty());
    }

    #[test]
    fn lists_records_most_recent_first() {
        let mut store = InMemoryStore::new();
        add::run(&mut store, Record::new("1", "a@b.com", 20)).unwrap();
        add::run(&mut store, Record::new("2", "b@c.com", 40)).unwrap();

        let result = run(&store).unwrap();
        assert_eq!(result.listed.len(), 2);
        assert_eq!(result.listed[0].id, "2");
        assert_eq!(result.listed[1].id, "1");
    }
}
