use crate::commands::{CmdMessage, CmdOutcome, CmdResult};
use crate::error::Result;
use crate::model::Record;
use crate::store::RecordStore;

/// Remove every record whose id matches. If nothing matched the collection
/// is left untouched and the outcome is `NotFound`.
pub fn run<S: RecordStore>(store: &mut S, id: &str) -> Result<CmdResult> {
    let records = store.load()?;
    let mut result = CmdResult::default();

    let remaining: Vec<Record> = records.iter().filter(|r| r.id != id).cloned().collect();
    if remaining.len() == records.len() {
        result.outcome = CmdOutcome::NotFound;
        result.add_message(CmdMessage::warning(format!("Item with id {} not found", id)));
        return Ok(result);
    }

    store.save(&remaining)?;
    Ok(result)
}
