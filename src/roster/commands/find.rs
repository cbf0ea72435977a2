use crate::commands::{CmdOutcome, CmdResult};
use crate::error::Result;
use crate::store::RecordStore;

/// Find the first record whose id matches. A miss is the benign case:
/// outcome `NotFound`, no message, no error.
pub fn run<S: RecordStore>(store: &S, id: &str) -> Result<CmdResult> {
    let records = store.load()?;
    let result = match records.into_iter().find(|r| r.id == id) {
        Some(record) => CmdResult::default().with_found(record),
        None => CmdResult::default().with_outcome(CmdOutcome::NotFound),
    };
    Ok(result)
}
