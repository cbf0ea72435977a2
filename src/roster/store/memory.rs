use super::RecordStore;
use crate::error::Result;
use crate::model::Record;

/// In-memory storage for testing and development.
/// Does NOT persist data.
#[derive(Default)]
pub struct InMemoryStore {
    records: Vec<Record>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl RecordStore for InMemoryStore {
    fn load(&self) -> Result<Vec<Record>> {
        Ok(self.records.clone())
    }

    fn save(&mut self, records: &[Record]) -> Result<()> {
        self.records = records.to_vec();
        Ok(())
    }
}
