use super::RecordStore;
use crate::error::Result;
use crate::model::Record;
use std::fs;
use std::path::{Path, PathBuf};

pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl RecordStore for FileStore {
    fn load(&self) -> Result<Vec<Record>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }
        let content = fs::read_to_string(&self.path)?;
        if content.trim().is_empty() {
            return Ok(Vec::new());
        }
        let records: Vec<Record> = serde_json::from_str(&content)?;
        Ok(records)
    }

    fn save(&mut self, records: &[Record]) -> Result<()> {
        let content = serde_json::to_string(records)?;
        fs::write(&self.path, content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RosterError;

    #[test]
    fn missing_file_loads_as_empty_collection() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path().join("absent.json"));
        assert_eq!(store.load().unwrap(), Vec::new());
    }

    #[test]
    fn empty_file_loads_as_empty_collection() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("empty.json");
        fs::write(&path, "").unwrap();
        let store = FileStore::new(path);
        assert_eq!(store.load().unwrap(), Vec::new());
    }

    #[test]
    fn save_then_load_preserves_records_and_order() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = FileStore::new(dir.path().join("records.json"));
        let records = vec![
            Record::new("2", "b@c.com", 40),
            Record::new("1", "a@b.com", 30),
        ];
        store.save(&records).unwrap();
        assert_eq!(store.load().unwrap(), records);
    }

    #[test]
    fn save_rewrites_the_whole_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("records.json");
        let mut store = FileStore::new(&path);
        store.save(&[Record::new("1", "a@b.com", 30)]).unwrap();
        store.save(&[]).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "[]");
    }

    #[test]
    fn corrupt_file_is_an_explicit_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.json");
        fs::write(&path, "not an array").unwrap();
        let store = FileStore::new(path);
        let err = store.load().unwrap_err();
        assert!(matches!(err, RosterError::Serialization(_)));
    }
}
