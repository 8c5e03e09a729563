//! Record persistence behind the `RecordStore` seam.

use super::types::Record;
use crate::core::constants::RECORDS_FILE;
use crate::utils::persistence;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Where finished runs are kept between sessions.
///
/// Loading never fails: missing or unreadable data is an empty list.
pub trait RecordStore {
    fn load_records(&self) -> Vec<Record>;
    fn save_records(&mut self, records: &[Record]) -> io::Result<()>;
    fn clear_records(&mut self) -> io::Result<()>;
}

/// Records as pretty-printed JSON in a single file.
#[derive(Debug, Clone)]
pub struct JsonRecordStore {
    path: PathBuf,
}

impl JsonRecordStore {
    /// Store at `~/.serpent/snake-game-records.json`.
    pub fn new() -> io::Result<Self> {
        Ok(Self {
            path: persistence::save_path(RECORDS_FILE)?,
        })
    }

    /// Store at an explicit path.
    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl RecordStore for JsonRecordStore {
    fn load_records(&self) -> Vec<Record> {
        persistence::load_json_or_default(&self.path)
    }

    fn save_records(&mut self, records: &[Record]) -> io::Result<()> {
        persistence::save_json(&self.path, &records)
    }

    fn clear_records(&mut self) -> io::Result<()> {
        match fs::remove_file(&self.path) {
            Err(e) if e.kind() != io::ErrorKind::NotFound => Err(e),
            _ => Ok(()),
        }
    }
}

/// Records kept in memory only.
#[derive(Debug, Clone, Default)]
pub struct MemoryRecordStore {
    records: Vec<Record>,
}

impl MemoryRecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_records(records: Vec<Record>) -> Self {
        Self { records }
    }
}

impl RecordStore for MemoryRecordStore {
    fn load_records(&self) -> Vec<Record> {
        self.records.clone()
    }

    fn save_records(&mut self, records: &[Record]) -> io::Result<()> {
        self.records = records.to_vec();
        Ok(())
    }

    fn clear_records(&mut self) -> io::Result<()> {
        self.records.clear();
        Ok(())
    }
}

impl<S: RecordStore + ?Sized> RecordStore for Box<S> {
    fn load_records(&self) -> Vec<Record> {
        (**self).load_records()
    }

    fn save_records(&mut self, records: &[Record]) -> io::Result<()> {
        (**self).save_records(records)
    }

    fn clear_records(&mut self) -> io::Result<()> {
        (**self).clear_records()
    }
}
