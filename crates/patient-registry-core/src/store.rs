//! JSON-file record store.
//!
//! Owns the authoritative in-memory record list and persists the whole list
//! to a single JSON document on every mutation. There is no batching: the
//! last mutation is always on disk, at the cost of write amplification the
//! single-clinic dataset size makes irrelevant.

use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, error, warn};

use crate::error::{StoreError, StoreResult};
use crate::models::PatientRecord;

/// Default persistence file, relative to the working directory.
pub const DATA_FILE: &str = "patients_data.json";

/// Record store backed by whole-file JSON persistence.
///
/// All mutators take `&mut self`; the record list is exclusively owned and
/// never shared, so there is no locking. Mutators persist synchronously. A
/// failed persist is logged and the in-memory list stays authoritative for
/// the rest of the session.
pub struct PatientStore {
    path: PathBuf,
    records: Vec<PatientRecord>,
}

impl PatientStore {
    /// Open the store at the fixed default path, hydrating from disk.
    pub fn open_default() -> Self {
        Self::open(DATA_FILE)
    }

    /// Open a store at an explicit path, hydrating from disk.
    ///
    /// This is the sole place state is hydrated. A missing file, an
    /// unreadable file, or malformed JSON all yield an empty list with a
    /// logged warning; hydration never fails.
    pub fn open<P: AsRef<Path>>(path: P) -> Self {
        let path = path.as_ref().to_path_buf();
        let records = load_records(&path);
        Self { path, records }
    }

    /// The full ordered record list.
    pub fn records(&self) -> &[PatientRecord] {
        &self.records
    }

    /// Record at `index`, if in bounds.
    pub fn get(&self, index: usize) -> Option<&PatientRecord> {
        self.records.get(index)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Serialize the full ordered list to the persistence path.
    ///
    /// Writes to a sibling temp file and renames it over the target, so a
    /// later load never observes a partial write.
    pub fn save(&self) -> StoreResult<()> {
        let json = serde_json::to_string_pretty(&self.records)?;
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, json)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }

    /// Append a record, persist, and return its position.
    pub fn add(&mut self, record: PatientRecord) -> usize {
        self.records.push(record);
        self.persist();
        self.records.len() - 1
    }

    /// Replace the record at `index` and persist.
    pub fn update(&mut self, index: usize, record: PatientRecord) -> StoreResult<()> {
        let len = self.records.len();
        match self.records.get_mut(index) {
            Some(slot) => {
                *slot = record;
                self.persist();
                Ok(())
            }
            None => {
                warn!("update of out-of-bounds index {index} (len {len}) ignored");
                Err(StoreError::IndexOutOfBounds { index, len })
            }
        }
    }

    /// Remove the record at `index`, shifting later records down, and persist.
    pub fn delete(&mut self, index: usize) -> StoreResult<()> {
        let len = self.records.len();
        if index >= len {
            warn!("delete of out-of-bounds index {index} (len {len}) ignored");
            return Err(StoreError::IndexOutOfBounds { index, len });
        }
        self.records.remove(index);
        self.persist();
        Ok(())
    }

    /// Persist after a mutation. Failure is logged, never propagated: the
    /// in-memory list remains authoritative for the session.
    fn persist(&self) {
        if let Err(e) = self.save() {
            error!("failed to persist {}: {e}", self.path.display());
        }
    }
}

fn load_records(path: &Path) -> Vec<PatientRecord> {
    let raw = match fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            debug!("{} not found, starting with an empty list", path.display());
            return Vec::new();
        }
        Err(e) => {
            warn!(
                "could not read {}, starting with an empty list: {e}",
                path.display()
            );
            return Vec::new();
        }
    };

    match serde_json::from_str(&raw) {
        Ok(records) => records,
        Err(e) => {
            warn!(
                "could not parse {}, starting with an empty list: {e}",
                path.display()
            );
            Vec::new()
        }
    }
}
