use crate::models::WorkoutRecord;
use std::collections::HashMap;

/// Ordered, id-indexed collection of the session's workouts.
///
/// Insertion order is chronological order and rendering order.
/// Entries are never removed.
#[derive(Debug, Default)]
pub struct WorkoutStore {
    records: Vec<WorkoutRecord>,
    // id → position in `records`; a repeated id points at the newest entry
    index: HashMap<String, usize>,
}

impl WorkoutStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a record at the end. Id collisions are not checked.
    pub fn append(&mut self, record: WorkoutRecord) {
        self.index.insert(record.id().to_string(), self.records.len());
        self.records.push(record);
    }

    pub fn find(&self, id: &str) -> Option<&WorkoutRecord> {
        self.index.get(id).map(|&pos| &self.records[pos])
    }

    /// Drop the current contents and adopt `records` verbatim.
    pub fn replace_all(&mut self, records: Vec<WorkoutRecord>) {
        self.records.clear();
        self.index.clear();
        for record in records {
            self.append(record);
        }
    }

    /// Read-only view in store order. The iterator is `Clone`, so it can be restarted.
    pub fn all(&self) -> std::slice::Iter<'_, WorkoutRecord> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
