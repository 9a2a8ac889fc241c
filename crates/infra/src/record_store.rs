//! In-memory, insertion-ordered record storage.

use stocklog_core::Entity;

/// Ordered collection of records owned by a single logger.
///
/// Appending never checks for duplicate ids; `contains_id` lets callers detect
/// them if they care.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordStore<T> {
    records: Vec<T>,
}

impl<T> RecordStore<T> {
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
        }
    }
}

impl<T> Default for RecordStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Entity> RecordStore<T> {
    /// Append a record at the end of the sequence.
    pub fn add(&mut self, record: T) {
        self.records.push(record);
    }

    /// Read view over all records in insertion order.
    ///
    /// The store cannot be mutated while the returned slice is borrowed.
    pub fn get_all(&self) -> &[T] {
        &self.records
    }

    /// Independent copy of the current contents.
    pub fn snapshot(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.records.clone()
    }

    /// Discard all current records and install `records` in their place.
    pub fn replace(&mut self, records: Vec<T>) {
        self.records = records;
    }

    pub fn contains_id(&self, id: &T::Id) -> bool {
        self.records.iter().any(|r| r.id() == id)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> core::slice::Iter<'_, T> {
        self.records.iter()
    }
}

impl<'a, T> IntoIterator for &'a RecordStore<T> {
    type Item = &'a T;
    type IntoIter = core::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
