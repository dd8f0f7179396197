//! Ordered table with an integer id sequence, guarded by a mutex.

use std::collections::BTreeMap;
use std::sync::Mutex;

use crate::error::StorageError;

/// Monotonic id generator. The first id handed out is 1.
#[derive(Debug)]
pub(crate) struct Sequence {
    name: &'static str,
    last: i32,
}

impl Sequence {
    pub(crate) fn new(name: &'static str) -> Self {
        Self { name, last: 0 }
    }

    pub(crate) fn next(&mut self) -> Result<i32, StorageError> {
        self.last = self
            .last
            .checked_add(1)
            .ok_or(StorageError::SequenceExhausted(self.name))?;
        Ok(self.last)
    }

    /// Hand out `count` consecutive ids, returning the first one.
    pub(crate) fn reserve(&mut self, count: usize) -> Result<i32, StorageError> {
        let first = self.last.saturating_add(1);
        let count = i32::try_from(count).map_err(|_| StorageError::SequenceExhausted(self.name))?;
        self.last = self
            .last
            .checked_add(count)
            .ok_or(StorageError::SequenceExhausted(self.name))?;
        Ok(first)
    }

    /// Move past an id assigned outside the sequence.
    pub(crate) fn observe(&mut self, id: i32) {
        self.last = self.last.max(id);
    }
}

/// Rows keyed and ordered by id.
#[derive(Debug)]
pub(crate) struct Rows<K, V> {
    pub(crate) rows: BTreeMap<K, V>,
    pub(crate) ids: Sequence,
}

impl<K, V> Rows<K, V> {
    fn new(name: &'static str) -> Self {
        Self {
            rows: BTreeMap::new(),
            ids: Sequence::new(name),
        }
    }
}

/// A [`Rows`] set behind a mutex, with poisoning reported as [`StorageError`].
#[derive(Debug)]
pub(crate) struct Table<K, V> {
    name: &'static str,
    inner: Mutex<Rows<K, V>>,
}

impl<K, V> Table<K, V> {
    pub(crate) fn new(name: &'static str) -> Self {
        Self {
            name,
            inner: Mutex::new(Rows::new(name)),
        }
    }

    /// Run `f` with exclusive access to the rows.
    pub(crate) fn with<T>(
        &self,
        f: impl FnOnce(&mut Rows<K, V>) -> Result<T, StorageError>,
    ) -> Result<T, StorageError> {
        let mut rows = self
            .inner
            .lock()
            .map_err(|_| StorageError::Poisoned(self.name))?;
        f(&mut rows)
    }
}
