use std::cell::Cell;
use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::fmt::Debug;
use std::hash::Hash;

/// A record that can be looked up by a numeric id.
pub trait Keyed {
    type Key: Copy + Eq + Hash + Debug;

    fn key(&self) -> Self::Key;
}

/// Records in file order, addressable by key.
///
/// The most recent successful lookup is remembered, so asking for the same
/// key again is answered without touching the map. When several records
/// share a key, the first one in file order wins.
#[derive(Debug)]
pub struct Index<T: Keyed> {
    records: Vec<T>,
    positions: HashMap<T::Key, usize>,
    last: Cell<Option<(T::Key, usize)>>,
}

impl<T: Keyed> Index<T> {
    pub fn new(records: Vec<T>) -> Self {
        let mut positions = HashMap::with_capacity(records.len());
        for (position, record) in records.iter().enumerate() {
            if let Entry::Vacant(entry) = positions.entry(record.key()) {
                entry.insert(position);
            }
        }

        Self {
            records,
            positions,
            last: Cell::new(None),
        }
    }

    pub fn get(&self, key: T::Key) -> Option<&T> {
        if let Some((last_key, position)) = self.last.get() {
            if last_key == key {
                return Some(&self.records[position]);
            }
        }

        let position = *self.positions.get(&key)?;
        self.last.set(Some((key, position)));
        Some(&self.records[position])
    }

    /// Key of the most recent successful lookup.
    pub fn cached_key(&self) -> Option<T::Key> {
        self.last.get().map(|(key, _)| key)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.records.iter()
    }
}

impl<T: Keyed> Default for Index<T> {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl<'a, T: Keyed> IntoIterator for &'a Index<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
