use std::collections::HashMap;

use crate::adapters::table_key;
use crate::domain::model::Coordinates;
use crate::domain::ports::LocationProvider;

/// An in-memory lookup table, mainly for embedding and tests.
///
/// Keys are canonicalized on both insert and query, so `"ec1y 8pq"` and
/// `"EC1Y8PQ"` address the same entry.
#[derive(Debug, Clone, Default)]
pub struct MemoryTable {
    entries: HashMap<String, Coordinates>,
}

impl MemoryTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: &str, coordinates: Coordinates) {
        self.entries.insert(table_key(key), coordinates);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<const N: usize> From<[(&str, Coordinates); N]> for MemoryTable {
    fn from(entries: [(&str, Coordinates); N]) -> Self {
        let mut table = Self::new();
        for (key, coordinates) in entries {
            table.insert(key, coordinates);
        }
        table
    }
}

impl LocationProvider for MemoryTable {
    fn coordinates(&self, key: &str) -> Option<Coordinates> {
        self.entries.get(&table_key(key)).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keys_are_canonicalized() {
        let mut table = MemoryTable::new();
        table.insert("ec1y8pq", Coordinates::new(1.0, 2.0));
        assert_eq!(
            table.coordinates("EC1Y  8PQ"),
            Some(Coordinates::new(1.0, 2.0))
        );
        assert_eq!(table.coordinates("EC1Y"), None);
    }

    #[test]
    fn test_from_array() {
        let table = MemoryTable::from([
            ("EC1Y", Coordinates::new(1.0, 2.0)),
            ("SW1A", Coordinates::new(3.0, 4.0)),
        ]);
        assert_eq!(table.len(), 2);
        assert_eq!(table.coordinates("sw1a"), Some(Coordinates::new(3.0, 4.0)));
    }
}
