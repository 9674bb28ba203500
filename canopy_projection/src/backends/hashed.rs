// Copyright 2026 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Hash-map backend.

use alloc::vec::Vec;
use core::fmt::Debug;

use hashbrown::HashMap;

use crate::backend::Backend;

/// Column index backed by a `hashbrown` map.
///
/// Columns are kept unordered and sorted by offset once, when
/// [`into_sorted`][Backend::into_sorted] is called.
#[derive(Clone)]
pub struct Hashed<V> {
    columns: HashMap<isize, V>,
}

impl<V> Debug for Hashed<V> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Hashed")
            .field("columns", &self.columns.len())
            .field("capacity", &self.columns.capacity())
            .finish_non_exhaustive()
    }
}

impl<V> Default for Hashed<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> Hashed<V> {
    /// Create an empty index.
    pub fn new() -> Self {
        Self {
            columns: HashMap::new(),
        }
    }

    /// Create an empty index with room for `columns` distinct offsets.
    pub fn with_capacity(columns: usize) -> Self {
        Self {
            columns: HashMap::with_capacity(columns),
        }
    }
}

impl<V> Backend<V> for Hashed<V> {
    fn entry_or_insert_with<F: FnOnce() -> V>(&mut self, offset: isize, f: F) -> &mut V {
        self.columns.entry(offset).or_insert_with(f)
    }

    fn insert(&mut self, offset: isize, value: V) {
        self.columns.insert(offset, value);
    }

    fn contains(&self, offset: isize) -> bool {
        self.columns.contains_key(&offset)
    }

    fn len(&self) -> usize {
        self.columns.len()
    }

    fn clear(&mut self) {
        self.columns.clear();
    }

    fn into_sorted(self) -> Vec<(isize, V)> {
        let mut out: Vec<(isize, V)> = self.columns.into_iter().collect();
        // Offsets are unique keys, so an unstable sort is deterministic.
        out.sort_unstable_by_key(|(offset, _)| *offset);
        out
    }

    fn insert_if_vacant(&mut self, offset: isize, value: V) -> bool {
        match self.columns.entry(offset) {
            hashbrown::hash_map::Entry::Vacant(slot) => {
                slot.insert(value);
                true
            }
            hashbrown::hash_map::Entry::Occupied(_) => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Hashed;
    use crate::Backend;

    #[test]
    fn sorts_on_read_out() {
        let mut idx = Hashed::with_capacity(4);
        for offset in [7, -3, 0, 2] {
            idx.insert(offset, offset * 10);
        }
        assert_eq!(idx.len(), 4);
        assert_eq!(idx.into_sorted_values(), [-30, 0, 20, 70]);
    }

    #[test]
    fn vacant_insert_keeps_first_value() {
        let mut idx = Hashed::new();
        assert!(idx.insert_if_vacant(-1, "first"));
        assert!(!idx.insert_if_vacant(-1, "second"));
        assert!(idx.contains(-1));
        assert!(!idx.contains(1));
        assert_eq!(idx.into_sorted(), [(-1, "first")]);
    }

    #[test]
    fn clear_empties_the_index() {
        let mut idx = Hashed::new();
        *idx.entry_or_insert_with(0, || 0_u8) += 1;
        idx.clear();
        assert!(idx.is_empty());
    }
}
