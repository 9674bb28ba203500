// Copyright 2026 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Ordered-map backend.

use alloc::collections::BTreeMap;
use alloc::collections::btree_map::Entry;
use alloc::vec::Vec;

use crate::backend::Backend;

/// Column index backed by a `BTreeMap`, kept in ascending offset order.
#[derive(Clone, Debug)]
pub struct Ordered<V> {
    columns: BTreeMap<isize, V>,
}

impl<V> Default for Ordered<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> Ordered<V> {
    /// Create an empty index.
    pub const fn new() -> Self {
        Self {
            columns: BTreeMap::new(),
        }
    }

    /// Smallest and largest occupied offsets, if any.
    pub fn span(&self) -> Option<(isize, isize)> {
        let (&lo, _) = self.columns.first_key_value()?;
        let (&hi, _) = self.columns.last_key_value()?;
        Some((lo, hi))
    }
}

impl<V> Backend<V> for Ordered<V> {
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
        self.columns.into_iter().collect()
    }

    fn insert_if_vacant(&mut self, offset: isize, value: V) -> bool {
        match self.columns.entry(offset) {
            Entry::Vacant(slot) => {
                slot.insert(value);
                true
            }
            Entry::Occupied(_) => false,
        }
    }
}
