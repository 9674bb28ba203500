// Copyright 2026 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Depth-bucketed values of a single vertical column.

use alloc::collections::BTreeMap;
use alloc::vec::Vec;

use smallvec::SmallVec;

/// Values sharing one horizontal offset, grouped by depth.
///
/// Buckets are filled in visit order and sorted only when the column is
/// flushed with [`Column::into_values`]: depths ascending, and values ascending
/// within a depth. The sort is stable, so values that compare equal keep the
/// order in which they were visited.
#[derive(Clone, Debug)]
pub struct Column<T> {
    buckets: BTreeMap<usize, SmallVec<[T; 4]>>,
    len: usize,
}

impl<T> Default for Column<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Column<T> {
    /// Create an empty column.
    pub const fn new() -> Self {
        Self {
            buckets: BTreeMap::new(),
            len: 0,
        }
    }

    /// Add a value found at `depth`.
    pub fn push(&mut self, depth: usize, value: T) {
        self.buckets.entry(depth).or_default().push(value);
        self.len += 1;
    }

    /// Number of values in the column.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the column holds no values.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of distinct depths in the column.
    #[inline]
    pub fn depths(&self) -> usize {
        self.buckets.len()
    }
}

impl<T: Ord> Column<T> {
    /// Flush the column: depths ascending, values ascending within a depth.
    pub fn into_values(self) -> Vec<T> {
        let mut out = Vec::with_capacity(self.len);
        for (_, mut bucket) in self.buckets {
            bucket.sort();
            out.extend(bucket);
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::Column;

    #[test]
    fn depth_order_then_value_order() {
        let mut col = Column::new();
        col.push(2, 5);
        col.push(0, 1);
        col.push(2, 4);
        col.push(1, 9);
        assert_eq!(col.len(), 4);
        assert_eq!(col.depths(), 3);
        assert_eq!(col.into_values(), [1, 9, 4, 5]);
    }

    #[test]
    fn shallower_values_precede_smaller_deeper_values() {
        let mut col = Column::new();
        col.push(3, -10);
        col.push(1, 10);
        assert_eq!(col.into_values(), [10, -10]);
    }

    #[test]
    fn duplicates_are_kept() {
        let mut col = Column::new();
        for _ in 0..6 {
            col.push(1, 7);
        }
        col.push(1, 3);
        assert_eq!(col.into_values(), [3, 7, 7, 7, 7, 7, 7]);
    }

    #[test]
    fn empty_column_flushes_to_nothing() {
        let col: Column<i32> = Column::default();
        assert!(col.is_empty());
        assert!(col.into_values().is_empty());
    }
}
