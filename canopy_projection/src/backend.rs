// Copyright 2026 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Backend trait for the column index that projections accumulate into.

use alloc::vec::Vec;

/// Offset-keyed store used by the projections.
///
/// A backend maps each horizontal offset (column) seen during a walk to one
/// value of type `V`: a single node value for top and bottom views, or a
/// [`Column`][crate::Column] for vertical order. Backends only have to yield
/// their columns in ascending offset order once, from
/// [`into_sorted`][Backend::into_sorted]; they are free to keep them unordered
/// while the walk is running.
pub trait Backend<V> {
    /// Return the value stored at `offset`, inserting `f()` first if the
    /// column is vacant.
    fn entry_or_insert_with<F: FnOnce() -> V>(&mut self, offset: isize, f: F) -> &mut V;

    /// Store `value` at `offset`, replacing any previous value.
    fn insert(&mut self, offset: isize, value: V);

    /// Whether a value is stored at `offset`.
    fn contains(&self, offset: isize) -> bool;

    /// Number of occupied columns.
    fn len(&self) -> usize;

    /// Remove every column.
    fn clear(&mut self);

    /// Consume the backend and return its columns in ascending offset order.
    fn into_sorted(self) -> Vec<(isize, V)>
    where
        Self: Sized;

    /// Whether no column is occupied.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Store `value` at `offset` only if the column is vacant.
    ///
    /// Returns `true` if the value was stored.
    ///
    /// The default implementation checks [`contains`][Backend::contains]
    /// before calling [`insert`][Backend::insert].
    fn insert_if_vacant(&mut self, offset: isize, value: V) -> bool {
        if self.contains(offset) {
            return false;
        }
        self.insert(offset, value);
        true
    }

    /// Consume the backend and return its values in ascending offset order.
    fn into_sorted_values(self) -> Vec<V>
    where
        Self: Sized,
    {
        self.into_sorted().into_iter().map(|(_, v)| v).collect()
    }
}
