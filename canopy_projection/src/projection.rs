// Copyright 2026 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Several projections from a single walk.

use alloc::vec::Vec;

use canopy_tree::Node;

use crate::backend::Backend;
use crate::backends::Ordered;
use crate::column::Column;
use crate::walk::walk;

bitflags::bitflags! {
    /// Selects which projections [`project`] computes.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct Views: u8 {
        /// First value reached per column, as in [`top_view`][crate::top_view].
        const TOP      = 0b0000_0001;
        /// Last value reached per column, as in [`bottom_view`][crate::bottom_view].
        const BOTTOM   = 0b0000_0010;
        /// Every value per column, as in [`vertical_order`][crate::vertical_order].
        const VERTICAL = 0b0000_0100;
        /// All of the above.
        const ALL = Self::TOP.bits() | Self::BOTTOM.bits() | Self::VERTICAL.bits();
    }
}

impl Default for Views {
    fn default() -> Self {
        Self::ALL
    }
}

/// Results of [`project`].
///
/// Projections that were not requested are left empty.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Projection<T> {
    /// Top view, leftmost column first.
    pub top: Vec<T>,
    /// Bottom view, leftmost column first.
    pub bottom: Vec<T>,
    /// Vertical order, one group per column, leftmost column first.
    pub vertical: Vec<Vec<T>>,
}

impl<T> Default for Projection<T> {
    fn default() -> Self {
        Self {
            top: Vec::new(),
            bottom: Vec::new(),
            vertical: Vec::new(),
        }
    }
}

impl<T> Projection<T> {
    /// Whether every projection is empty.
    ///
    /// This is the case for an empty tree, or when nothing was requested.
    pub fn is_empty(&self) -> bool {
        self.top.is_empty() && self.bottom.is_empty() && self.vertical.is_empty()
    }
}

/// Compute the projections selected by `views` in one level-order walk.
///
/// Each requested projection is identical to what the corresponding single
/// projection function returns for the same tree.
///
/// ```rust
/// use canopy_projection::{Views, project};
/// use canopy_tree::from_level_order;
///
/// let literal: Vec<_> = (1..=7).map(Some).collect();
/// let root = from_level_order(&literal).unwrap();
///
/// let p = project(root.as_ref(), Views::TOP | Views::BOTTOM);
/// assert_eq!(p.top, [4, 2, 1, 3, 7]);
/// assert_eq!(p.bottom, [4, 2, 6, 3, 7]);
/// assert!(p.vertical.is_empty());
/// ```
pub fn project<T: Ord + Clone>(root: Option<&Node<T>>, views: Views) -> Projection<T> {
    let mut top: Ordered<T> = Ordered::new();
    let mut bottom: Ordered<T> = Ordered::new();
    let mut vertical: Ordered<Column<T>> = Ordered::new();

    let mut nodes = 0_usize;
    if !views.is_empty() {
        for visit in walk(root) {
            nodes += 1;
            let offset = visit.offset();
            if views.contains(Views::TOP) {
                top.insert_if_vacant(offset, visit.value().clone());
            }
            if views.contains(Views::BOTTOM) {
                bottom.insert(offset, visit.value().clone());
            }
            if views.contains(Views::VERTICAL) {
                vertical
                    .entry_or_insert_with(offset, Column::new)
                    .push(visit.depth(), visit.value().clone());
            }
        }
    }
    tracing::debug!(views = views.bits(), nodes, "projected");

    Projection {
        top: top.into_sorted_values(),
        bottom: bottom.into_sorted_values(),
        vertical: vertical
            .into_sorted_values()
            .into_iter()
            .map(Column::into_values)
            .collect(),
    }
}
