// Copyright 2026 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Horizontal offset and depth of a node relative to the walk origin.

use canopy_tree::Side;

/// Position of a node in the projection plane.
///
/// Coordinates are derived while walking and never stored on the tree. The
/// root sits at [`Coordinate::ORIGIN`]; each step to a left child moves one
/// column left and each step to a right child one column right, and both go
/// one level deeper.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coordinate {
    /// Horizontal offset (column). Negative is left of the origin.
    pub offset: isize,
    /// Number of edges from the origin node.
    pub depth: usize,
}

impl Coordinate {
    /// Coordinate of a walk's root: offset `0`, depth `0`.
    pub const ORIGIN: Self = Self::new(0, 0);

    /// Create a coordinate.
    #[inline(always)]
    pub const fn new(offset: isize, depth: usize) -> Self {
        Self { offset, depth }
    }

    /// Coordinate of the child on `side` of a node at `self`.
    #[inline]
    pub const fn child(self, side: Side) -> Self {
        let step = match side {
            Side::Left => -1,
            Side::Right => 1,
        };
        Self {
            offset: self.offset + step,
            depth: self.depth + 1,
        }
    }

    /// Coordinate of the left child of a node at `self`.
    #[inline]
    pub const fn left(self) -> Self {
        self.child(Side::Left)
    }

    /// Coordinate of the right child of a node at `self`.
    #[inline]
    pub const fn right(self) -> Self {
        self.child(Side::Right)
    }
}
