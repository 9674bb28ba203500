// Copyright 2026 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Breadth-first walk that pairs every node with its [`Coordinate`].

use alloc::collections::VecDeque;
use core::iter::FusedIterator;

use canopy_tree::{Node, Side};

use crate::coord::Coordinate;

/// One node reached by a [`Walker`], together with its coordinate.
#[derive(Debug)]
pub struct Visit<'a, T> {
    /// The visited node.
    pub node: &'a Node<T>,
    /// The node's coordinate relative to the walk origin.
    pub coord: Coordinate,
}

// Manual impls: `Visit` only holds a reference, so it is `Copy` for every `T`.
impl<T> Clone for Visit<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Visit<'_, T> {}

impl<'a, T> Visit<'a, T> {
    /// The visited node's value.
    #[inline]
    pub fn value(&self) -> &'a T {
        &self.node.value
    }

    /// The visited node's horizontal offset.
    #[inline]
    pub fn offset(&self) -> isize {
        self.coord.offset
    }

    /// The visited node's depth.
    #[inline]
    pub fn depth(&self) -> usize {
        self.coord.depth
    }
}

/// Level-order iterator over a borrowed tree.
///
/// Nodes are yielded root first, then level by level, left to right. Each node
/// is yielded exactly once. The left child of a node is always queued before
/// its right child; projections rely on this to decide which node is seen
/// first at a shared column.
///
/// A walker holds one pending entry per node on the frontier, so its memory is
/// bounded by the width of the tree. Walks are not restartable; start a new
/// one with [`walk`] or [`Walker::with_origin`].
///
/// ## Example
///
/// ```rust
/// use canopy_projection::{Coordinate, walk};
/// use canopy_tree::Node;
///
/// let root = Node::leaf(1)
///     .with_left(Node::leaf(2))
///     .with_right(Node::leaf(3));
///
/// let visits: Vec<_> = walk(Some(&root))
///     .map(|v| (*v.value(), v.coord))
///     .collect();
/// assert_eq!(
///     visits,
///     [
///         (1, Coordinate::new(0, 0)),
///         (2, Coordinate::new(-1, 1)),
///         (3, Coordinate::new(1, 1)),
///     ]
/// );
/// ```
pub struct Walker<'a, T> {
    queue: VecDeque<(&'a Node<T>, Coordinate)>,
}

impl<T> core::fmt::Debug for Walker<'_, T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Walker")
            .field("pending", &self.queue.len())
            .field("next", &self.queue.front().map(|(_, c)| *c))
            .finish_non_exhaustive()
    }
}

impl<'a, T> Walker<'a, T> {
    /// Start a walk at `root`, placing it at [`Coordinate::ORIGIN`].
    pub fn new(root: Option<&'a Node<T>>) -> Self {
        Self::with_origin(root, Coordinate::ORIGIN)
    }

    /// Start a walk at `root`, placing it at `origin`.
    ///
    /// This is useful to project a subtree in the frame of an enclosing tree.
    pub fn with_origin(root: Option<&'a Node<T>>, origin: Coordinate) -> Self {
        let mut queue = VecDeque::new();
        if let Some(root) = root {
            queue.push_back((root, origin));
        }
        Self { queue }
    }

    /// Number of nodes queued but not yet yielded.
    #[inline]
    pub fn pending(&self) -> usize {
        self.queue.len()
    }
}

impl<'a, T> Iterator for Walker<'a, T> {
    type Item = Visit<'a, T>;

    fn next(&mut self) -> Option<Self::Item> {
        let (node, coord) = self.queue.pop_front()?;
        for side in [Side::Left, Side::Right] {
            if let Some(child) = node.child(side) {
                self.queue.push_back((child, coord.child(side)));
            }
        }
        tracing::trace!(offset = coord.offset, depth = coord.depth, "visit");
        Some(Visit { node, coord })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.queue.len(), None)
    }
}

impl<T> FusedIterator for Walker<'_, T> {}

/// Walk `root` in level order from [`Coordinate::ORIGIN`].
///
/// An absent root yields nothing.
#[inline]
pub fn walk<T>(root: Option<&Node<T>>) -> Walker<'_, T> {
    Walker::new(root)
}
