// Copyright 2026 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The owned binary tree node.

use alloc::boxed::Box;
use alloc::vec::Vec;

/// Which child slot of a parent a node occupies.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Side {
    /// The left child slot.
    Left,
    /// The right child slot.
    Right,
}

/// A node of an owned binary tree.
///
/// Every child is owned exclusively by its parent, so a `Node` always roots a
/// finite, acyclic tree in which no node is reachable by two paths.
///
/// Structural queries ([`Node::node_count`], [`Node::height`]) and dropping are
/// iterative, so degenerate chain-shaped trees do not recurse once per level.
///
/// Deep trees: only counting, height, dropping, and walks are iterative. The
/// derived `Clone`, `PartialEq`, and `Debug` recurse once per level. Because
/// `Node` implements `Drop`, its fields cannot be moved out by destructuring;
/// use [`Option::take`] on `left`/`right` instead.
///
/// ## Example
///
/// ```rust
/// use canopy_tree::Node;
///
/// //     1
/// //    / \
/// //   2   3
/// //    \
/// //     4
/// let root = Node::leaf(1)
///     .with_left(Node::leaf(2).with_right(Node::leaf(4)))
///     .with_right(Node::leaf(3));
///
/// assert_eq!(root.node_count(), 4);
/// assert_eq!(root.height(), 2);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Node<T> {
    /// The value stored at this node.
    pub value: T,
    /// The left subtree, if any.
    pub left: Option<Box<Self>>,
    /// The right subtree, if any.
    pub right: Option<Box<Self>>,
}

impl<T> Node<T> {
    /// Create a node with the given children.
    pub fn new(value: T, left: Option<Self>, right: Option<Self>) -> Self {
        Self {
            value,
            left: left.map(Box::new),
            right: right.map(Box::new),
        }
    }

    /// Create a node without children.
    #[inline]
    pub const fn leaf(value: T) -> Self {
        Self {
            value,
            left: None,
            right: None,
        }
    }

    /// Replace the left subtree, returning the updated node.
    #[must_use]
    pub fn with_left(mut self, child: Self) -> Self {
        self.left = Some(Box::new(child));
        self
    }

    /// Replace the right subtree, returning the updated node.
    #[must_use]
    pub fn with_right(mut self, child: Self) -> Self {
        self.right = Some(Box::new(child));
        self
    }

    /// Borrow the child on the given side.
    #[inline]
    pub fn child(&self, side: Side) -> Option<&Self> {
        match side {
            Side::Left => self.left.as_deref(),
            Side::Right => self.right.as_deref(),
        }
    }

    /// Whether this node has no children.
    #[inline]
    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }

    /// Number of nodes in the tree rooted here, including this one.
    pub fn node_count(&self) -> usize {
        let mut count = 0;
        let mut stack: Vec<&Self> = Vec::new();
        stack.push(self);
        while let Some(node) = stack.pop() {
            count += 1;
            stack.extend(node.left.as_deref());
            stack.extend(node.right.as_deref());
        }
        count
    }

    /// Number of edges on the longest path from this node down to a leaf.
    ///
    /// A single node has height `0`.
    pub fn height(&self) -> usize {
        let mut height = 0;
        let mut stack: Vec<(&Self, usize)> = Vec::new();
        stack.push((self, 0));
        while let Some((node, depth)) = stack.pop() {
            height = height.max(depth);
            if let Some(left) = node.left.as_deref() {
                stack.push((left, depth + 1));
            }
            if let Some(right) = node.right.as_deref() {
                stack.push((right, depth + 1));
            }
        }
        height
    }
}

impl<T> Drop for Node<T> {
    fn drop(&mut self) {
        // Detach subtrees onto a heap stack so that each node is dropped with
        // no children left, keeping drop depth constant.
        let mut pending: Vec<Box<Self>> = Vec::new();
        pending.extend(self.left.take());
        pending.extend(self.right.take());
        while let Some(mut node) = pending.pop() {
            pending.extend(node.left.take());
            pending.extend(node.right.take());
        }
    }
}
