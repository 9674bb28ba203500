// Copyright 2026 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Level-order literals with gap markers.
//!
//! A literal lists the root first and then, for every present node in level
//! order, its left and right child. `None` marks an absent child; absent
//! children never get child slots of their own. Trailing gaps may be omitted.

use alloc::boxed::Box;
use alloc::collections::VecDeque;
use alloc::vec::Vec;

use crate::error::BuildError;
use crate::node::Node;

#[derive(Clone, Copy, Default)]
struct Links {
    left: Option<usize>,
    right: Option<usize>,
}

/// Build a tree from a level-order literal.
///
/// Returns `Ok(None)` for an empty literal or one whose root is a gap.
///
/// ## Example
///
/// ```rust
/// use canopy_tree::{Node, from_level_order};
///
/// let tree = from_level_order(&[Some(1), Some(2), Some(3), None, Some(4)])
///     .unwrap()
///     .unwrap();
/// let expected = Node::leaf(1)
///     .with_left(Node::leaf(2).with_right(Node::leaf(4)))
///     .with_right(Node::leaf(3));
/// assert_eq!(tree, expected);
/// ```
///
/// # Errors
///
/// Returns [`BuildError::Detached`] if a present value has no parent slot to
/// occupy.
pub fn from_level_order<T: Clone>(entries: &[Option<T>]) -> Result<Option<Node<T>>, BuildError> {
    let links = link_slots(entries)?;
    if links.is_empty() {
        return Ok(None);
    }

    // Children always come after their parent in a level-order literal, so
    // assembling back-to-front sees every subtree complete before its parent.
    let mut slots: Vec<Option<Node<T>>> = (0..links.len()).map(|_| None).collect();
    for (i, link) in links.iter().enumerate().rev() {
        let Some(value) = &entries[i] else {
            continue;
        };
        let mut node = Node::leaf(value.clone());
        if let Some(j) = link.left {
            node.left = slots[j].take().map(Box::new);
        }
        if let Some(j) = link.right {
            node.right = slots[j].take().map(Box::new);
        }
        slots[i] = Some(node);
    }
    Ok(slots[0].take())
}

/// Serialize a tree into its canonical level-order literal.
///
/// Trailing gaps are trimmed, so an absent root yields an empty literal.
///
/// ```rust
/// use canopy_tree::{Node, to_level_order};
///
/// let root = Node::leaf(1).with_right(Node::leaf(3));
/// assert_eq!(to_level_order(Some(&root)), vec![Some(1), None, Some(3)]);
/// ```
pub fn to_level_order<T: Clone>(root: Option<&Node<T>>) -> Vec<Option<T>> {
    let mut out = Vec::new();
    let Some(root) = root else {
        return out;
    };
    out.push(Some(root.value.clone()));
    let mut queue = VecDeque::from([root]);
    while let Some(node) = queue.pop_front() {
        for child in [node.left.as_deref(), node.right.as_deref()] {
            match child {
                Some(child) => {
                    out.push(Some(child.value.clone()));
                    queue.push_back(child);
                }
                None => out.push(None),
            }
        }
    }
    while out.last().is_some_and(Option::is_none) {
        out.pop();
    }
    out
}

/// Assign every present entry to a parent slot.
///
/// The returned vector is empty when the literal describes an empty tree;
/// otherwise it is as long as `entries` up to the last consumed slot.
fn link_slots<T>(entries: &[Option<T>]) -> Result<Vec<Links>, BuildError> {
    let root_present = entries.first().is_some_and(Option::is_some);
    if !root_present {
        return match entries.iter().position(Option::is_some) {
            Some(index) => Err(BuildError::Detached { index }),
            None => Ok(Vec::new()),
        };
    }

    let mut links = Vec::with_capacity(entries.len());
    links.push(Links::default());
    let mut parents = VecDeque::from([0_usize]);
    let mut next = 1;
    while next < entries.len() {
        let Some(parent) = parents.pop_front() else {
            break;
        };
        for is_left in [true, false] {
            if next >= entries.len() {
                break;
            }
            links.push(Links::default());
            if entries[next].is_some() {
                if is_left {
                    links[parent].left = Some(next);
                } else {
                    links[parent].right = Some(next);
                }
                parents.push_back(next);
            }
            next += 1;
        }
    }

    if let Some(offset) = entries[next..].iter().position(Option::is_some) {
        return Err(BuildError::Detached {
            index: next + offset,
        });
    }
    Ok(links)
}
