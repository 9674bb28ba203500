// Copyright 2026 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Canopy Projection: top view, bottom view, and vertical order of binary trees.
//!
//! Canopy Projection looks at a binary tree as if it were drawn on a grid and projects it
//! onto the horizontal axis.
//!
//! - Every node gets a [`Coordinate`]: the root is at offset `0`, depth `0`; a left child is
//!   one column left and one level down, a right child one column right and one level down.
//! - A [`Walker`] visits the tree in level order (left before right) and pairs each node with
//!   its coordinate. Coordinates are never stored on the tree.
//! - The projections fold those visits into a column index keyed by offset:
//!   - [`top_view`]: the first node reached in each column,
//!   - [`bottom_view`]: the last node reached in each column,
//!   - [`vertical_order`]: every node in each column, by depth, ties broken by value.
//!
//! All results are ordered from the leftmost column to the rightmost.
//! Trees come from [`canopy_tree`]; an absent root is the empty tree and projects to nothing.
//!
//! # Example
//!
//! ```rust
//! use canopy_projection::{bottom_view, top_view, vertical_order};
//! use canopy_tree::from_level_order;
//!
//! //        1
//! //      /   \
//! //     2     3
//! //    / \   / \
//! //   4   5 6   7
//! let literal: Vec<_> = (1..=7).map(Some).collect();
//! let root = from_level_order(&literal).unwrap();
//!
//! assert_eq!(top_view(root.as_ref()), [4, 2, 1, 3, 7]);
//! assert_eq!(bottom_view(root.as_ref()), [4, 2, 6, 3, 7]);
//! assert_eq!(
//!     vertical_order(root.as_ref()),
//!     [vec![4], vec![2], vec![1, 5, 6], vec![3], vec![7]]
//! );
//! ```
//!
//! Use [`project`] to get several projections out of a single walk:
//!
//! ```rust
//! use canopy_projection::{Views, project};
//! use canopy_tree::Node;
//!
//! let root = Node::leaf(0)
//!     .with_left(Node::leaf(-1).with_left(Node::leaf(-2)))
//!     .with_right(Node::leaf(1).with_right(Node::leaf(2)));
//!
//! let p = project(Some(&root), Views::ALL);
//! assert_eq!(p.top, [-2, -1, 0, 1, 2]);
//! assert_eq!(p.top, p.bottom);
//! ```
//!
//! With the `backend_hash` feature enabled (default), the column index can be swapped for a
//! hash map that is sorted once at the end:
//!
//! ```rust
//! # #[cfg(feature = "backend_hash")]
//! # {
//! use canopy_projection::{backends::Hashed, vertical_order, vertical_order_with};
//! use canopy_tree::Node;
//!
//! let root = Node::leaf(1).with_left(Node::leaf(2)).with_right(Node::leaf(3));
//! assert_eq!(
//!     vertical_order_with(Some(&root), Hashed::new()),
//!     vertical_order(Some(&root))
//! );
//! # }
//! ```
//!
//! ## Choosing a backend
//!
//! - [`backends::Ordered`] (default): `BTreeMap` keyed by offset. Columns are always sorted.
//! - [`backends::Hashed`] *(feature `backend_hash`)*: `hashbrown` map keyed by offset, sorted
//!   once when results are read out. Cheaper per node for very wide trees.
//!
//! Any type implementing [`Backend`] can be passed to the `*_with` functions.
//!
//! ## Features
//!
//! - `std` *(default)*: enables `std` support in dependencies.
//! - `backend_hash` *(default)*: enables the [`backends::Hashed`] backend and the `hashbrown`
//!   dependency.
//!
//! ## Logging
//!
//! Walks emit a `tracing` event per visited node at `TRACE` level, and each projection emits a
//! summary at `DEBUG` level. No subscriber is installed by this crate.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod backend;
pub mod backends;
mod column;
mod coord;
mod projection;
mod view;
mod walk;

pub use backend::Backend;
pub use column::Column;
pub use coord::Coordinate;
pub use projection::{Projection, Views, project};
pub use view::{
    bottom_view, bottom_view_with, top_view, top_view_with, vertical_order, vertical_order_with,
};
pub use walk::{Visit, Walker, walk};
