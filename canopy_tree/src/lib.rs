// Copyright 2026 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Canopy Tree: owned binary trees and level-order literals.
//!
//! Canopy Tree is the structural layer shared by the Canopy crates.
//!
//! - [`Node`] is an owned binary tree node, generic over its value type. Each child is owned
//!   by exactly one parent, so trees are finite and acyclic by construction.
//! - [`from_level_order`] builds a tree from the familiar level-order literal with gap markers
//!   (`[1, 2, 3, null, 4]` is written `[Some(1), Some(2), Some(3), None, Some(4)]`), and
//!   [`to_level_order`] writes one back out.
//!
//! Trees are plain values: nothing here stores traversal state on the nodes. Higher layers
//! (like `canopy_projection`) pair nodes with derived data while they walk.
//!
//! # Example
//!
//! ```rust
//! use canopy_tree::{from_level_order, to_level_order};
//!
//! let literal = [Some(1), Some(2), Some(3), None, Some(4)];
//! let root = from_level_order(&literal).unwrap().unwrap();
//! assert_eq!(root.node_count(), 4);
//! assert_eq!(to_level_order(Some(&root)), literal);
//! ```
//!
//! ## Features
//!
//! - `std` *(default)*: enables `std` support in dependencies.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod error;
mod literal;
mod node;

pub use error::BuildError;
pub use literal::{from_level_order, to_level_order};
pub use node::{Node, Side};
