// Copyright 2026 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Backend implementations for the column index.
//!
//! - `ordered`: `BTreeMap` keyed by offset. Columns stay sorted as they are
//!   inserted, so reading out results is a plain in-order pass. This is the
//!   default used by [`top_view`][crate::top_view] and friends.
//! - `hashed` (feature `backend_hash`): `hashbrown` map keyed by offset.
//!   Inserts are O(1) and the columns are sorted once when results are read
//!   out. A good fit for very wide trees with many distinct columns.
//!
//! Every backend yields identical projections for the same tree.

pub(crate) mod ordered;
#[cfg(feature = "backend_hash")]
pub(crate) mod hashed;

#[cfg(feature = "backend_hash")]
pub use hashed::Hashed;
pub use ordered::Ordered;
