// Copyright 2026 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Errors produced while building trees from literals.

/// Reasons a level-order literal cannot be turned into a tree.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum BuildError {
    /// A present value appears where no parent slot is left to hold it.
    ///
    /// This happens when the literal lists more values than the present nodes
    /// before it have child slots for, for example `[None, Some(1)]`.
    #[error("entry {index} has no parent slot to attach to")]
    Detached {
        /// Position of the first offending entry in the literal.
        index: usize,
    },
}
