// Copyright 2026 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Walk a subtree in the coordinate frame of its enclosing tree.
//!
//! Run with: `cargo run -p canopy_demos --example subtree_frame`

use canopy_demos::init_tracing;
use canopy_projection::{Coordinate, Walker};
use canopy_tree::{Node, Side};

fn main() {
    init_tracing();

    let root = Node::leaf(1)
        .with_left(Node::leaf(2).with_left(Node::leaf(4)).with_right(Node::leaf(5)))
        .with_right(Node::leaf(3));

    let Some(left) = root.child(Side::Left) else {
        return;
    };
    let frame = Coordinate::ORIGIN.child(Side::Left);
    for visit in Walker::with_origin(Some(left), frame) {
        println!(
            "value {:>2} at offset {:>2}, depth {}",
            visit.value(),
            visit.offset(),
            visit.depth()
        );
    }
}
