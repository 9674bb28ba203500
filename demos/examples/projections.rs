// Copyright 2026 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Build a few trees from level-order literals and print their projections.
//!
//! Run with:
//! `RUST_LOG=canopy_projection=debug cargo run -p canopy_demos --example projections`

use canopy_demos::{init_tracing, render_grid};
use canopy_projection::{Views, project};
use canopy_tree::from_level_order;

fn main() {
    init_tracing();

    let literals: [(&str, Vec<Option<i32>>); 3] = [
        ("balanced", (1..=7).map(Some).collect()),
        (
            "shared cell",
            vec![Some(1), Some(2), Some(3), None, Some(4), Some(5), Some(6)],
        ),
        (
            "signed",
            vec![Some(0), Some(-1), Some(1), Some(-2), None, None, Some(2)],
        ),
    ];

    for (name, literal) in &literals {
        let root = match from_level_order(literal) {
            Ok(root) => root,
            Err(err) => {
                tracing::error!(%err, name, "skipping malformed literal");
                continue;
            }
        };
        let p = project(root.as_ref(), Views::ALL);
        println!("== {name}");
        print!("{}", render_grid(root.as_ref()));
        println!("top view:       {:?}", p.top);
        println!("bottom view:    {:?}", p.bottom);
        println!("vertical order: {:?}", p.vertical);
        println!();
    }
}
