// Copyright 2026 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shared helpers for the Canopy demos.

use std::fmt::Display;

use canopy_projection::walk;
use canopy_tree::Node;
use tracing_subscriber::EnvFilter;

/// Install a `fmt` subscriber filtered by `RUST_LOG` (default `info`).
///
/// Run a demo with `RUST_LOG=canopy_projection=trace` to see every visit.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    // A second demo in the same process keeps the first subscriber.
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

/// Render a tree as a grid, one row per depth and one cell per column.
///
/// Cells that hold more than one node list them joined by `/`.
pub fn render_grid<T: Display>(root: Option<&Node<T>>) -> String {
    let mut rows: Vec<Vec<(isize, String)>> = Vec::new();
    let (mut lo, mut hi) = (0_isize, 0_isize);
    for visit in walk(root) {
        if rows.len() <= visit.depth() {
            rows.resize_with(visit.depth() + 1, Vec::new);
        }
        let row = &mut rows[visit.depth()];
        let text = visit.value().to_string();
        match row.iter_mut().find(|(offset, _)| *offset == visit.offset()) {
            Some((_, cell)) => {
                cell.push('/');
                cell.push_str(&text);
            }
            None => row.push((visit.offset(), text)),
        }
        lo = lo.min(visit.offset());
        hi = hi.max(visit.offset());
    }

    let width = rows
        .iter()
        .flatten()
        .map(|(_, cell)| cell.len())
        .max()
        .unwrap_or(1);
    let mut out = String::new();
    for row in &rows {
        let mut line = String::new();
        for offset in lo..=hi {
            let cell = row
                .iter()
                .find(|(o, _)| *o == offset)
                .map_or("", |(_, cell)| cell.as_str());
            line.push_str(&format!("{cell:^width$} "));
        }
        out.push_str(line.trim_end());
        out.push('\n');
    }
    out
}
