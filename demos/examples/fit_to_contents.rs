// Copyright 2025 the Netview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Fit-to-contents framing.
//!
//! Lay out a few nodes, merge their static-shape bounds into one box, and frame the
//! viewport around it. Then zoom at the cursor and read the visible view box.
//!
//! Run:
//! - `cargo run -p netview_demos --example fit_to_contents`

use std::collections::HashMap;

use kurbo::{Point, Size};
use netview_node_state::{NodeData, NodeStates, NodeStyleConfig};
use netview_viewport::{Viewport, ViewportConfig};

fn main() {
    let mut states = NodeStates::new(NodeStyleConfig::default());
    let positions: HashMap<&str, Point> = [
        ("core", Point::new(0.0, 0.0)),
        ("edge-1", Point::new(-120.0, 80.0)),
        ("edge-2", Point::new(140.0, 60.0)),
        ("backup", Point::new(10.0, -150.0)),
    ]
    .into_iter()
    .collect();
    for id in positions.keys() {
        states.insert(*id, NodeData::named(*id)).unwrap();
    }

    let bounds = states
        .bounds(|id| positions.get(id).copied())
        .expect("at least one positioned node");
    println!("content bounds: {bounds:?}");

    let mut viewport = Viewport::new(Size::new(640.0, 480.0), ViewportConfig::default()).unwrap();
    viewport.fit_to_contents(bounds).unwrap();
    println!("zoom after fit: {:.3}", viewport.zoom());
    println!("visible view box: {:?}", viewport.view_box());

    // Every node center lands inside the container.
    for (id, p) in &positions {
        let s = viewport.to_screen(*p);
        println!("{id:>7} -> screen ({:.1}, {:.1})", s.x, s.y);
        assert!(viewport.size().to_rect().contains(s));
    }

    // Wheel zoom around the cursor keeps the point under it fixed.
    let cursor = Point::new(320.0, 240.0);
    let under_cursor = viewport.to_graph(cursor);
    viewport.zoom_at(1.1, cursor).unwrap();
    println!("zoom after wheel: {:.3}", viewport.zoom());
    let drift = viewport.to_graph(cursor) - under_cursor;
    assert!(drift.hypot() < 1e-9, "cursor anchor drifted by {drift:?}");
}
