// Copyright 2025 the Netview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Node state basics.
//!
//! Build a small network, hover and select nodes, and read the derived fields a renderer
//! would paint from.
//!
//! Run:
//! - `cargo run -p netview_demos --example node_state_basics`

use netview_node_state::{
    LabelDirection, NodeData, NodeLabelStyle, NodeStates, NodeStyleConfig, ShapeKind, ShapeStyle,
    ZOrderConfig,
};

fn main() {
    let config = NodeStyleConfig {
        selected: Some(ShapeStyle {
            kind: ShapeKind::Rect {
                width: 36.0,
                height: 36.0,
                border_radius: 6.0,
            },
            color: "#ee8800".into(),
            stroke: None,
        }),
        label: NodeLabelStyle {
            direction: LabelDirection::East,
            ..Default::default()
        },
        z_order: ZOrderConfig {
            enabled: true,
            ..Default::default()
        },
        ..Default::default()
    };
    let mut states = NodeStates::new(config);

    for (id, name) in [("gw", "Gateway"), ("sw1", "Switch 1"), ("sw2", "Switch 2")] {
        states.insert(id, NodeData::named(name)).unwrap();
    }
    states.connect("gw-sw1", "gw", "sw1").unwrap();
    states.connect("gw-sw2", "gw", "sw2").unwrap();
    states.connect("sw1-sw2", "sw1", "sw2").unwrap();

    states.set_hovered("sw1", true).unwrap();
    states.set_selected("sw2", true).unwrap();

    let mut ids: Vec<_> = states.iter().map(|n| n.id()).collect();
    ids.sort_unstable();
    for id in ids {
        let node = states.node(id).unwrap();
        println!(
            "{id:>4}: label={:?} shape={:?} color={} z={} selected={} hovered={}",
            node.label_text(),
            node.shape().kind,
            node.shape().color,
            node.z_index(),
            node.selected(),
            node.hovered(),
        );
    }

    let gw = states.node("gw").unwrap();
    let mut opposite: Vec<_> = gw.opposite_nodes().into_iter().collect();
    opposite.sort_unstable_by_key(|(edge, _)| *edge);
    for (edge, other) in opposite {
        println!("gw --{edge}--> {} (painted as {})", other.id, other.shape.color);
    }

    let hovered = states.node("sw1").unwrap();
    let selected = states.node("sw2").unwrap();
    assert!(hovered.z_index() > selected.z_index());
    assert!(selected.z_index() > gw.z_index());
    println!("revision: {}", states.revision());
}
