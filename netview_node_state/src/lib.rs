// Copyright 2025 the Netview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Netview Node State: per-node visual state for network views.
//!
//! A renderer reads a node's shape, label, glow, stacking order and neighbors on every paint;
//! input handling flips its `selected` and `hovered` flags; graph editing adds and removes
//! edges. This crate keeps the three apart.
//!
//! ## Stored facts and derived fields
//!
//! [`NodeStates`] stores only:
//!
//! - each node's [`NodeData`] record,
//! - its [`Interaction`] flags (`selected`, `hovered`), the only fields input handling writes,
//! - the raw edge → opposite-node mapping, maintained by [`NodeStates::connect`] and
//!   [`NodeStates::disconnect`].
//!
//! Every other field is derived. [`NodeView`] exposes them as methods that ask the
//! [`StyleResolver`] again on each call: [`shape`](NodeView::shape),
//! [`static_shape`](NodeView::static_shape), [`glow`](NodeView::glow),
//! [`label`](NodeView::label), [`label_text`](NodeView::label_text),
//! [`draggable`](NodeView::draggable), [`selectable`](NodeView::selectable),
//! [`z_index`](NodeView::z_index) and [`opposite_nodes`](NodeView::opposite_nodes).
//! Since views borrow the store immutably, a derived field cannot be written, and a read always
//! sees the latest writes. [`NodeStates::revision`] moves on every write for callers that
//! want to cache derived values.
//!
//! ## Style configuration
//!
//! [`StyleResolver`] is the seam to whatever configuration system sits above.
//! [`NodeStyleConfig`] is a ready-made resolver giving every node the same styles.
//!
//! # Example
//!
//! ```rust
//! use kurbo::Point;
//! use netview_node_state::{NodeData, NodeStates, NodeStyleConfig};
//!
//! let mut states = NodeStates::new(NodeStyleConfig::default());
//! states.insert("r1", NodeData::named("Router 1")).unwrap();
//! states.insert("r2", NodeData::named("Router 2")).unwrap();
//! states.connect("link", "r1", "r2").unwrap();
//!
//! // Hover swaps the painted shape but not the static one.
//! states.set_hovered("r1", true).unwrap();
//! let r1 = states.node("r1").unwrap();
//! assert_ne!(r1.shape(), r1.static_shape());
//! assert_eq!(r1.label_text(), "Router 1");
//!
//! // The far end of "link", resolved to its current styles.
//! let opposite = r1.opposite_nodes();
//! assert_eq!(opposite["link"].id, "r2");
//!
//! // Framing box of both nodes at their positions.
//! let bounds = states
//!     .bounds(|id| Some(if id == "r1" { Point::new(0.0, 0.0) } else { Point::new(100.0, 0.0) }))
//!     .unwrap();
//! assert_eq!(bounds.to_view_box().width, 132.0);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod error;
pub mod resolver;
pub mod store;
pub mod style;
pub mod types;

pub use error::StateError;
pub use resolver::{NodeStyleConfig, StyleResolver};
pub use store::{NodeStates, NodeView};
pub use style::{
    LabelBackground, LabelDirection, LabelText, NodeGlowConfig, NodeLabelStyle, Selectable,
    ShapeKind, ShapeStyle, StrokeStyle, ZOrderConfig,
};
pub use types::{Interaction, NodeData, OppositeNode};
