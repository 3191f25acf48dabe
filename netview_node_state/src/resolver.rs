// Copyright 2025 the Netview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The configuration seam: where per-node styles come from.

use crate::style::{NodeGlowConfig, NodeLabelStyle, Selectable, ShapeStyle, ZOrderConfig};
use crate::types::NodeData;

/// Resolves per-node style configuration.
///
/// The store calls these on every read of a derived field, so implementations should be cheap
/// and must be pure with respect to their inputs. When the configuration behind a resolver
/// changes, replace it with [`NodeStates::set_resolver`](crate::NodeStates::set_resolver) so
/// the store's revision moves.
pub trait StyleResolver {
    /// Shape when the node is neither hovered nor selected.
    fn normal_shape(&self, id: &str, data: &NodeData) -> ShapeStyle;

    /// Shape while hovered. `None` keeps the normal shape.
    fn hover_shape(&self, _id: &str, _data: &NodeData) -> Option<ShapeStyle> {
        None
    }

    /// Shape while selected. `None` falls back to the hover or normal shape.
    fn selected_shape(&self, _id: &str, _data: &NodeData) -> Option<ShapeStyle> {
        None
    }

    /// Label style.
    fn label(&self, id: &str, data: &NodeData) -> NodeLabelStyle;

    /// Glow style.
    fn glow(&self, _id: &str, _data: &NodeData) -> NodeGlowConfig {
        NodeGlowConfig::default()
    }

    /// Whether the node may be dragged.
    fn draggable(&self, _id: &str, _data: &NodeData) -> bool {
        true
    }

    /// Whether the node may be selected.
    fn selectable(&self, _id: &str, _data: &NodeData) -> Selectable {
        Selectable::Yes
    }

    /// Base stacking order, used when [`ZOrderConfig::enabled`] is set.
    fn z_index(&self, _id: &str, _data: &NodeData) -> i32 {
        0
    }

    /// Stacking policy, shared by all nodes.
    fn z_order(&self) -> ZOrderConfig {
        ZOrderConfig::default()
    }
}

/// Uniform style configuration: every node gets the same values.
///
/// Build it with struct-update syntax:
///
/// ```
/// use netview_node_state::{NodeStyleConfig, Selectable};
///
/// let config = NodeStyleConfig {
///     draggable: false,
///     selectable: Selectable::Limit(3),
///     ..Default::default()
/// };
/// # let _ = config;
/// ```
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NodeStyleConfig {
    /// See [`StyleResolver::normal_shape`].
    pub normal: ShapeStyle,
    /// See [`StyleResolver::hover_shape`].
    pub hover: Option<ShapeStyle>,
    /// See [`StyleResolver::selected_shape`].
    pub selected: Option<ShapeStyle>,
    /// See [`StyleResolver::label`].
    pub label: NodeLabelStyle,
    /// See [`StyleResolver::glow`].
    pub glow: NodeGlowConfig,
    /// See [`StyleResolver::draggable`].
    pub draggable: bool,
    /// See [`StyleResolver::selectable`].
    pub selectable: Selectable,
    /// See [`StyleResolver::z_index`].
    pub z_index: i32,
    /// See [`StyleResolver::z_order`].
    pub z_order: ZOrderConfig,
}

impl Default for NodeStyleConfig {
    fn default() -> Self {
        use crate::style::ShapeKind;
        use alloc::string::String;

        let normal = ShapeStyle::default();
        let hover = ShapeStyle {
            kind: ShapeKind::Circle { radius: 18.0 },
            color: String::from("#3355bb"),
            stroke: None,
        };
        Self {
            normal,
            hover: Some(hover),
            selected: None,
            label: NodeLabelStyle::default(),
            glow: NodeGlowConfig::default(),
            draggable: true,
            selectable: Selectable::Yes,
            z_index: 0,
            z_order: ZOrderConfig::default(),
        }
    }
}

impl StyleResolver for NodeStyleConfig {
    fn normal_shape(&self, _id: &str, _data: &NodeData) -> ShapeStyle {
        self.normal.clone()
    }

    fn hover_shape(&self, _id: &str, _data: &NodeData) -> Option<ShapeStyle> {
        self.hover.clone()
    }

    fn selected_shape(&self, _id: &str, _data: &NodeData) -> Option<ShapeStyle> {
        self.selected.clone()
    }

    fn label(&self, _id: &str, _data: &NodeData) -> NodeLabelStyle {
        self.label.clone()
    }

    fn glow(&self, _id: &str, _data: &NodeData) -> NodeGlowConfig {
        self.glow.clone()
    }

    fn draggable(&self, _id: &str, _data: &NodeData) -> bool {
        self.draggable
    }

    fn selectable(&self, _id: &str, _data: &NodeData) -> Selectable {
        self.selectable
    }

    fn z_index(&self, _id: &str, _data: &NodeData) -> i32 {
        self.z_index
    }

    fn z_order(&self) -> ZOrderConfig {
        self.z_order
    }
}

impl<R: StyleResolver + ?Sized> StyleResolver for &R {
    fn normal_shape(&self, id: &str, data: &NodeData) -> ShapeStyle {
        (**self).normal_shape(id, data)
    }

    fn hover_shape(&self, id: &str, data: &NodeData) -> Option<ShapeStyle> {
        (**self).hover_shape(id, data)
    }

    fn selected_shape(&self, id: &str, data: &NodeData) -> Option<ShapeStyle> {
        (**self).selected_shape(id, data)
    }

    fn label(&self, id: &str, data: &NodeData) -> NodeLabelStyle {
        (**self).label(id, data)
    }

    fn glow(&self, id: &str, data: &NodeData) -> NodeGlowConfig {
        (**self).glow(id, data)
    }

    fn draggable(&self, id: &str, data: &NodeData) -> bool {
        (**self).draggable(id, data)
    }

    fn selectable(&self, id: &str, data: &NodeData) -> Selectable {
        (**self).selectable(id, data)
    }

    fn z_index(&self, id: &str, data: &NodeData) -> i32 {
        (**self).z_index(id, data)
    }

    fn z_order(&self) -> ZOrderConfig {
        (**self).z_order()
    }
}
