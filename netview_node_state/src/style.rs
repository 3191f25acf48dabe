// Copyright 2025 the Netview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Resolved style values for a node: shape, label, glow, selection and stacking policy.
//!
//! These are the outputs of a [`StyleResolver`](crate::StyleResolver). The store never
//! keeps them; it asks the resolver again on every read.

use alloc::string::String;

use kurbo::Point;
use netview_geometry::BoundingBox;

/// Geometric form of a node.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ShapeKind {
    /// Circle centered on the node position.
    Circle {
        /// Radius in graph units.
        radius: f64,
    },
    /// Rectangle centered on the node position.
    Rect {
        /// Full width in graph units.
        width: f64,
        /// Full height in graph units.
        height: f64,
        /// Corner radius; `0.0` for sharp corners.
        border_radius: f64,
    },
}

impl ShapeKind {
    /// Half of the horizontal and vertical extent.
    pub fn half_extent(&self) -> (f64, f64) {
        match *self {
            Self::Circle { radius } => (radius, radius),
            Self::Rect { width, height, .. } => (0.5 * width, 0.5 * height),
        }
    }
}

/// Outline drawn around a shape.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StrokeStyle {
    /// Line width in graph units.
    pub width: f64,
    /// CSS color.
    pub color: String,
    /// SVG dash pattern, if any.
    pub dasharray: Option<String>,
}

/// Resolved shape of a node.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ShapeStyle {
    /// Geometry.
    pub kind: ShapeKind,
    /// CSS fill color.
    pub color: String,
    /// Optional outline.
    pub stroke: Option<StrokeStyle>,
}

impl ShapeStyle {
    /// Bounding box of the shape centered at `center`, outline included.
    ///
    /// Half of the stroke lies outside the geometry.
    pub fn bounds_at(&self, center: Point) -> BoundingBox {
        let (hx, hy) = self.kind.half_extent();
        let pad = self.stroke.as_ref().map_or(0.0, |s| 0.5 * s.width.max(0.0));
        let (hx, hy) = (hx + pad, hy + pad);
        BoundingBox::new(center.y - hy, center.x - hx, center.x + hx, center.y + hy)
    }
}

impl Default for ShapeStyle {
    fn default() -> Self {
        Self {
            kind: ShapeKind::Circle { radius: 16.0 },
            color: String::from("#4466cc"),
            stroke: None,
        }
    }
}

/// Where a label sits relative to its node.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LabelDirection {
    /// On top of the node.
    Center,
    /// Above.
    North,
    /// Above right.
    NorthEast,
    /// Right.
    East,
    /// Below right.
    SouthEast,
    /// Below.
    #[default]
    South,
    /// Below left.
    SouthWest,
    /// Left.
    West,
    /// Above left.
    NorthWest,
}

/// Which piece of node data a label shows.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LabelText {
    /// [`NodeData::name`](crate::NodeData::name); empty when absent.
    #[default]
    Name,
    /// The node identifier.
    Id,
    /// A named entry of [`NodeData::properties`](crate::NodeData::properties); empty when absent.
    Property(String),
}

/// Box painted behind a label.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LabelBackground {
    /// Horizontal and vertical padding.
    pub padding: f64,
    /// CSS color.
    pub color: String,
    /// Corner radius.
    pub border_radius: f64,
}

/// Resolved label style of a node.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NodeLabelStyle {
    /// Whether the label is drawn at all.
    pub visible: bool,
    /// CSS font family; `None` inherits.
    pub font_family: Option<String>,
    /// Font size in graph units.
    pub font_size: f64,
    /// Line height as a multiple of the font size.
    pub line_height: f64,
    /// CSS text color.
    pub color: String,
    /// Gap between the shape and the label.
    pub margin: f64,
    /// Placement around the node.
    pub direction: LabelDirection,
    /// Optional background box.
    pub background: Option<LabelBackground>,
    /// Data source of the label text.
    pub text: LabelText,
}

impl Default for NodeLabelStyle {
    fn default() -> Self {
        Self {
            visible: true,
            font_family: None,
            font_size: 11.0,
            line_height: 1.1,
            color: String::from("#000000"),
            margin: 4.0,
            direction: LabelDirection::South,
            background: None,
            text: LabelText::Name,
        }
    }
}

/// Glow drawn behind a node.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NodeGlowConfig {
    /// Whether the glow is drawn.
    pub visible: bool,
    /// CSS color.
    pub color: String,
    /// Blur width in graph units.
    pub width: f64,
}

impl Default for NodeGlowConfig {
    fn default() -> Self {
        Self {
            visible: false,
            color: String::from("#4466cc"),
            width: 10.0,
        }
    }
}

/// Whether, and how far, a node participates in selection.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Selectable {
    /// Never selectable.
    No,
    /// Selectable without limit.
    #[default]
    Yes,
    /// Selectable while fewer than this many nodes are selected.
    Limit(usize),
}

impl Selectable {
    /// Whether one more node may be selected when `already_selected` nodes are.
    ///
    /// [`NodeStates::select`](crate::NodeStates::select) applies this check.
    pub fn allows(self, already_selected: usize) -> bool {
        match self {
            Self::No => false,
            Self::Yes => true,
            Self::Limit(max) => already_selected < max,
        }
    }
}

impl From<bool> for Selectable {
    fn from(v: bool) -> Self {
        if v { Self::Yes } else { Self::No }
    }
}

/// Stacking policy for nodes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ZOrderConfig {
    /// When false every node reports z-index `0`.
    pub enabled: bool,
    /// Raise a hovered node above all others.
    pub bring_to_front_on_hover: bool,
    /// Raise a selected node above all unraised nodes.
    pub bring_to_front_on_selected: bool,
}

impl Default for ZOrderConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            bring_to_front_on_hover: true,
            bring_to_front_on_selected: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn circle_bounds_include_stroke() {
        let shape = ShapeStyle {
            kind: ShapeKind::Circle { radius: 10.0 },
            stroke: Some(StrokeStyle {
                width: 4.0,
                color: String::from("#000"),
                dasharray: None,
            }),
            ..Default::default()
        };
        assert_eq!(
            shape.bounds_at(Point::new(100.0, 50.0)),
            BoundingBox::new(38.0, 88.0, 112.0, 62.0)
        );
    }

    #[test]
    fn rect_bounds() {
        let shape = ShapeStyle {
            kind: ShapeKind::Rect {
                width: 40.0,
                height: 20.0,
                border_radius: 4.0,
            },
            ..Default::default()
        };
        let b = shape.bounds_at(Point::ZERO);
        assert_eq!(b, BoundingBox::new(-10.0, -20.0, 20.0, 10.0));
        assert_eq!(b.to_view_box().width, 40.0);
    }

    #[test]
    fn selectable_limits() {
        assert!(!Selectable::No.allows(0));
        assert!(Selectable::Yes.allows(1_000));
        assert!(Selectable::Limit(2).allows(1));
        assert!(!Selectable::Limit(2).allows(2));
        assert!(!Selectable::Limit(0).allows(0));
        assert_eq!(Selectable::from(false), Selectable::No);
    }
}
