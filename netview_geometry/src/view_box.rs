// Copyright 2025 the Netview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! SVG-style view boxes.

use kurbo::{Point, Rect, Size};

use crate::bounding_box::BoundingBox;
use crate::error::{GeometryError, GeometryKind, InvalidReason, Result};

/// Rectangle given as origin and extent, matching the SVG `viewBox` attribute.
///
/// `width` and `height` are expected to be non-negative; only [`validate`](Self::validate)
/// checks it.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ViewBox {
    /// Left edge.
    pub x: f64,
    /// Top edge.
    pub y: f64,
    /// Horizontal extent.
    pub width: f64,
    /// Vertical extent.
    pub height: f64,
}

impl ViewBox {
    /// Create a view box from origin and extent.
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Create a view box from an edge-based box. See [`BoundingBox::to_view_box`].
    pub const fn from_box(b: BoundingBox) -> Self {
        b.to_view_box()
    }

    /// Convert to an edge-based box. See [`BoundingBox::from_view_box`].
    pub const fn to_box(self) -> BoundingBox {
        BoundingBox::from_view_box(self)
    }

    /// Top-left corner.
    pub const fn origin(&self) -> Point {
        Point::new(self.x, self.y)
    }

    /// Extent as a Kurbo size.
    pub const fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// Check that all components are finite and the extent is non-negative.
    pub fn validate(self) -> Result<Self> {
        let invalid = |reason| GeometryError::InvalidGeometry {
            kind: GeometryKind::ViewBox,
            reason,
        };
        if !(self.x.is_finite()
            && self.y.is_finite()
            && self.width.is_finite()
            && self.height.is_finite())
        {
            return Err(invalid(InvalidReason::NonFinite));
        }
        if self.width < 0.0 {
            return Err(invalid(InvalidReason::InvertedHorizontal));
        }
        if self.height < 0.0 {
            return Err(invalid(InvalidReason::InvertedVertical));
        }
        Ok(self)
    }
}

impl From<BoundingBox> for ViewBox {
    fn from(b: BoundingBox) -> Self {
        b.to_view_box()
    }
}

impl From<Rect> for ViewBox {
    fn from(r: Rect) -> Self {
        Self::new(r.x0, r.y0, r.width(), r.height())
    }
}

impl From<ViewBox> for Rect {
    fn from(v: ViewBox) -> Self {
        Self::from_origin_size(v.origin(), v.size())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_view_box_scenario() {
        let b = ViewBox::new(5.0, 5.0, 10.0, 20.0).to_box();
        assert_eq!(b, BoundingBox::new(5.0, 5.0, 15.0, 25.0));
    }

    #[test]
    fn view_box_round_trip() {
        let samples = [
            ViewBox::new(5.0, 5.0, 10.0, 20.0),
            ViewBox::new(-100.0, 40.0, 0.0, 3.0),
            ViewBox::new(0.0, 0.0, 0.0, 0.0),
            ViewBox::new(-8.0, -16.0, 256.0, 128.0),
        ];
        for v in samples {
            assert_eq!(ViewBox::from_box(v.to_box()), v);
        }
    }

    #[test]
    fn box_round_trip() {
        let samples = [
            BoundingBox::new(0.0, 0.0, 10.0, 10.0),
            BoundingBox::new(-4.0, -2.0, 6.0, 0.0),
            BoundingBox::new(3.0, 3.0, 3.0, 3.0),
        ];
        for b in samples {
            assert_eq!(BoundingBox::from_view_box(b.to_view_box()), b);
        }
    }

    #[test]
    fn validate_rejects_negative_extent_and_nan() {
        assert!(ViewBox::new(0.0, 0.0, 1.0, 1.0).validate().is_ok());
        assert_eq!(
            ViewBox::new(0.0, 0.0, -1.0, 1.0).validate(),
            Err(GeometryError::InvalidGeometry {
                kind: GeometryKind::ViewBox,
                reason: InvalidReason::InvertedHorizontal,
            })
        );
        assert_eq!(
            ViewBox::new(0.0, 0.0, 1.0, -1.0).validate(),
            Err(GeometryError::InvalidGeometry {
                kind: GeometryKind::ViewBox,
                reason: InvalidReason::InvertedVertical,
            })
        );
        assert!(ViewBox::new(f64::INFINITY, 0.0, 1.0, 1.0).validate().is_err());
    }

    #[test]
    fn kurbo_rect_conversion() {
        let v = ViewBox::new(2.0, 3.0, 4.0, 5.0);
        let r: Rect = v.into();
        assert_eq!(r, Rect::new(2.0, 3.0, 6.0, 8.0));
        assert_eq!(ViewBox::from(r), v);
        assert_eq!(Rect::from(v.to_box()), r);
    }
}
