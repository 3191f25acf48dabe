// Copyright 2025 the Netview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Edge-based bounding boxes.

use kurbo::{Point, Rect};

use crate::error::{GeometryError, GeometryKind, InvalidReason, Result};
use crate::view_box::ViewBox;

/// Axis-aligned rectangle given by its four edges.
///
/// Consumers expect `left <= right` and `top <= bottom`. The plain operations on this type
/// ([`divide`](Self::divide), [`merge`](Self::merge), [`to_view_box`](Self::to_view_box)) do
/// not check that: an inverted box goes in, an inverted box (or a negative extent) comes out.
/// Call [`validate`](Self::validate) where boxes enter a system to reject malformed input once.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BoundingBox {
    /// Minimum y.
    pub top: f64,
    /// Minimum x.
    pub left: f64,
    /// Maximum x.
    pub right: f64,
    /// Maximum y.
    pub bottom: f64,
}

impl BoundingBox {
    /// The box with all four edges at zero.
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0, 0.0);

    /// Create a box from its edges, in `top, left, right, bottom` order.
    pub const fn new(top: f64, left: f64, right: f64, bottom: f64) -> Self {
        Self {
            top,
            left,
            right,
            bottom,
        }
    }

    /// Create a box from an SVG-style origin and extent.
    ///
    /// `top = y`, `left = x`, `right = x + width`, `bottom = y + height`. No rounding.
    pub const fn from_view_box(view_box: ViewBox) -> Self {
        Self {
            top: view_box.y,
            left: view_box.x,
            right: view_box.x + view_box.width,
            bottom: view_box.y + view_box.height,
        }
    }

    /// Convert to an SVG-style origin and extent.
    ///
    /// An inverted box produces a negative width or height; it is not corrected.
    pub const fn to_view_box(self) -> ViewBox {
        ViewBox {
            x: self.left,
            y: self.top,
            width: self.right - self.left,
            height: self.bottom - self.top,
        }
    }

    /// Scale every edge by `1 / d`.
    ///
    /// Used to move a box between coordinate spaces that differ by a uniform scale, such as
    /// a zoom level. `d == 0.0` follows IEEE division (infinities or NaN); use
    /// [`try_divide`](Self::try_divide) to reject it instead.
    pub const fn divide(self, d: f64) -> Self {
        Self {
            top: self.top / d,
            left: self.left / d,
            right: self.right / d,
            bottom: self.bottom / d,
        }
    }

    /// Like [`divide`](Self::divide), but rejects a zero or non-finite divisor.
    pub fn try_divide(self, d: f64) -> Result<Self> {
        if !d.is_finite() {
            return Err(GeometryError::NonFiniteDivisor(d));
        }
        if d == 0.0 {
            return Err(GeometryError::ZeroDivisor);
        }
        Ok(self.divide(d))
    }

    /// The smallest box containing both `self` and `other`.
    ///
    /// Commutative, associative and idempotent, so it can be folded over any number of boxes
    /// (see [`merge_all`](Self::merge_all)). A NaN edge on either side yields a NaN edge.
    pub fn merge(self, other: Self) -> Self {
        Self {
            top: nan_min(self.top, other.top),
            left: nan_min(self.left, other.left),
            right: nan_max(self.right, other.right),
            bottom: nan_max(self.bottom, other.bottom),
        }
    }

    /// Merge every box in `boxes`. Returns `None` if the sequence is empty.
    pub fn merge_all<I>(boxes: I) -> Option<Self>
    where
        I: IntoIterator<Item = Self>,
    {
        let mut it = boxes.into_iter();
        let first = it.next()?;
        Some(it.fold(first, Self::merge))
    }

    /// Horizontal extent, `right - left`. Negative for an inverted box.
    pub fn width(&self) -> f64 {
        self.right - self.left
    }

    /// Vertical extent, `bottom - top`. Negative for an inverted box.
    pub fn height(&self) -> f64 {
        self.bottom - self.top
    }

    /// Midpoint of the box.
    pub fn center(&self) -> Point {
        Point::new(
            0.5 * (self.left + self.right),
            0.5 * (self.top + self.bottom),
        )
    }

    /// Whether the box encloses no area (zero-sized, inverted, or NaN).
    pub fn is_empty(&self) -> bool {
        !(self.right > self.left && self.bottom > self.top)
    }

    /// Check that all edges are finite and the box is not inverted.
    ///
    /// Zero-sized boxes are valid.
    pub fn validate(self) -> Result<Self> {
        let invalid = |reason| GeometryError::InvalidGeometry {
            kind: GeometryKind::BoundingBox,
            reason,
        };
        if !(self.top.is_finite()
            && self.left.is_finite()
            && self.right.is_finite()
            && self.bottom.is_finite())
        {
            return Err(invalid(InvalidReason::NonFinite));
        }
        if self.right < self.left {
            return Err(invalid(InvalidReason::InvertedHorizontal));
        }
        if self.bottom < self.top {
            return Err(invalid(InvalidReason::InvertedVertical));
        }
        Ok(self)
    }

    /// Convert to a Kurbo rectangle (`x0 = left`, `y0 = top`, `x1 = right`, `y1 = bottom`).
    pub const fn to_rect(self) -> Rect {
        Rect::new(self.left, self.top, self.right, self.bottom)
    }
}

// `f64::min`/`f64::max` drop a NaN operand.
fn nan_min(a: f64, b: f64) -> f64 {
    if a.is_nan() || b.is_nan() {
        f64::NAN
    } else {
        a.min(b)
    }
}

fn nan_max(a: f64, b: f64) -> f64 {
    if a.is_nan() || b.is_nan() {
        f64::NAN
    } else {
        a.max(b)
    }
}

impl From<Rect> for BoundingBox {
    fn from(r: Rect) -> Self {
        Self::new(r.y0, r.x0, r.x1, r.y1)
    }
}

impl From<BoundingBox> for Rect {
    fn from(b: BoundingBox) -> Self {
        b.to_rect()
    }
}

impl From<ViewBox> for BoundingBox {
    fn from(v: ViewBox) -> Self {
        Self::from_view_box(v)
    }
}
