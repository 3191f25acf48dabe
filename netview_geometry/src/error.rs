// Copyright 2025 the Netview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Errors reported at the geometry validation boundary.

/// Which rectangle representation failed validation.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum GeometryKind {
    /// An edge-based [`BoundingBox`](crate::BoundingBox).
    BoundingBox,
    /// An origin/extent [`ViewBox`](crate::ViewBox).
    ViewBox,
}

impl core::fmt::Display for GeometryKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::BoundingBox => f.write_str("bounding box"),
            Self::ViewBox => f.write_str("view box"),
        }
    }
}

/// Why a rectangle was rejected.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum InvalidReason {
    /// At least one coordinate is NaN or infinite.
    NonFinite,
    /// `right < left` (or a negative width).
    InvertedHorizontal,
    /// `bottom < top` (or a negative height).
    InvertedVertical,
}

impl core::fmt::Display for InvalidReason {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::NonFinite => f.write_str("non-finite coordinate"),
            Self::InvertedHorizontal => f.write_str("horizontal extent is negative"),
            Self::InvertedVertical => f.write_str("vertical extent is negative"),
        }
    }
}

/// Errors produced by [`BoundingBox::validate`](crate::BoundingBox::validate),
/// [`ViewBox::validate`](crate::ViewBox::validate) and
/// [`BoundingBox::try_divide`](crate::BoundingBox::try_divide).
#[derive(Copy, Clone, Debug, PartialEq, thiserror::Error)]
pub enum GeometryError {
    /// The rectangle is not usable as framing input.
    #[error("invalid {kind}: {reason}")]
    InvalidGeometry {
        /// Representation that was checked.
        kind: GeometryKind,
        /// First failed check.
        reason: InvalidReason,
    },
    /// Division by zero was requested.
    #[error("cannot divide a bounding box by zero")]
    ZeroDivisor,
    /// The divisor is NaN or infinite.
    #[error("cannot divide a bounding box by non-finite value {0}")]
    NonFiniteDivisor(f64),
}

/// Result alias for geometry validation.
pub type Result<T> = core::result::Result<T, GeometryError>;
