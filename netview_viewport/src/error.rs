// Copyright 2025 the Netview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Viewport errors.

use netview_geometry::GeometryError;

/// Errors returned by [`Viewport`](crate::Viewport) operations.
#[derive(Copy, Clone, Debug, PartialEq, thiserror::Error)]
pub enum ViewportError {
    /// The container size is non-finite or not strictly positive.
    #[error("invalid container size {width}x{height}")]
    InvalidContainer {
        /// Requested width.
        width: f64,
        /// Requested height.
        height: f64,
    },
    /// The zoom limits are non-finite, non-positive, or `min > max`.
    #[error("invalid zoom limits {min}..={max}")]
    InvalidZoomLimits {
        /// Requested minimum zoom.
        min: f64,
        /// Requested maximum zoom.
        max: f64,
    },
    /// A zoom level or zoom factor is non-finite or not strictly positive.
    #[error("invalid zoom value {0}")]
    InvalidZoom(f64),
    /// A framing rectangle failed validation.
    #[error(transparent)]
    Geometry(#[from] GeometryError),
}

/// Result alias for viewport operations.
pub type Result<T> = core::result::Result<T, ViewportError>;
