// Copyright 2025 the Netview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Netview Geometry: edge-based bounding boxes and SVG-style view boxes.
//!
//! Network views keep two rectangle representations around:
//!
//! - [`BoundingBox`]: four edges (`top`, `left`, `right`, `bottom`), convenient for unions.
//! - [`ViewBox`]: origin plus extent (`x`, `y`, `width`, `height`), what an SVG viewport takes.
//!
//! The conversions between them are exact. [`BoundingBox::merge`] gives the smallest box
//! containing two boxes and folds over any number of them, which is how a viewport is framed
//! around every visible node. [`BoundingBox::divide`] moves a box between spaces that differ
//! by a uniform scale (a zoom level).
//!
//! ## Validation
//!
//! The plain operations never fail and never check orientation: an inverted box yields a
//! negative extent, a zero divisor yields infinities. Malformed input is rejected once, at the
//! point boxes enter a system, with [`BoundingBox::validate`], [`ViewBox::validate`] and
//! [`BoundingBox::try_divide`], all returning [`GeometryError`].
//!
//! # Example
//!
//! ```rust
//! use netview_geometry::{BoundingBox, ViewBox};
//!
//! let a = ViewBox::new(5.0, 5.0, 10.0, 20.0).to_box();
//! assert_eq!(a, BoundingBox::new(5.0, 5.0, 15.0, 25.0));
//!
//! let b = BoundingBox::new(0.0, 0.0, 10.0, 10.0);
//! let framed = BoundingBox::merge_all([a, b]).unwrap();
//! assert_eq!(framed.to_view_box(), ViewBox::new(0.0, 0.0, 15.0, 25.0));
//!
//! // Back to a zoom of 2.0.
//! assert_eq!(framed.divide(2.0), BoundingBox::new(0.0, 0.0, 7.5, 12.5));
//! ```
//!
//! This crate is `no_std`.

#![no_std]

pub mod bounding_box;
pub mod error;
pub mod view_box;

pub use bounding_box::BoundingBox;
pub use error::{GeometryError, GeometryKind, InvalidReason};
pub use view_box::ViewBox;
