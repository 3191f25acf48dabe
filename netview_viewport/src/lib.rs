// Copyright 2025 the Netview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Netview Viewport: pan/zoom state for network views.
//!
//! A [`Viewport`] maps graph space (where nodes live) to screen space (the container, in
//! pixels): `screen = pan + zoom * graph`.
//!
//! - [`Viewport::to_graph`] / [`Viewport::to_screen`] convert pointer positions and node
//!   positions between the two spaces.
//! - [`Viewport::view_box`] reports the visible graph region as an SVG-style
//!   [`ViewBox`](netview_geometry::ViewBox); [`Viewport::set_view_box`] goes the other way.
//! - [`Viewport::fit_to_contents`] frames the view around a
//!   [`BoundingBox`](netview_geometry::BoundingBox), usually the merge of every node's bounds.
//! - [`Viewport::zoom_at`] zooms around a fixed screen point, as a wheel handler would.
//!
//! Zoom is clamped to [`ViewportConfig::min_zoom`]..=[`ViewportConfig::max_zoom`].
//! Every framing input goes through the geometry validation boundary, so inverted or
//! non-finite boxes are rejected with [`ViewportError`] and leave the viewport untouched.
//!
//! This crate does not paint, animate or handle input events.
//!
//! # Example
//!
//! ```rust
//! use kurbo::{Point, Size};
//! use netview_geometry::BoundingBox;
//! use netview_viewport::{Viewport, ViewportConfig};
//!
//! let config = ViewportConfig { fit_content_margin: 0.0, ..Default::default() };
//! let mut vp = Viewport::new(Size::new(100.0, 100.0), config).unwrap();
//!
//! // Two nodes' bounds, merged into one framing box.
//! let nodes = [
//!     BoundingBox::new(0.0, 0.0, 10.0, 10.0),
//!     BoundingBox::new(5.0, 5.0, 50.0, 25.0),
//! ];
//! vp.fit_to_contents(BoundingBox::merge_all(nodes).unwrap()).unwrap();
//! assert_eq!(vp.zoom(), 2.0);
//!
//! // The content center sits in the container center.
//! assert_eq!(vp.to_screen(Point::new(25.0, 12.5)), Point::new(50.0, 50.0));
//! ```
//!
//! This crate is `no_std`.

#![no_std]

pub mod error;
pub mod viewport;

pub use error::ViewportError;
pub use viewport::{Viewport, ViewportConfig};
