// Copyright 2025 the Netview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pan/zoom state and framing.

use kurbo::{Affine, Point, Size, Vec2};
use netview_geometry::{BoundingBox, ViewBox};
use tracing::{debug, trace, warn};

use crate::error::{Result, ViewportError};

/// Limits and framing policy for a [`Viewport`].
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ViewportConfig {
    /// Smallest allowed zoom level.
    pub min_zoom: f64,
    /// Largest allowed zoom level.
    pub max_zoom: f64,
    /// Screen-space padding kept on every side by [`Viewport::fit_to_contents`].
    pub fit_content_margin: f64,
}

impl Default for ViewportConfig {
    fn default() -> Self {
        Self {
            min_zoom: 0.1,
            max_zoom: 64.0,
            fit_content_margin: 8.0,
        }
    }
}

/// Mapping between screen space (the container, in pixels) and graph space.
///
/// `screen = pan + zoom * graph`. `pan` is where the graph origin lands on screen.
#[derive(Clone, Debug, PartialEq)]
pub struct Viewport {
    config: ViewportConfig,
    size: Size,
    pan: Vec2,
    zoom: f64,
}

fn check_size(size: Size) -> Result<Size> {
    let ok = size.width.is_finite()
        && size.height.is_finite()
        && size.width > 0.0
        && size.height > 0.0;
    if ok {
        Ok(size)
    } else {
        Err(ViewportError::InvalidContainer {
            width: size.width,
            height: size.height,
        })
    }
}

fn check_positive(v: f64) -> Result<f64> {
    if v.is_finite() && v > 0.0 {
        Ok(v)
    } else {
        Err(ViewportError::InvalidZoom(v))
    }
}

impl Viewport {
    /// Create a viewport for a container of `size` with zoom `1.0` and no pan.
    pub fn new(size: Size, config: ViewportConfig) -> Result<Self> {
        let size = check_size(size)?;
        let limits_ok = config.min_zoom.is_finite()
            && config.max_zoom.is_finite()
            && config.min_zoom > 0.0
            && config.min_zoom <= config.max_zoom;
        if !limits_ok {
            return Err(ViewportError::InvalidZoomLimits {
                min: config.min_zoom,
                max: config.max_zoom,
            });
        }
        Ok(Self {
            config,
            size,
            pan: Vec2::ZERO,
            zoom: 1.0_f64.clamp(config.min_zoom, config.max_zoom),
        })
    }

    /// Framing policy in effect.
    pub fn config(&self) -> &ViewportConfig {
        &self.config
    }

    /// Container size in screen pixels.
    pub fn size(&self) -> Size {
        self.size
    }

    /// Screen position of the graph origin.
    pub fn pan(&self) -> Vec2 {
        self.pan
    }

    /// Current zoom level.
    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    /// Graph-to-screen transform.
    pub fn transform(&self) -> Affine {
        Affine::translate(self.pan) * Affine::scale(self.zoom)
    }

    /// Convert a screen (container) point into graph coordinates.
    pub fn to_graph(&self, screen: Point) -> Point {
        ((screen.to_vec2() - self.pan) / self.zoom).to_point()
    }

    /// Convert a graph point into screen (container) coordinates.
    pub fn to_screen(&self, graph: Point) -> Point {
        (graph.to_vec2() * self.zoom + self.pan).to_point()
    }

    /// The graph-space region currently visible in the container.
    pub fn view_box(&self) -> ViewBox {
        let screen = ViewBox::new(-self.pan.x, -self.pan.y, self.size.width, self.size.height);
        screen.to_box().divide(self.zoom).to_view_box()
    }

    /// Move the graph origin to `pan` (screen pixels).
    pub fn set_pan(&mut self, pan: Vec2) {
        self.pan = pan;
    }

    /// Shift the view by `delta` screen pixels.
    pub fn pan_by(&mut self, delta: Vec2) {
        self.pan += delta;
    }

    /// Set the zoom level, keeping the container center fixed. Clamped to the limits.
    pub fn set_zoom(&mut self, zoom: f64) -> Result<()> {
        let zoom = check_positive(zoom)?;
        let center = self.size.to_rect().center();
        self.apply_zoom(zoom, center);
        Ok(())
    }

    /// Multiply the zoom by `factor` around a fixed screen point (for example the cursor).
    ///
    /// The graph point under `anchor` stays under `anchor`. The result is clamped to the
    /// configured limits.
    pub fn zoom_at(&mut self, factor: f64, anchor: Point) -> Result<()> {
        let factor = check_positive(factor)?;
        self.apply_zoom(self.zoom * factor, anchor);
        Ok(())
    }

    fn apply_zoom(&mut self, zoom: f64, anchor: Point) {
        let new_zoom = zoom.clamp(self.config.min_zoom, self.config.max_zoom);
        let ratio = new_zoom / self.zoom;
        let anchor = anchor.to_vec2();
        self.pan = anchor - (anchor - self.pan) * ratio;
        self.zoom = new_zoom;
        trace!(zoom = self.zoom, pan_x = self.pan.x, pan_y = self.pan.y, "zoom");
    }

    /// Change the container size. Pan and zoom are kept.
    pub fn resize(&mut self, size: Size) -> Result<()> {
        self.size = check_size(size)?;
        Ok(())
    }

    /// Show `view_box` (graph space) as large as fits, centered, preserving aspect ratio.
    ///
    /// A zero-extent region is centered without changing the zoom.
    pub fn set_view_box(&mut self, view_box: ViewBox) -> Result<()> {
        let view_box = view_box.validate().inspect_err(|e| {
            warn!(error = %e, "rejected view box");
        })?;
        self.frame(view_box.to_box(), self.size);
        Ok(())
    }

    /// Frame the viewport around `bounds` (graph space), keeping
    /// [`fit_content_margin`](ViewportConfig::fit_content_margin) free on every side.
    ///
    /// Degenerate content (a single point) is centered without changing the zoom. When the
    /// margin leaves no room, it is ignored.
    pub fn fit_to_contents(&mut self, bounds: BoundingBox) -> Result<()> {
        let bounds = bounds.validate().inspect_err(|e| {
            warn!(error = %e, "rejected content bounds");
        })?;
        let margin = self.config.fit_content_margin.max(0.0);
        let inner = Size::new(
            self.size.width - 2.0 * margin,
            self.size.height - 2.0 * margin,
        );
        let available = if inner.width > 0.0 && inner.height > 0.0 {
            inner
        } else {
            self.size
        };
        self.frame(bounds, available);
        Ok(())
    }

    /// Center `bounds` (graph space) in the container without changing the zoom.
    pub fn pan_to_center(&mut self, bounds: BoundingBox) -> Result<()> {
        let bounds = bounds.validate().inspect_err(|e| {
            warn!(error = %e, "rejected content bounds");
        })?;
        self.center_on(bounds.center());
        Ok(())
    }

    fn frame(&mut self, bounds: BoundingBox, available: Size) {
        let (w, h) = (bounds.width(), bounds.height());
        // A zero extent on one axis leaves the other axis to decide.
        let fit = match (w > 0.0, h > 0.0) {
            (true, true) => Some((available.width / w).min(available.height / h)),
            (true, false) => Some(available.width / w),
            (false, true) => Some(available.height / h),
            (false, false) => None,
        };
        if let Some(zoom) = fit {
            self.zoom = zoom.clamp(self.config.min_zoom, self.config.max_zoom);
        }
        self.center_on(bounds.center());
        debug!(
            zoom = self.zoom,
            pan_x = self.pan.x,
            pan_y = self.pan.y,
            "framed viewport"
        );
    }

    fn center_on(&mut self, graph: Point) {
        let screen_center = self.size.to_rect().center().to_vec2();
        self.pan = screen_center - graph.to_vec2() * self.zoom;
    }
}
