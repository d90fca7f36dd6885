use serde::{Deserialize, Serialize};

use crate::geometry::{Point, Rect};

/// 1D numeric domain (min..max).
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Domain1D {
    pub min: f32,
    pub max: f32,
}

impl Domain1D {
    pub fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }

    /// Empty domain that the first `include` call replaces.
    pub fn empty() -> Self {
        Self {
            min: f32::INFINITY,
            max: f32::NEG_INFINITY,
        }
    }

    pub fn span(&self) -> f32 {
        self.max - self.min
    }

    pub fn is_valid(&self) -> bool {
        self.min.is_finite() && self.max.is_finite() && self.max > self.min
    }

    /// Grow the domain to contain `v`. Non-finite values are ignored.
    pub fn include(&mut self, v: f32) {
        if !v.is_finite() {
            return;
        }
        self.min = self.min.min(v);
        self.max = self.max.max(v);
    }

    pub fn union(&self, other: Domain1D) -> Domain1D {
        let mut out = *self;
        out.include(other.min);
        out.include(other.max);
        out
    }

    /// Expand a zero-width or invalid domain into something a transform can divide by.
    pub fn padded_if_degenerate(&self) -> Domain1D {
        if self.is_valid() {
            return *self;
        }
        if self.min.is_finite() && self.max.is_finite() {
            let mid = (self.min + self.max) * 0.5;
            Domain1D::new(mid - 1.0, mid + 1.0)
        } else {
            // Nothing finite was included (e.g. all-NaN data).
            Domain1D::new(-1.0, 1.0)
        }
    }
}

/// 2D domain.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Domain2D {
    pub x: Domain1D,
    pub y: Domain1D,
}

impl Domain2D {
    pub fn new(x: Domain1D, y: Domain1D) -> Self {
        Self { x, y }
    }

    pub fn is_valid(&self) -> bool {
        self.x.is_valid() && self.y.is_valid()
    }
}

/// Bidirectional mapping between pixel space and data space for one vertical axis.
pub trait CoordinateTransformer {
    /// Data value under a pixel position.
    fn value_for_pixel(&self, px: Point) -> Point;

    /// Pixel position of a data value.
    fn pixel_for_value(&self, value: Point) -> Point;
}

/// Linear transform of a data domain onto a plotting rect.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct AxisTransform {
    pub domain: Domain2D,
    pub plot: Rect,
}

impl AxisTransform {
    pub fn new(domain: Domain2D, plot: Rect) -> Self {
        Self { domain, plot }
    }

    /// A degenerate x domain maps to the plot's left edge.
    pub fn x_to_px(&self, x: f32) -> f32 {
        let span = self.domain.x.span();
        if !(span > 0.0) {
            return self.plot.x();
        }
        let t = (x - self.domain.x.min) / span;
        self.plot.x() + t * self.plot.width()
    }

    /// A degenerate y domain maps to the plot's bottom edge.
    pub fn y_to_px(&self, y: f32) -> f32 {
        let span = self.domain.y.span();
        if !(span > 0.0) {
            return self.plot.max_y();
        }
        // y increases downward in screen coords.
        let t = (y - self.domain.y.min) / span;
        self.plot.y() + (1.0 - t) * self.plot.height()
    }

    pub fn px_to_x(&self, px: f32) -> f32 {
        if !(self.plot.width() > 0.0) {
            return self.domain.x.min;
        }
        let t = ((px - self.plot.x()) / self.plot.width()).clamp(0.0, 1.0);
        self.domain.x.min + t * self.domain.x.span()
    }

    pub fn px_to_y(&self, py: f32) -> f32 {
        if !(self.plot.height() > 0.0) {
            return self.domain.y.min;
        }
        let t = ((py - self.plot.y()) / self.plot.height()).clamp(0.0, 1.0);
        self.domain.y.min + (1.0 - t) * self.domain.y.span()
    }
}

impl CoordinateTransformer for AxisTransform {
    fn value_for_pixel(&self, px: Point) -> Point {
        // Off-plot pointers map onto the domain edge.
        let px = if self.plot.is_empty() {
            px
        } else {
            self.plot.clamp(px)
        };
        Point::new(self.px_to_x(px.x), self.px_to_y(px.y))
    }

    fn pixel_for_value(&self, value: Point) -> Point {
        Point::new(self.x_to_px(value.x), self.y_to_px(value.y))
    }
}

/// Layout of the plotting area inside a chart view.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ChartView {
    /// Padding inside the chart plotting area (left, top, right, bottom).
    pub padding: [f32; 4],
}

impl Default for ChartView {
    fn default() -> Self {
        Self {
            padding: [32.0, 16.0, 16.0, 24.0],
        }
    }
}

impl ChartView {
    pub fn new(padding: [f32; 4]) -> Self {
        Self { padding }
    }

    pub fn plot_rect(&self, width: f32, height: f32) -> Rect {
        let [left, top, right, bottom] = self.padding;
        let w = (width - left - right).max(0.0);
        let h = (height - top - bottom).max(0.0);
        Rect::new(left, top, w, h)
    }
}
