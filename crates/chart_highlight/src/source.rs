use rustc_hash::{FxHashMap, FxHashSet};

use crate::config::HighlightConfig;
use crate::error::{HighlightError, Result};
use crate::geometry::Rect;
use crate::series::{AxisSide, Series, SeriesKind};
use crate::view::{AxisTransform, ChartView, CoordinateTransformer, Domain1D, Domain2D};

/// Read-only view of a chart as seen by the highlighter.
///
/// Implementors must not mutate the exposed data while a resolution call borrows them.
pub trait HighlightSource {
    /// Plotted series in drawing order; candidate `series_index` values index into this.
    fn series(&self) -> &[Series];

    /// Transformer for one vertical axis. `None` leaves that axis' series unplaceable.
    fn transformer(&self, axis: AxisSide) -> Option<&dyn CoordinateTransformer>;

    /// Plotting area in pixels.
    fn plot_rect(&self) -> Rect;

    /// Number of distinct x slots across the chart (bar step computation).
    fn x_slot_count(&self) -> usize;

    fn max_highlight_distance(&self) -> f32;

    /// Kind tag of an overlaid data set, for combined charts.
    fn data_set_kind(&self, _data_set: usize) -> Option<SeriesKind> {
        None
    }
}

/// Owned chart snapshot with fitted per-axis linear transforms.
#[derive(Clone, Debug)]
pub struct ChartSnapshot {
    series: Vec<Series>,
    width: f32,
    height: f32,
    plot: Rect,
    left: AxisTransform,
    right: AxisTransform,
    /// Axes whose transform came from `with_transformer`; never refitted.
    explicit_left: bool,
    explicit_right: bool,
    x_slots: usize,
    config: HighlightConfig,
    data_set_kinds: FxHashMap<usize, SeriesKind>,
}

impl ChartSnapshot {
    /// Build a snapshot for a `width` x `height` view using the default padding.
    pub fn new(series: Vec<Series>, width: f32, height: f32) -> Result<Self> {
        if !(width.is_finite() && height.is_finite() && width > 0.0 && height > 0.0) {
            return Err(HighlightError::InvalidViewSize { width, height });
        }

        let plot = ChartView::default().plot_rect(width, height);
        let (left, right) = fit_axes(&series, plot);
        let x_slots = distinct_x_count(&series);
        tracing::debug!(
            series = series.len(),
            x_slots,
            "built chart snapshot {}x{}",
            width,
            height
        );

        Ok(Self {
            series,
            width,
            height,
            plot,
            left,
            right,
            explicit_left: false,
            explicit_right: false,
            x_slots,
            config: HighlightConfig::default(),
            data_set_kinds: FxHashMap::default(),
        })
    }

    /// Replace the padding and refit the fitted axes.
    ///
    /// Once an explicit transform is set its plot rect wins and the padding is ignored.
    pub fn with_view(mut self, view: ChartView) -> Self {
        if !(self.explicit_left || self.explicit_right) {
            self.plot = view.plot_rect(self.width, self.height);
        }
        self.refit();
        self
    }

    pub fn with_config(mut self, config: HighlightConfig) -> Result<Self> {
        config.validate()?;
        self.config = config;
        Ok(self)
    }

    /// Override the derived distinct-x count.
    pub fn with_x_slot_count(mut self, slots: usize) -> Self {
        self.x_slots = slots.max(1);
        self
    }

    pub fn with_data_set_kind(mut self, data_set: usize, kind: SeriesKind) -> Self {
        self.data_set_kinds.insert(data_set, kind);
        self
    }

    /// Use an externally computed transform for one axis.
    ///
    /// Its plot rect becomes the snapshot's plotting area; the other axis, if still
    /// fitted, is refitted onto it.
    pub fn with_transformer(mut self, axis: AxisSide, transform: AxisTransform) -> Self {
        match axis {
            AxisSide::Left => {
                self.left = transform;
                self.explicit_left = true;
            }
            AxisSide::Right => {
                self.right = transform;
                self.explicit_right = true;
            }
        }
        self.plot = transform.plot;
        self.refit();
        self
    }

    fn refit(&mut self) {
        let (left, right) = fit_axes(&self.series, self.plot);
        if !self.explicit_left {
            self.left = left;
        }
        if !self.explicit_right {
            self.right = right;
        }
    }

    pub fn axis_transform(&self, axis: AxisSide) -> &AxisTransform {
        match axis {
            AxisSide::Left => &self.left,
            AxisSide::Right => &self.right,
        }
    }
}

impl HighlightSource for ChartSnapshot {
    fn series(&self) -> &[Series] {
        &self.series
    }

    fn transformer(&self, axis: AxisSide) -> Option<&dyn CoordinateTransformer> {
        Some(self.axis_transform(axis))
    }

    fn plot_rect(&self) -> Rect {
        self.plot
    }

    fn x_slot_count(&self) -> usize {
        self.x_slots
    }

    fn max_highlight_distance(&self) -> f32 {
        self.config.max_highlight_distance
    }

    fn data_set_kind(&self, data_set: usize) -> Option<SeriesKind> {
        self.data_set_kinds.get(&data_set).copied()
    }
}

/// Shared x domain, independent y domain per axis.
fn fit_axes(series: &[Series], plot: Rect) -> (AxisTransform, AxisTransform) {
    let mut x = Domain1D::empty();
    let mut left_y = Domain1D::empty();
    let mut right_y = Domain1D::empty();
    for s in series {
        if let Some(r) = s.x_range() {
            x = x.union(r);
        }
        let y = s.y_range();
        match s.axis {
            AxisSide::Left => left_y = left_y.union(y),
            AxisSide::Right => right_y = right_y.union(y),
        }
    }
    let x = x.padded_if_degenerate();
    (
        AxisTransform::new(Domain2D::new(x, left_y.padded_if_degenerate()), plot),
        AxisTransform::new(Domain2D::new(x, right_y.padded_if_degenerate()), plot),
    )
}

fn distinct_x_count(series: &[Series]) -> usize {
    let mut seen = FxHashSet::default();
    for s in series {
        for e in s.entries() {
            // `+ 0.0` folds -0.0 into 0.0.
            seen.insert((e.x + 0.0).to_bits());
        }
    }
    seen.len().max(1)
}
