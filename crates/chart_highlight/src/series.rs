use std::ops::Range;

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::error::{HighlightError, Result};
use crate::view::Domain1D;

/// One plotted value.
///
/// `stack` carries the y-components of a multi-valued entry (stacked bars).
/// For such entries `y` is the plotted total.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct DataEntry {
    pub x: f32,
    pub y: f32,
    #[serde(default, skip_serializing_if = "SmallVec::is_empty")]
    pub stack: SmallVec<[f32; 4]>,
}

impl DataEntry {
    pub fn new(x: f32, y: f32) -> Self {
        Self {
            x,
            y,
            stack: SmallVec::new(),
        }
    }

    /// Multi-valued entry; `y` becomes the sum of the finite components.
    pub fn stacked(x: f32, values: &[f32]) -> Self {
        let y = values.iter().filter(|v| v.is_finite()).sum();
        Self {
            x,
            y,
            stack: SmallVec::from_slice(values),
        }
    }

    pub fn is_stacked(&self) -> bool {
        !self.stack.is_empty()
    }

    /// Sum of the negative stack components (0 for single-valued entries).
    pub fn negative_sum(&self) -> f32 {
        self.stack
            .iter()
            .filter(|v| v.is_finite() && **v < 0.0)
            .sum()
    }

    /// Sum of the positive stack components (0 for single-valued entries).
    pub fn positive_sum(&self) -> f32 {
        self.stack
            .iter()
            .filter(|v| v.is_finite() && **v > 0.0)
            .sum()
    }
}

/// How a series is hit-tested.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SeriesKind {
    /// Closest point within a fixed radius (lines, scatter).
    Proximity,
    /// Pointer inside the rendered region (bars).
    Containment,
    /// Anything else; uses containment rules.
    #[default]
    Other,
}

impl SeriesKind {
    pub fn uses_proximity(self) -> bool {
        matches!(self, SeriesKind::Proximity)
    }
}

/// Vertical axis a series is plotted against.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AxisSide {
    #[default]
    Left,
    Right,
}

/// Rounding policy for closest-x lookups.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Rounding {
    /// First entry at or after the target.
    Up,
    /// Last entry at or before the target.
    Down,
    /// Nearer of the two neighbours; the lower one wins ties.
    #[default]
    Closest,
}

/// A plotted series.
///
/// Invariant: entry x values are finite and sorted ascending.
#[derive(Clone, Debug, PartialEq)]
pub struct Series {
    entries: Vec<DataEntry>,
    pub kind: SeriesKind,
    pub axis: AxisSide,
    pub highlight_enabled: bool,
    /// Data value the series' regions grow from (bars). `None` means the plot bottom.
    pub baseline: Option<f32>,
    /// Index of the overlaid data set this series belongs to, if any.
    pub data_set: Option<usize>,
    pub label: Option<String>,
}

impl Series {
    pub fn new(kind: SeriesKind, entries: Vec<DataEntry>) -> Result<Self> {
        for (index, e) in entries.iter().enumerate() {
            if !e.x.is_finite() {
                return Err(HighlightError::NonFiniteX { index });
            }
        }
        if let Some(index) = entries.windows(2).position(|w| w[0].x > w[1].x) {
            return Err(HighlightError::UnsortedX {
                index: index + 1,
                x: entries[index + 1].x,
                previous: entries[index].x,
            });
        }
        Ok(Self {
            entries,
            kind,
            axis: AxisSide::Left,
            highlight_enabled: true,
            baseline: None,
            data_set: None,
            label: None,
        })
    }

    /// Convenience constructor from `(x, y)` pairs.
    pub fn from_xy(kind: SeriesKind, points: &[(f32, f32)]) -> Result<Self> {
        Self::new(
            kind,
            points.iter().map(|&(x, y)| DataEntry::new(x, y)).collect(),
        )
    }

    pub fn with_axis(mut self, axis: AxisSide) -> Self {
        self.axis = axis;
        self
    }

    pub fn with_baseline(mut self, baseline: f32) -> Self {
        self.baseline = Some(baseline).filter(|b| b.is_finite());
        self
    }

    pub fn with_data_set(mut self, data_set: usize) -> Self {
        self.data_set = Some(data_set);
        self
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn with_highlight_enabled(mut self, enabled: bool) -> Self {
        self.highlight_enabled = enabled;
        self
    }

    pub fn entries(&self) -> &[DataEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn lower_bound_x(&self, x: f32) -> usize {
        let mut lo = 0usize;
        let mut hi = self.len();
        while lo < hi {
            let mid = (lo + hi) / 2;
            if self.entries[mid].x < x {
                lo = mid + 1;
            } else {
                hi = mid;
            }
        }
        lo
    }

    pub fn upper_bound_x(&self, x: f32) -> usize {
        let mut lo = 0usize;
        let mut hi = self.len();
        while lo < hi {
            let mid = (lo + hi) / 2;
            if self.entries[mid].x <= x {
                lo = mid + 1;
            } else {
                hi = mid;
            }
        }
        lo
    }

    /// Indices of all entries whose x equals `x` exactly (possibly empty).
    pub fn entries_for_x(&self, x: f32) -> Range<usize> {
        let start = self.lower_bound_x(x);
        let end = self.upper_bound_x(x).max(start);
        start..end
    }

    /// Index of the entry closest to `x` under `rounding`.
    ///
    /// When several entries share the chosen x, `closest_to_y` picks the one with the
    /// nearest y; with `None` the first of them is returned.
    pub fn entry_index_for_x(
        &self,
        x: f32,
        closest_to_y: Option<f32>,
        rounding: Rounding,
    ) -> Option<usize> {
        if self.is_empty() || x.is_nan() {
            return None;
        }
        let n = self.len();
        let idx = match rounding {
            Rounding::Up => self.lower_bound_x(x).min(n - 1),
            Rounding::Down => self.upper_bound_x(x).saturating_sub(1),
            Rounding::Closest => {
                let i = self.lower_bound_x(x);
                if i == 0 {
                    0
                } else if i >= n {
                    n - 1
                } else {
                    let da = (self.entries[i - 1].x - x).abs();
                    let db = (self.entries[i].x - x).abs();
                    if db < da {
                        i
                    } else {
                        i - 1
                    }
                }
            }
        };

        let same_x = self.entries_for_x(self.entries[idx].x);
        let Some(target_y) = closest_to_y.filter(|y| !y.is_nan()) else {
            return Some(same_x.start);
        };
        same_x
            .map(|i| (i, (self.entries[i].y - target_y).abs()))
            .filter(|(_, d)| !d.is_nan())
            .min_by(|a, b| a.1.total_cmp(&b.1))
            .map(|(i, _)| i)
            .or(Some(idx))
    }

    pub fn x_range(&self) -> Option<Domain1D> {
        let first = self.entries.first()?;
        let last = self.entries.last()?;
        Some(Domain1D::new(first.x, last.x))
    }

    /// Finite y extent, including stack extremes and the baseline.
    pub fn y_range(&self) -> Domain1D {
        let mut d = Domain1D::empty();
        let base = self.baseline.unwrap_or(0.0);
        for e in &self.entries {
            d.include(e.y);
            if e.is_stacked() {
                d.include(base + e.negative_sum());
                d.include(base + e.positive_sum());
            }
        }
        if let Some(b) = self.baseline {
            d.include(b);
        }
        d
    }
}
