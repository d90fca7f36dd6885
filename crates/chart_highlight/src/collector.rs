//! Candidate collection: every enabled series contributes the entries at (or nearest to)
//! one x value, placed in pixel space on the series' own axis.

use crate::geometry::Point;
use crate::highlight::Highlight;
use crate::series::{Rounding, Series};
use crate::source::HighlightSource;

/// Collect highlight candidates for data x value `x_value` across all enabled series.
pub fn collect_candidates<S: HighlightSource + ?Sized>(source: &S, x_value: f32) -> Vec<Highlight> {
    let mut out = Vec::new();
    for (series_index, series) in source.series().iter().enumerate() {
        if !series.highlight_enabled || series.is_empty() {
            continue;
        }
        collect_series(source, series_index, series, x_value, &mut out);
    }
    tracing::trace!(x_value, candidates = out.len(), "collected highlight candidates");
    out
}

fn collect_series<S: HighlightSource + ?Sized>(
    source: &S,
    series_index: usize,
    series: &Series,
    x_value: f32,
    out: &mut Vec<Highlight>,
) {
    let Some(transformer) = source.transformer(series.axis) else {
        return;
    };

    let mut range = series.entries_for_x(x_value);
    if range.is_empty() {
        let Some(closest) = series.entry_index_for_x(x_value, None, Rounding::Closest) else {
            return;
        };
        range = series.entries_for_x(series.entries()[closest].x);
    }

    for entry_index in range {
        let entry = &series.entries()[entry_index];
        let px = transformer.pixel_for_value(Point::new(entry.x, entry.y));
        // An entry without a pixel position (e.g. NaN y) cannot be highlighted.
        if !px.is_finite() {
            continue;
        }
        out.push(Highlight {
            x: entry.x,
            y: entry.y,
            x_px: px.x,
            y_px: px.y,
            series_index,
            entry_index,
            axis: series.axis,
            data_set: series.data_set,
            base_value: series.baseline.map(|b| b + entry.negative_sum()),
        });
    }
}
