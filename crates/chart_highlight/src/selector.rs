//! Winner selection among collected candidates.
//!
//! Proximity-kind series (lines) are hit when the pointer is within
//! [`PROXIMITY_RADIUS`] of the point. Containment-kind series (bars, and anything
//! untagged) are hit when the pointer lies inside the entry's column and above its
//! base. Once a proximity hit is recorded no containment candidate can replace it;
//! a closer proximity hit still can.

use crate::config::PROXIMITY_RADIUS;
use crate::geometry::Point;
use crate::highlight::Highlight;
use crate::series::{AxisSide, SeriesKind};
use crate::source::HighlightSource;

#[derive(Clone, Copy, Debug)]
struct Scan {
    best_distance: f32,
    best: Option<Highlight>,
    best_is_proximity: bool,
}

impl Scan {
    fn accept(&mut self, candidate: Highlight, distance: f32, proximity: bool) {
        self.best = Some(candidate);
        self.best_distance = distance;
        self.best_is_proximity = proximity;
    }
}

/// Pick at most one winning candidate.
///
/// `axis = None` considers candidates on both axes. `max_distance` bounds
/// containment-kind matches only.
pub fn select_highlight<S: HighlightSource + ?Sized>(
    source: &S,
    candidates: &[Highlight],
    pointer: Point,
    axis: Option<AxisSide>,
    max_distance: f32,
) -> Option<Highlight> {
    let mut scan = Scan {
        best_distance: max_distance,
        best: None,
        best_is_proximity: false,
    };
    let step = step_width(source);

    for candidate in candidates {
        if axis.is_some_and(|a| a != candidate.axis) {
            continue;
        }
        let d = candidate.distance_to(pointer);

        if resolve_kind(source, candidate).uses_proximity() {
            if !(d <= PROXIMITY_RADIUS) {
                continue;
            }
            if scan.best_is_proximity && !(d < scan.best_distance) {
                continue;
            }
            tracing::trace!(series = candidate.series_index, d, "proximity candidate accepted");
            scan.accept(*candidate, d, true);
        } else {
            if !(d < scan.best_distance) {
                continue;
            }
            let base = base_px(source, candidate);
            let in_column = (pointer.x - candidate.x_px).abs() <= step;
            let above_base = pointer.y < base;
            if !in_column || !above_base || scan.best_is_proximity {
                continue;
            }
            tracing::trace!(series = candidate.series_index, d, "containment candidate accepted");
            scan.accept(*candidate, d, false);
        }
    }

    scan.best
}

/// Kind governing a candidate: the data set's tag when known, else the series' own.
pub fn resolve_kind<S: HighlightSource + ?Sized>(source: &S, candidate: &Highlight) -> SeriesKind {
    candidate
        .data_set
        .and_then(|ds| source.data_set_kind(ds))
        .or_else(|| {
            source
                .series()
                .get(candidate.series_index)
                .map(|s| s.kind)
        })
        .unwrap_or_default()
}

/// Plot width divided by the number of distinct x slots.
pub fn step_width<S: HighlightSource + ?Sized>(source: &S) -> f32 {
    source.plot_rect().width() / source.x_slot_count().max(1) as f32
}

/// Pixel y the candidate's region grows from; the plot bottom when unknown.
fn base_px<S: HighlightSource + ?Sized>(source: &S, candidate: &Highlight) -> f32 {
    let bottom = source.plot_rect().max_y();
    let (Some(base), Some(transformer)) = (candidate.base_value, source.transformer(candidate.axis))
    else {
        return bottom;
    };
    let y = transformer.pixel_for_value(Point::new(candidate.x, base)).y;
    if y.is_finite() {
        y
    } else {
        bottom
    }
}
