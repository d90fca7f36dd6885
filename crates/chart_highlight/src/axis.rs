//! Axis preference: the vertical axis whose candidates sit nearest the pointer.

use crate::highlight::Highlight;
use crate::series::AxisSide;

/// Smallest vertical pixel distance from `pointer_y` to a candidate on `axis`.
///
/// `f32::INFINITY` when the axis has no candidates.
pub fn min_axis_distance(candidates: &[Highlight], pointer_y: f32, axis: AxisSide) -> f32 {
    candidates
        .iter()
        .filter(|h| h.axis == axis)
        .map(|h| (h.y_px - pointer_y).abs())
        .fold(f32::INFINITY, f32::min)
}

/// Axis whose nearest candidate is vertically closer to the pointer.
///
/// The right axis wins only on a strictly smaller distance.
pub fn preferred_axis(candidates: &[Highlight], pointer_y: f32) -> AxisSide {
    let left = min_axis_distance(candidates, pointer_y, AxisSide::Left);
    let right = min_axis_distance(candidates, pointer_y, AxisSide::Right);
    if right < left {
        AxisSide::Right
    } else {
        AxisSide::Left
    }
}
