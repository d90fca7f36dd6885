use serde::Serialize;

use crate::geometry::Point;
use crate::series::AxisSide;

/// A data entry bound to its pixel position for one resolution call.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Highlight {
    /// Data value.
    pub x: f32,
    pub y: f32,
    /// Pixel position of the data value on the owning axis.
    pub x_px: f32,
    pub y_px: f32,
    pub series_index: usize,
    pub entry_index: usize,
    pub axis: AxisSide,
    pub data_set: Option<usize>,
    /// Data value the entry's region grows from; `None` means the plot bottom.
    pub base_value: Option<f32>,
}

impl Highlight {
    pub fn value(&self) -> Point {
        Point::new(self.x, self.y)
    }

    pub fn pixel(&self) -> Point {
        Point::new(self.x_px, self.y_px)
    }

    pub fn distance_to(&self, pointer: Point) -> f32 {
        self.pixel().distance(pointer)
    }
}
