//! chart_highlight
//!
//! Resolves a pointer position on a rendered chart into the single data entry to
//! highlight (tooltip, crosshair marker).
//!
//! Resolution runs in four steps per pointer event:
//! - locate the data x under the pointer
//! - collect the entries at (or nearest to) that x from every enabled series
//! - prefer the vertical axis whose candidates sit closest to the pointer
//! - pick one winner; line-like series beat bar-like series
//!
//! # Example
//!
//! ```rust
//! use chart_highlight::prelude::*;
//!
//! let line = Series::from_xy(SeriesKind::Proximity, &[(0.0, 1.0), (1.0, 3.0)])?;
//! let bars = Series::from_xy(SeriesKind::Containment, &[(0.0, 2.0), (1.0, 2.0)])?
//!     .with_baseline(0.0);
//! let chart = ChartSnapshot::new(vec![line, bars], 400.0, 300.0)?;
//!
//! let on_line = chart
//!     .axis_transform(AxisSide::Left)
//!     .pixel_for_value(Point::new(1.0, 3.0));
//! let hit = Highlighter::new().highlight(&chart, on_line).expect("pointer is on the line");
//! assert_eq!((hit.series_index, hit.x, hit.y), (0, 1.0, 3.0));
//! # Ok::<(), chart_highlight::HighlightError>(())
//! ```

mod axis;
mod collector;
mod config;
mod error;
mod geometry;
mod highlight;
mod highlighter;
mod selector;
mod series;
mod source;
mod view;

pub use axis::{min_axis_distance, preferred_axis};
pub use collector::collect_candidates;
pub use config::{HighlightConfig, PROXIMITY_RADIUS};
pub use error::{HighlightError, Result};
pub use geometry::{Point, Rect, Size};
pub use highlight::Highlight;
pub use highlighter::Highlighter;
pub use selector::{resolve_kind, select_highlight, step_width};
pub use series::{AxisSide, DataEntry, Rounding, Series, SeriesKind};
pub use source::{ChartSnapshot, HighlightSource};
pub use view::{AxisTransform, ChartView, CoordinateTransformer, Domain1D, Domain2D};

/// Common imports for highlight users.
pub mod prelude {
    pub use crate::config::HighlightConfig;
    pub use crate::geometry::{Point, Rect};
    pub use crate::highlight::Highlight;
    pub use crate::highlighter::Highlighter;
    pub use crate::series::{AxisSide, DataEntry, Series, SeriesKind};
    pub use crate::source::{ChartSnapshot, HighlightSource};
    pub use crate::view::{AxisTransform, ChartView, CoordinateTransformer};
}
