//! End-to-end highlight resolution tests
//!
//! These use a hand-built linear transformer so every pixel position below is exact:
//! - left axis:  x_px = 10 + 10 * x, y_px = 100 - 10 * y
//! - right axis: x_px = 10 + 10 * x, y_px = 200 - 20 * y

use chart_highlight::prelude::*;
use chart_highlight::PROXIMITY_RADIUS;

#[derive(Clone, Copy)]
struct Linear {
    y0: f32,
    sy: f32,
}

impl CoordinateTransformer for Linear {
    fn value_for_pixel(&self, px: Point) -> Point {
        Point::new((px.x - 10.0) / 10.0, (self.y0 - px.y) / self.sy)
    }

    fn pixel_for_value(&self, value: Point) -> Point {
        Point::new(10.0 + 10.0 * value.x, self.y0 - self.sy * value.y)
    }
}

struct Chart {
    series: Vec<Series>,
    left: Linear,
    right: Linear,
    max_distance: f32,
}

impl Chart {
    fn new(series: Vec<Series>) -> Self {
        Self {
            series,
            left: Linear { y0: 100.0, sy: 10.0 },
            right: Linear { y0: 200.0, sy: 20.0 },
            max_distance: 500.0,
        }
    }
}

impl HighlightSource for Chart {
    fn series(&self) -> &[Series] {
        &self.series
    }

    fn transformer(&self, axis: AxisSide) -> Option<&dyn CoordinateTransformer> {
        Some(match axis {
            AxisSide::Left => &self.left,
            AxisSide::Right => &self.right,
        })
    }

    fn plot_rect(&self) -> Rect {
        Rect::new(0.0, 0.0, 40.0, 200.0)
    }

    fn x_slot_count(&self) -> usize {
        2
    }

    fn max_highlight_distance(&self) -> f32 {
        self.max_distance
    }
}

fn line() -> Series {
    Series::from_xy(SeriesKind::Proximity, &[(0.0, 0.0), (1.0, 5.0)]).unwrap()
}

/// Bar at x=0 with top pixel-y 100 and base pixel-y 150.
fn bar() -> Series {
    Series::from_xy(SeriesKind::Containment, &[(0.0, 0.0)])
        .unwrap()
        .with_baseline(-5.0)
}

#[test]
fn line_wins_over_bar_near_shared_point() {
    let chart = Chart::new(vec![line(), bar()]);
    let h = Highlighter::new()
        .highlight(&chart, Point::new(10.0, 101.0))
        .unwrap();
    assert_eq!(h.series_index, 0);
    assert_eq!((h.x, h.y), (0.0, 0.0));
    assert_eq!(h.pixel(), Point::new(10.0, 100.0));

    // Same result with the bar drawn first.
    let chart = Chart::new(vec![bar(), line()]);
    let h = Highlighter::new()
        .highlight(&chart, Point::new(10.0, 101.0))
        .unwrap();
    assert_eq!(h.series_index, 1);
}

#[test]
fn pointer_below_bar_base_highlights_nothing() {
    let chart = Chart::new(vec![line(), bar()]);
    assert!(Highlighter::new()
        .highlight(&chart, Point::new(10.0, 160.0))
        .is_none());
}

#[test]
fn pointer_inside_bar_highlights_bar() {
    let chart = Chart::new(vec![line(), bar()]);
    let h = Highlighter::new()
        .highlight(&chart, Point::new(12.0, 140.0))
        .unwrap();
    assert_eq!(h.series_index, 1);
}

#[test]
fn pointer_on_proximity_entry_returns_it() {
    let chart = Chart::new(vec![line(), bar()]);
    for (entry_index, e) in line().entries().iter().enumerate() {
        let p = chart.left.pixel_for_value(Point::new(e.x, e.y));
        let h = Highlighter::new().highlight(&chart, p).unwrap();
        assert_eq!((h.series_index, h.entry_index), (0, entry_index));
        assert_eq!(h.distance_to(p), 0.0);
    }
}

#[test]
fn proximity_entry_beyond_radius_is_never_selected() {
    let chart = Chart::new(vec![line()]);
    // Entry (1, 5) sits at pixel (20, 50).
    let just_inside = Point::new(20.0, 50.0 + PROXIMITY_RADIUS);
    let just_outside = Point::new(20.0, 50.0 + PROXIMITY_RADIUS + 1.0);
    assert!(Highlighter::new().highlight(&chart, just_inside).is_some());
    assert!(Highlighter::new().highlight(&chart, just_outside).is_none());

    // Even a huge max distance does not widen the radius.
    let wide = Highlighter::new().with_max_highlight_distance(f32::INFINITY);
    assert!(wide.highlight(&chart, just_outside).is_none());
}

#[test]
fn nearer_axis_is_preferred() {
    let left = Series::from_xy(SeriesKind::Proximity, &[(0.0, 0.0)]).unwrap();
    // (0, 2) on the right axis sits at pixel (10, 160).
    let right = Series::from_xy(SeriesKind::Proximity, &[(0.0, 2.0)])
        .unwrap()
        .with_axis(AxisSide::Right);
    let chart = Chart::new(vec![left, right]);

    let h = Highlighter::new()
        .highlight(&chart, Point::new(10.0, 150.0))
        .unwrap();
    assert_eq!((h.series_index, h.axis), (1, AxisSide::Right));

    let h = Highlighter::new()
        .highlight(&chart, Point::new(10.0, 115.0))
        .unwrap();
    assert_eq!((h.series_index, h.axis), (0, AxisSide::Left));
}

#[test]
fn unconstrained_axis_considers_both() {
    let left = Series::from_xy(SeriesKind::Proximity, &[(0.0, 0.0)]).unwrap();
    let right = Series::from_xy(SeriesKind::Proximity, &[(0.0, 2.0)])
        .unwrap()
        .with_axis(AxisSide::Right);
    let chart = Chart::new(vec![left, right]);

    // Equidistant from both: preference resolves to left, whose entry is out of radius.
    let pointer = Point::new(10.0, 130.0);
    assert!(Highlighter::new().highlight(&chart, pointer).is_none());

    let pointer = Point::new(10.0, 140.0);
    let h = Highlighter::new()
        .highlight_with_axis(&chart, 0.0, pointer, None)
        .unwrap();
    assert_eq!(h.axis, AxisSide::Right);
}

#[test]
fn resolution_is_idempotent() {
    let chart = Chart::new(vec![line(), bar()]);
    let highlighter = Highlighter::new();
    for pointer in [
        Point::new(10.0, 101.0),
        Point::new(12.0, 140.0),
        Point::new(19.0, 60.0),
        Point::new(10.0, 160.0),
    ] {
        assert_eq!(
            highlighter.highlight(&chart, pointer),
            highlighter.highlight(&chart, pointer)
        );
    }
}

#[test]
fn raising_max_distance_keeps_containment_winner() {
    let tall = Series::from_xy(SeriesKind::Containment, &[(0.0, 8.0)])
        .unwrap()
        .with_baseline(-5.0);
    let short = Series::from_xy(SeriesKind::Containment, &[(0.0, 2.0)])
        .unwrap()
        .with_baseline(-5.0);
    let chart = Chart::new(vec![tall, short]);
    let pointer = Point::new(14.0, 110.0);

    let mut previous = None;
    for max in [1.0, 10.0, 35.0, 100.0, 1_000.0, f32::INFINITY] {
        let result = Highlighter::new()
            .with_max_highlight_distance(max)
            .highlight(&chart, pointer);
        if let Some(prev) = previous {
            assert_eq!(result, Some(prev), "winner changed at max distance {max}");
        }
        previous = result.or(previous);
    }
    assert_eq!(previous.map(|h| h.series_index), Some(1));
}

#[test]
fn disabled_series_are_ignored() {
    let chart = Chart::new(vec![line().with_highlight_enabled(false), bar()]);
    let h = Highlighter::new()
        .highlight(&chart, Point::new(10.0, 101.0))
        .unwrap();
    assert_eq!(h.series_index, 1);
}

#[test]
fn out_of_domain_pointer_falls_back_to_closest_x() {
    let chart = Chart::new(vec![line()]);
    // Data x 3.0 is past the last entry; (1, 5) at pixel (20, 50) is the fallback.
    let h = Highlighter::new()
        .highlight_at_x(&chart, 3.0, Point::new(25.0, 50.0))
        .unwrap();
    assert_eq!((h.x, h.y), (1.0, 5.0));
}

#[test]
fn combined_snapshot_uses_data_set_kinds() {
    // Bars tagged as proximity through the combined-data lookup behave like a line.
    let bars = Series::from_xy(SeriesKind::Other, &[(0.0, 4.0), (1.0, 4.0)])
        .unwrap()
        .with_baseline(0.0)
        .with_data_set(1);
    let chart = ChartSnapshot::new(vec![bars], 400.0, 300.0)
        .unwrap()
        .with_data_set_kind(1, SeriesKind::Proximity);
    let t = chart.axis_transform(AxisSide::Left);
    let top = t.pixel_for_value(Point::new(1.0, 4.0));
    let deep_inside = Point::new(top.x, top.y + 100.0);

    assert!(Highlighter::new().highlight(&chart, deep_inside).is_none());
    assert!(Highlighter::new()
        .highlight(&chart, Point::new(top.x, top.y + 5.0))
        .is_some());
}

#[test]
fn stacked_bar_base_follows_negative_components() {
    // Stack [3, -2] on baseline 0: region spans y = -2 ..= 1 in data space.
    let stacked = Series::new(
        SeriesKind::Containment,
        vec![DataEntry::stacked(0.0, &[3.0, -2.0])],
    )
    .unwrap()
    .with_baseline(0.0);
    let chart = Chart::new(vec![stacked]);
    // y = -1 (pixel 110) is below the zero baseline but above the stack base (pixel 120).
    let h = Highlighter::new().highlight(&chart, Point::new(10.0, 110.0));
    assert!(h.is_some());
    assert!(Highlighter::new()
        .highlight(&chart, Point::new(10.0, 121.0))
        .is_none());
}
