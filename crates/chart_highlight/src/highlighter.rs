use crate::axis::preferred_axis;
use crate::collector::collect_candidates;
use crate::config::HighlightConfig;
use crate::geometry::Point;
use crate::highlight::Highlight;
use crate::selector::select_highlight;
use crate::series::AxisSide;
use crate::source::HighlightSource;

/// Resolves pointer positions into the entry to highlight.
///
/// Stateless apart from an optional distance override; every call is a pure function of
/// its arguments, so one instance can be shared freely.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Highlighter {
    max_distance: Option<f32>,
}

impl Highlighter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use `config.max_highlight_distance` instead of the source's value.
    pub fn from_config(config: HighlightConfig) -> Self {
        Self {
            max_distance: Some(config.max_highlight_distance),
        }
    }

    pub fn with_max_highlight_distance(mut self, distance: f32) -> Self {
        self.max_distance = Some(distance);
        self
    }

    fn max_distance<S: HighlightSource + ?Sized>(&self, source: &S) -> f32 {
        self.max_distance
            .unwrap_or_else(|| source.max_highlight_distance())
    }

    /// Entry to highlight for a pointer position in pixels.
    pub fn highlight<S: HighlightSource + ?Sized>(
        &self,
        source: &S,
        pointer: Point,
    ) -> Option<Highlight> {
        // x is shared by both axes; either transformer locates it.
        let transformer = source
            .transformer(AxisSide::Left)
            .or_else(|| source.transformer(AxisSide::Right))?;
        let x_value = transformer.value_for_pixel(pointer).x;
        self.highlight_at_x(source, x_value, pointer)
    }

    /// Like [`Highlighter::highlight`] for callers that already know the data x value.
    pub fn highlight_at_x<S: HighlightSource + ?Sized>(
        &self,
        source: &S,
        x_value: f32,
        pointer: Point,
    ) -> Option<Highlight> {
        let candidates = collect_candidates(source, x_value);
        if candidates.is_empty() {
            tracing::trace!(x_value, "no highlight candidates");
            return None;
        }
        let axis = preferred_axis(&candidates, pointer.y);
        let result = select_highlight(
            source,
            &candidates,
            pointer,
            Some(axis),
            self.max_distance(source),
        );
        tracing::debug!(
            x_value,
            ?axis,
            candidates = candidates.len(),
            series = result.map(|h| h.series_index),
            "resolved highlight"
        );
        result
    }

    /// Skip axis preference; `axis = None` considers candidates on both axes.
    pub fn highlight_with_axis<S: HighlightSource + ?Sized>(
        &self,
        source: &S,
        x_value: f32,
        pointer: Point,
        axis: Option<AxisSide>,
    ) -> Option<Highlight> {
        let candidates = collect_candidates(source, x_value);
        select_highlight(
            source,
            &candidates,
            pointer,
            axis,
            self.max_distance(source),
        )
    }
}
