//! Chart scene files (scene.toml)

use anyhow::{Context, Result};
use chart_highlight::{
    AxisSide, ChartSnapshot, ChartView, DataEntry, HighlightConfig, Series, SeriesKind,
};
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Top-level scene description
#[derive(Debug, Deserialize)]
pub struct Scene {
    /// View width in pixels
    pub width: f32,
    /// View height in pixels
    pub height: f32,
    /// Plot padding (left, top, right, bottom)
    #[serde(default)]
    pub padding: Option<[f32; 4]>,
    /// Override for the distinct x slot count
    #[serde(default)]
    pub x_slots: Option<usize>,
    #[serde(default)]
    pub config: HighlightConfig,
    /// Kind tags for overlaid data sets
    #[serde(default)]
    pub data_sets: Vec<DataSetScene>,
    #[serde(default)]
    pub series: Vec<SeriesScene>,
}

#[derive(Debug, Deserialize)]
pub struct DataSetScene {
    pub index: usize,
    pub kind: SeriesKind,
}

/// One `[[series]]` table
#[derive(Debug, Deserialize)]
pub struct SeriesScene {
    #[serde(default)]
    pub label: Option<String>,
    #[serde(default)]
    pub kind: SeriesKind,
    #[serde(default)]
    pub axis: AxisSide,
    #[serde(default = "default_true")]
    pub enabled: bool,
    #[serde(default)]
    pub baseline: Option<f32>,
    #[serde(default)]
    pub data_set: Option<usize>,
    /// `[x, y]` pairs
    #[serde(default)]
    pub entries: Vec<[f32; 2]>,
    /// `[x, y1, y2, ...]` stacked entries
    #[serde(default)]
    pub stacks: Vec<Vec<f32>>,
}

fn default_true() -> bool {
    true
}

impl SeriesScene {
    fn to_series(&self, index: usize) -> Result<Series> {
        let mut entries: Vec<DataEntry> = self
            .entries
            .iter()
            .map(|&[x, y]| DataEntry::new(x, y))
            .collect();
        for (i, stack) in self.stacks.iter().enumerate() {
            let Some((&x, values)) = stack.split_first() else {
                anyhow::bail!("series {index}: stack {i} is empty");
            };
            entries.push(DataEntry::stacked(x, values));
        }
        // Hand-written files need not be ordered.
        entries.sort_by(|a, b| a.x.total_cmp(&b.x));

        let mut series = Series::new(self.kind, entries)
            .with_context(|| format!("series {index} is invalid"))?
            .with_axis(self.axis)
            .with_highlight_enabled(self.enabled);
        if let Some(baseline) = self.baseline {
            series = series.with_baseline(baseline);
        }
        if let Some(data_set) = self.data_set {
            series = series.with_data_set(data_set);
        }
        if let Some(label) = &self.label {
            series = series.with_label(label.clone());
        }
        Ok(series)
    }
}

impl Scene {
    /// Load a scene from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        Self::from_toml(&content).with_context(|| format!("Failed to parse {}", path.display()))
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Build the chart snapshot this scene describes
    pub fn to_snapshot(&self) -> Result<ChartSnapshot> {
        let series = self
            .series
            .iter()
            .enumerate()
            .map(|(i, s)| s.to_series(i))
            .collect::<Result<Vec<_>>>()?;

        let mut snapshot = ChartSnapshot::new(series, self.width, self.height)?
            .with_config(self.config)?;
        if let Some(padding) = self.padding {
            snapshot = snapshot.with_view(ChartView::new(padding));
        }
        if let Some(slots) = self.x_slots {
            snapshot = snapshot.with_x_slot_count(slots);
        }
        for ds in &self.data_sets {
            snapshot = snapshot.with_data_set_kind(ds.index, ds.kind);
        }
        Ok(snapshot)
    }
}
