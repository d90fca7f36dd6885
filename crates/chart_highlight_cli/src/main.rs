//! chart-highlight - resolve a pointer position against a chart scene
//!
//! Loads a scene description (series, axes, view size) from TOML and prints the entry a
//! tooltip or crosshair would highlight at the given pixel position.

mod scene;

use anyhow::Result;
use chart_highlight::{AxisSide, CoordinateTransformer, Highlight, Highlighter, Point};
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use crate::scene::Scene;

/// Resolve the highlighted chart entry under a pointer
#[derive(Parser, Debug)]
#[command(name = "chart-highlight")]
#[command(about = "Resolve the highlighted chart entry under a pointer")]
#[command(version)]
struct Args {
    /// Scene file (TOML)
    #[arg(short, long)]
    scene: PathBuf,

    /// Pointer x in pixels
    #[arg(long, allow_negative_numbers = true)]
    x: f32,

    /// Pointer y in pixels
    #[arg(long, allow_negative_numbers = true)]
    y: f32,

    /// Data x value to resolve at instead of the one under the pointer
    #[arg(long, allow_negative_numbers = true)]
    x_value: Option<f32>,

    /// Consider both axes instead of only the preferred one
    #[arg(long)]
    any_axis: bool,

    /// Print the result as JSON
    #[arg(long)]
    json: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // RUST_LOG wins over --verbose.
    let default_filter = if args.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with_writer(std::io::stderr)
        .init();

    let scene = Scene::load(&args.scene)?;
    let snapshot = scene.to_snapshot()?;
    tracing::info!("Loaded scene {}", args.scene.display());

    let pointer = Point::new(args.x, args.y);
    let highlighter = Highlighter::new();
    let result = match (args.x_value, args.any_axis) {
        (x_value, true) => {
            let x_value = x_value.unwrap_or_else(|| {
                snapshot
                    .axis_transform(AxisSide::Left)
                    .value_for_pixel(pointer)
                    .x
            });
            highlighter.highlight_with_axis(&snapshot, x_value, pointer, None)
        }
        (Some(x_value), false) => highlighter.highlight_at_x(&snapshot, x_value, pointer),
        (None, false) => highlighter.highlight(&snapshot, pointer),
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        println!("{}", describe(result.as_ref()));
    }
    Ok(())
}

fn describe(result: Option<&Highlight>) -> String {
    let Some(h) = result else {
        return "none".to_string();
    };
    let axis = match h.axis {
        AxisSide::Left => "left",
        AxisSide::Right => "right",
    };
    format!(
        "series {} entry {} ({} axis): value ({}, {}) at pixel ({:.1}, {:.1})",
        h.series_index, h.entry_index, axis, h.x, h.y, h.x_px, h.y_px
    )
}
