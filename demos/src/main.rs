// Copyright 2025 the Energy Pulse Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Headless Energy Pulse demo.
//!
//! Loads building records, applies the requested filters, writes the frame
//! as SVG and reports what sits under each `--probe` point.
//!
//! ```text
//! RUST_LOG=info cargo run -p pulse_demos -- --config demos/pulse.toml --probe 600,400
//! ```

mod config;

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::Parser;
use kurbo::{Point, Size};
use pulse_dataset::{DataStore, Table};
use pulse_imaging_svg::SvgBackend;
use pulse_scene::{Explorer, InputEvent, RenderStyle};
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::config::PulseConfig;

#[derive(Parser, Debug)]
#[command(author, version, about = "Render building energy records to an SVG scatter map")]
struct Args {
    /// TOML configuration file.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Input CSV; overrides the configured one.
    #[arg(long)]
    csv: Option<PathBuf>,

    /// Keep only rows from this region at load time.
    #[arg(long)]
    restrict_region: Option<String>,

    /// Region selector ("All" for every region).
    #[arg(long)]
    region: Option<String>,

    /// Category selector ("All" for every category).
    #[arg(long)]
    category: Option<String>,

    /// Year to show; defaults to the latest year in the data.
    #[arg(long)]
    year: Option<i32>,

    /// Wheel steps to zoom in (negative zooms out), anchored at the canvas center.
    #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
    zoom_steps: i32,

    /// SVG output path; overrides the configured one.
    #[arg(long)]
    out: Option<PathBuf>,

    /// Screen point to hit-test, as `x,y`. May be repeated.
    #[arg(long, value_parser = parse_point)]
    probe: Vec<Point>,
}

fn parse_point(s: &str) -> Result<Point, String> {
    let (x, y) = s
        .split_once(',')
        .ok_or_else(|| format!("expected `x,y`, got `{s}`"))?;
    let coord = |v: &str| {
        v.trim()
            .parse::<f64>()
            .map_err(|e| format!("invalid coordinate `{v}`: {e}"))
    };
    Ok(Point::new(coord(x)?, coord(y)?))
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args = Args::parse();
    let mut config = match &args.config {
        Some(path) => PulseConfig::load_from_file(path)?,
        None => PulseConfig::default(),
    };
    if let Some(csv) = args.csv {
        config.input.csv = Some(csv);
    }
    if args.restrict_region.is_some() {
        config.input.restrict_region = args.restrict_region;
    }
    if let Some(out) = args.out {
        config.output.svg = out;
    }
    let Some(csv) = config.input.csv.as_deref() else {
        bail!("no input CSV: pass --csv or set input.csv in the config file");
    };

    let table = Table::from_path(csv)
        .with_context(|| format!("Failed to load records from {}", csv.display()))?;
    let missing: Vec<_> = config
        .input
        .fields
        .columns()
        .into_iter()
        .filter(|c| !table.has_column(c))
        .collect();
    if !missing.is_empty() {
        tracing::warn!(?missing, "configured columns not found in input");
    }

    let store = DataStore::new(config.input.fields.clone())
        .with_region_restriction(config.input.restrict_region.clone());
    let dataset = store.ingest(table.rows());

    let canvas = Size::new(
        f64::from(config.canvas.width),
        f64::from(config.canvas.height),
    );
    let mut explorer =
        Explorer::new(dataset, canvas).with_region_label(store.restrict_region().map(str::to_owned));
    if args.region.is_some() {
        explorer.set_region(args.region);
    }
    if args.category.is_some() {
        explorer.set_category(args.category);
    }
    if let Some(year) = args.year {
        let bounds = explorer.year_bounds();
        if !bounds.contains(year) {
            tracing::warn!(year, min = bounds.min, max = bounds.max, "year outside data range");
        }
        explorer.set_year(year);
    }
    let center = Point::new(canvas.width * 0.5, canvas.height * 0.5);
    for _ in 0..args.zoom_steps.unsigned_abs() {
        explorer.on_event(InputEvent::Wheel {
            at: center,
            delta_y: -f64::from(args.zoom_steps.signum()),
        });
    }

    let mut svg = SvgBackend::default();
    let stats = explorer.render(&RenderStyle::default(), &mut svg);
    fs::write(
        &config.output.svg,
        svg.to_svg(config.canvas.width, config.canvas.height),
    )
    .with_context(|| format!("Failed to write {}", config.output.svg.display()))?;
    info!(
        path = %config.output.svg.display(),
        drawn = stats.drawn,
        culled = stats.culled,
        unprojectable = stats.unprojectable,
        "wrote frame"
    );

    let criteria = explorer.criteria();
    println!(
        "{} of {} buildings visible (region: {}, category: {}, year: {})",
        explorer.visible().len(),
        explorer.dataset().len(),
        criteria.region.as_deref().unwrap_or("All"),
        criteria.category.as_deref().unwrap_or("All"),
        criteria.year,
    );
    println!("{}", explorer.legend());

    for probe in args.probe {
        explorer.on_event(InputEvent::Move(probe));
        match explorer.tooltip() {
            Some(tip) => println!("\nprobe ({}, {}):\n{}", probe.x, probe.y, tip.text),
            None => println!("\nprobe ({}, {}): nothing here", probe.x, probe.y),
        }
    }

    Ok(())
}
